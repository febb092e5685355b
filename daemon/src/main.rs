//! stakewatch — entry point for checking a Verus wallet for new stakes.

use anyhow::Context;
use clap::Parser;
use stakewatch_notify::{
    ApiCredentials, ApiGatewayClient, DeferredApiClient, StakeNotification, StakePeriod,
};
use stakewatch_reconcile::{CheckerConfig, StakeChecker};
use stakewatch_store_file::FileCheckpointStore;
use stakewatch_types::{Amount, Timestamp, TxId};
use stakewatch_utils::{LogFormat, LogTarget};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stakewatch", about = "Notify new Verus stake transactions")]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, global = true, env = "STAKEWATCH_CONFIG")]
    config: Option<PathBuf>,

    /// Checkpoint file (default: tx_history.json).
    #[arg(long, global = true, env = "STAKEWATCH_CHECKPOINT")]
    checkpoint: Option<PathBuf>,

    /// Number of recent wallet transactions inspected per cycle.
    #[arg(long, global = true, env = "STAKEWATCH_WINDOW")]
    window: Option<usize>,

    /// Explicit path to the wallet command-line client.
    #[arg(long, global = true, env = "STAKEWATCH_CLI_PATH")]
    cli_path: Option<PathBuf>,

    /// Dotenv file with the notification API credentials.
    #[arg(long, global = true, env = "STAKEWATCH_API_ENV_FILE")]
    api_env_file: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, global = true, env = "STAKEWATCH_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, global = true, env = "STAKEWATCH_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Append logs to this file instead of stderr.
    #[arg(long, global = true, env = "STAKEWATCH_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Run one stake check cycle.
    Check,
    /// Talk to the notification API directly.
    Api {
        #[command(subcommand)]
        action: ApiAction,
    },
    /// Print the effective configuration as TOML.
    Config,
}

#[derive(clap::Subcommand)]
enum ApiAction {
    /// Send a synthetic stake with a random transaction id.
    Post {
        /// Stake amount in coins.
        #[arg(long, default_value_t = 12.0)]
        value: f64,
    },
    /// Fetch the stakes recorded for a year ("YYYY") or month ("YYYY-MM").
    Get {
        /// Period to query (defaults to the current UTC month).
        #[arg(long)]
        date: Option<String>,
    },
}

impl Cli {
    /// Apply CLI flags and env vars on top of the file configuration.
    fn merge_into(&self, mut config: CheckerConfig) -> anyhow::Result<CheckerConfig> {
        if let Some(path) = &self.checkpoint {
            config.checkpoint_file = path.clone();
        }
        if let Some(window) = self.window {
            config.window = window;
        }
        if let Some(path) = &self.cli_path {
            config.cli_path = Some(path.clone());
        }
        if let Some(path) = &self.api_env_file {
            config.api_env_file = path.clone();
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        if let Some(format) = self.log_format {
            config.log_format = format;
        }
        if let Some(path) = &self.log_file {
            config.log_file = Some(path.clone());
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let file_config = match &cli.config {
        Some(path) => CheckerConfig::from_toml_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => CheckerConfig::default(),
    };
    let config = cli.merge_into(file_config)?;

    if let Command::Config = cli.command {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    let target = LogTarget::from_option(config.log_file.as_deref());
    let sink = stakewatch_utils::build_dispatch(config.log_format, &config.log_level, &target)?;

    match cli.command {
        Command::Check => run_check(&config, sink),
        Command::Api { action } => {
            tracing::dispatcher::with_default(&sink, || -> anyhow::Result<()> {
                let credentials = ApiCredentials::from_env_file(&config.api_env_file)?;
                let api = ApiGatewayClient::new(credentials)?;
                match action {
                    ApiAction::Post { value } => post_test_stake(&api, value),
                    ApiAction::Get { date } => get_stakes(&api, date.as_deref()),
                }
            })
        }
        Command::Config => Ok(()),
    }
}

/// Run one cycle. The checker logs every outcome through `sink`; the
/// credentials file is only read once a stake needs to be notified.
fn run_check(config: &CheckerConfig, sink: tracing::Dispatch) -> anyhow::Result<()> {
    let notifier = DeferredApiClient::new(&config.api_env_file);
    let store = FileCheckpointStore::open(&config.checkpoint_file);
    let checker = StakeChecker::new(config.wallet_client(), notifier, store)
        .with_window(config.window)
        .with_log_sink(sink);

    checker.run_cycle()?;
    Ok(())
}

fn post_test_stake(api: &ApiGatewayClient, value: f64) -> anyhow::Result<()> {
    let notification = StakeNotification {
        txid: TxId::new(uuid::Uuid::new_v4().simple().to_string()),
        time: Timestamp::now(),
        amount: Amount::from_coins(value)?,
    };
    tracing::info!(txid = %notification.txid, amount = %notification.amount, "posting test stake");
    let reply = api.post_stake(&notification)?;
    println!("{}", serde_json::to_string_pretty(&reply)?);
    Ok(())
}

fn get_stakes(api: &ApiGatewayClient, date: Option<&str>) -> anyhow::Result<()> {
    let period = match date {
        Some(date) => StakePeriod::parse(date)?,
        None => StakePeriod::current_month(),
    };
    tracing::info!(%period, "querying stakes");
    let reply = api.get_stakes(&period)?;
    println!("{}", serde_json::to_string_pretty(&reply)?);
    Ok(())
}
