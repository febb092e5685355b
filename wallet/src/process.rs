//! Locating the wallet daemon among running processes.
//!
//! Reads the `/proc` filesystem: `/proc/<pid>/comm` holds the executable
//! name (truncated by the kernel to 15 bytes) and `/proc/<pid>/cwd` links to
//! the working directory. On systems without `/proc` nothing is ever found.

use std::fs;
use std::path::PathBuf;

use tracing::trace;

/// Maximum length of a process name as exposed in `comm`.
const COMM_MAX_LEN: usize = 15;

/// A running process matched by name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunningProcess {
    pub pid: u32,
    /// `None` when the working directory link cannot be read (e.g. another user's process).
    pub cwd: Option<PathBuf>,
}

/// Finds processes by executable name.
#[derive(Clone, Debug)]
pub struct ProcessLocator {
    proc_root: PathBuf,
}

impl ProcessLocator {
    pub fn new() -> Self {
        Self::with_root("/proc")
    }

    /// Use an alternative proc root (tests point this at a fixture directory).
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            proc_root: root.into(),
        }
    }

    /// The lowest-pid process whose name equals `name`.
    pub fn find(&self, name: &str) -> Option<RunningProcess> {
        let wanted = truncate_comm(name);
        let entries = fs::read_dir(&self.proc_root).ok()?;

        let mut pids: Vec<u32> = entries
            .filter_map(|e| e.ok())
            .filter_map(|e| e.file_name().to_str().and_then(|s| s.parse::<u32>().ok()))
            .collect();
        pids.sort_unstable();

        pids.into_iter().find_map(|pid| {
            let dir = self.proc_root.join(pid.to_string());
            // Processes can exit between listing and reading.
            let comm = fs::read_to_string(dir.join("comm")).ok()?;
            if comm.trim_end_matches('\n') != wanted {
                return None;
            }
            let cwd = fs::read_link(dir.join("cwd")).ok();
            trace!(pid, name, cwd = ?cwd, "matched process");
            Some(RunningProcess { pid, cwd })
        })
    }
}

impl Default for ProcessLocator {
    fn default() -> Self {
        Self::new()
    }
}

fn truncate_comm(name: &str) -> &str {
    if name.len() <= COMM_MAX_LEN {
        return name;
    }
    let mut end = COMM_MAX_LEN;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    &name[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn fake_process(root: &Path, pid: u32, comm: &str) -> PathBuf {
        let dir = root.join(pid.to_string());
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("comm"), format!("{comm}\n")).unwrap();
        dir
    }

    #[test]
    fn finds_lowest_pid_with_matching_name() {
        let root = tempfile::tempdir().unwrap();
        fake_process(root.path(), 900, "verusd");
        fake_process(root.path(), 42, "bash");
        fake_process(root.path(), 77, "verusd");
        fs::create_dir_all(root.path().join("self")).unwrap();

        let locator = ProcessLocator::with_root(root.path());
        let found = locator.find("verusd").unwrap();
        assert_eq!(found.pid, 77);
        assert_eq!(found.cwd, None);
    }

    #[test]
    fn missing_process_is_not_found() {
        let root = tempfile::tempdir().unwrap();
        fake_process(root.path(), 1, "init");
        let locator = ProcessLocator::with_root(root.path());
        assert_eq!(locator.find("test_process_qwerty123"), None);
    }

    #[test]
    fn missing_proc_root_finds_nothing() {
        let locator = ProcessLocator::with_root("/nonexistent/proc");
        assert_eq!(locator.find("verusd"), None);
    }

    #[test]
    fn long_names_compare_against_truncated_comm() {
        let root = tempfile::tempdir().unwrap();
        fake_process(root.path(), 5, "a-very-long-pro");
        let locator = ProcessLocator::with_root(root.path());
        assert_eq!(locator.find("a-very-long-process-name").unwrap().pid, 5);
    }

    #[cfg(unix)]
    #[test]
    fn reports_working_directory() {
        let root = tempfile::tempdir().unwrap();
        let workdir = tempfile::tempdir().unwrap();
        let dir = fake_process(root.path(), 10, "verusd");
        std::os::unix::fs::symlink(workdir.path(), dir.join("cwd")).unwrap();

        let found = ProcessLocator::with_root(root.path()).find("verusd").unwrap();
        assert_eq!(found.cwd.as_deref(), Some(workdir.path()));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn finds_own_process_in_real_proc() {
        let comm = fs::read_to_string("/proc/self/comm").unwrap();
        let locator = ProcessLocator::new();
        let found = locator.find(comm.trim_end()).unwrap();
        assert!(found.pid > 0);
    }
}
