//! Reporting periods accepted by the stake query endpoint.

use chrono::{Datelike, Utc};
use std::fmt;

use crate::NotifyError;

/// A calendar year or a month of a year, written `YYYY` or `YYYY-MM`.
///
/// Years are limited to 2000-2099.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StakePeriod {
    Year(u16),
    Month { year: u16, month: u8 },
}

impl StakePeriod {
    pub fn parse(s: &str) -> Result<Self, NotifyError> {
        let invalid = || NotifyError::InvalidPeriod(s.to_string());
        let (year, month) = match s.split_once('-') {
            Some((y, m)) => (y, Some(m)),
            None => (s, None),
        };

        let year = parse_year(year).ok_or_else(invalid)?;
        match month {
            None => Ok(Self::Year(year)),
            Some(m) => {
                let month = parse_month(m).ok_or_else(invalid)?;
                Ok(Self::Month { year, month })
            }
        }
    }

    /// The current UTC month.
    pub fn current_month() -> Self {
        let now = Utc::now();
        Self::Month {
            year: now.year() as u16,
            month: now.month() as u8,
        }
    }

    /// Query parameters for the GET endpoint.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Year(year) => vec![("year", year.to_string())],
            Self::Month { year, month } => {
                vec![("year", year.to_string()), ("month", format!("{month:02}"))]
            }
        }
    }
}

impl fmt::Display for StakePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Year(year) => write!(f, "{year}"),
            Self::Month { year, month } => write!(f, "{year}-{month:02}"),
        }
    }
}

fn parse_year(s: &str) -> Option<u16> {
    if s.len() != 4 || !s.starts_with("20") || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn parse_month(s: &str) -> Option<u8> {
    if s.len() != 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let month: u8 = s.parse().ok()?;
    (1..=12).contains(&month).then_some(month)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_year_and_month() {
        assert_eq!(StakePeriod::parse("2021").unwrap(), StakePeriod::Year(2021));
        assert_eq!(
            StakePeriod::parse("2021-12").unwrap(),
            StakePeriod::Month { year: 2021, month: 12 }
        );
    }

    #[test]
    fn rejects_malformed_periods() {
        for bad in ["", "21", "1999", "2100", "2021-13", "2021-00", "2021-1", "2021-", "20a1", "2021-12-01"] {
            assert!(StakePeriod::parse(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn query_pads_month() {
        let q = StakePeriod::Month { year: 2022, month: 3 }.query();
        assert_eq!(q, vec![("year", "2022".to_string()), ("month", "03".to_string())]);
        assert_eq!(StakePeriod::Year(2022).query(), vec![("year", "2022".to_string())]);
    }

    #[test]
    fn display_round_trips() {
        for s in ["2023", "2023-07"] {
            assert_eq!(StakePeriod::parse(s).unwrap().to_string(), s);
        }
    }

    #[test]
    fn current_month_is_a_month() {
        assert!(matches!(StakePeriod::current_month(), StakePeriod::Month { .. }));
    }
}
