//! Demo configuration, read from `INNKEEP_*` environment variables.
//!
//! Missing variables fall back to the defaults below. A variable that is set
//! but cannot be parsed is an error; range checks (e.g. a non-positive room
//! count) are left to the domain so they surface as domain errors.

use core::str::FromStr;

use thiserror::Error;

pub const HOTEL_NAME_ENV: &str = "INNKEEP_HOTEL_NAME";
pub const TOTAL_ROOMS_ENV: &str = "INNKEEP_TOTAL_ROOMS";
pub const DAILY_RATE_ENV: &str = "INNKEEP_DAILY_RATE";
pub const CHECK_IN_ENV: &str = "INNKEEP_CHECK_IN";
pub const STAY_DAYS_ENV: &str = "INNKEEP_STAY_DAYS";
pub const CHECK_OUT_ENV: &str = "INNKEEP_CHECK_OUT";
pub const REPORT_FORMAT_ENV: &str = "INNKEEP_REPORT_FORMAT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: cannot parse {value:?} as {expected}")]
    Invalid {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// How occupancy reports are printed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(()),
        }
    }
}

/// Inputs for the scripted front-desk scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub hotel_name: String,
    pub total_rooms: i64,
    pub daily_rate: f64,
    pub check_in: i64,
    pub stay_days: i64,
    pub check_out: i64,
    pub report_format: ReportFormat,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            hotel_name: "Grand Hotel".to_string(),
            total_rooms: 100,
            daily_rate: 1000.0,
            check_in: 5,
            stay_days: 7,
            check_out: 2,
            report_format: ReportFormat::Text,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            hotel_name: lookup(HOTEL_NAME_ENV).unwrap_or(defaults.hotel_name),
            total_rooms: parse_or(&lookup, TOTAL_ROOMS_ENV, "an integer", defaults.total_rooms)?,
            daily_rate: parse_or(&lookup, DAILY_RATE_ENV, "a number", defaults.daily_rate)?,
            check_in: parse_or(&lookup, CHECK_IN_ENV, "an integer", defaults.check_in)?,
            stay_days: parse_or(&lookup, STAY_DAYS_ENV, "an integer", defaults.stay_days)?,
            check_out: parse_or(&lookup, CHECK_OUT_ENV, "an integer", defaults.check_out)?,
            report_format: parse_or(
                &lookup,
                REPORT_FORMAT_ENV,
                "one of: text, json",
                defaults.report_format,
            )?,
        })
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            var,
            value,
            expected,
        }),
    }
}
