// Process configuration, read once at startup from the environment (and `.env`).
//
// Keys
// - ATTENDANCE_BIND_ADDR              socket address, default 0.0.0.0:8080
// - ATTENDANCE_CHECK_GRACE_MINUTES    integer in [0, 1440], default 5
// - ATTENDANCE_WEIGHT_PRESENT/_LATE/_ABSENT
//                                     finite numbers in [0, 1], default 1 / 0.5 / 0
// - ATTENDANCE_SEED_PATH              optional JSON directory seed

use crate::modules::attendance::core::check_window::{CheckWindowPolicy, DEFAULT_GRACE_MINUTES};
use crate::modules::attendance::core::scoring::ScoringWeights;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

pub const BIND_ADDR: &str = "ATTENDANCE_BIND_ADDR";
pub const CHECK_GRACE_MINUTES: &str = "ATTENDANCE_CHECK_GRACE_MINUTES";
pub const WEIGHT_PRESENT: &str = "ATTENDANCE_WEIGHT_PRESENT";
pub const WEIGHT_LATE: &str = "ATTENDANCE_WEIGHT_LATE";
pub const WEIGHT_ABSENT: &str = "ATTENDANCE_WEIGHT_ABSENT";
pub const SEED_PATH: &str = "ATTENDANCE_SEED_PATH";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got `{value}`")]
    Invalid {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub check_window: CheckWindowPolicy,
    pub weights: ScoringWeights,
    pub seed_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr: SocketAddr = parse_or(&lookup, BIND_ADDR, "a socket address", || {
            DEFAULT_BIND_ADDR.parse::<SocketAddr>()
        })?;

        const GRACE_EXPECTED: &str = "a whole number of minutes between 0 and 1440";
        let grace_minutes: i64 = parse_or(&lookup, CHECK_GRACE_MINUTES, GRACE_EXPECTED, || {
            Ok::<_, std::convert::Infallible>(DEFAULT_GRACE_MINUTES)
        })?;
        let check_window = CheckWindowPolicy::try_from_minutes(grace_minutes)
            .ok_or_else(|| invalid(CHECK_GRACE_MINUTES, grace_minutes.to_string(), GRACE_EXPECTED))?;

        let defaults = ScoringWeights::default();
        let weights = ScoringWeights {
            present: weight(&lookup, WEIGHT_PRESENT, defaults.present)?,
            late: weight(&lookup, WEIGHT_LATE, defaults.late)?,
            absent: weight(&lookup, WEIGHT_ABSENT, defaults.absent)?,
        };

        let seed_path = lookup(SEED_PATH)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bind_addr,
            check_window,
            weights,
            seed_path,
        })
    }
}

fn invalid(key: &'static str, value: String, expected: &'static str) -> ConfigError {
    ConfigError::Invalid {
        key,
        value,
        expected,
    }
}

fn parse_or<F, T, E, D>(lookup: &F, key: &'static str, expected: &'static str, default: D) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    D: FnOnce() -> Result<T, E>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| invalid(key, raw.clone(), expected)),
        None => default().map_err(|_| invalid(key, String::new(), expected)),
    }
}

fn weight<F>(lookup: &F, key: &'static str, default: f64) -> Result<f64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    const EXPECTED: &str = "a number between 0 and 1";
    let value: f64 = parse_or(lookup, key, EXPECTED, || Ok::<_, std::convert::Infallible>(default))?;
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(invalid(key, value.to_string(), EXPECTED));
    }
    Ok(value)
}
