// Runtime configuration read from the environment.
//
// A `.env` file in the working directory is loaded first when present. Unset variables fall back
// to defaults; set but unparsable variables are an error.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

use crate::modules::notifications::use_cases::schedule_event_notification::command::DEFAULT_MINUTES_BEFORE;

pub const ADDR_VAR: &str = "SHARD_CALENDAR_ADDR";
pub const LOG_VAR: &str = "SHARD_CALENDAR_LOG";
pub const SESSION_CACHE_VAR: &str = "SHARD_CALENDAR_SESSION_CACHE";
pub const NOTIFY_MINUTES_BEFORE_VAR: &str = "SHARD_CALENDAR_NOTIFY_MINUTES_BEFORE";
pub const NOTIFICATIONS_GRANTED_VAR: &str = "SHARD_CALENDAR_NOTIFICATIONS_GRANTED";

const DEFAULT_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_LOG: &str = "info";
const DEFAULT_SESSION_CACHE: &str = ".shard_calendar/session.json";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var} is not a whole number of minutes: {value}")]
    InvalidMinutes { var: &'static str, value: String },

    #[error("{var} must be true or false: {value}")]
    InvalidFlag { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    pub log_filter: String,
    pub session_cache_path: PathBuf,
    pub notify_minutes_before: u32,
    pub notifications_granted: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr_value = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_value
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidAddr {
                var: ADDR_VAR,
                value: addr_value.clone(),
            })?;

        let notify_minutes_before = match lookup(NOTIFY_MINUTES_BEFORE_VAR) {
            Some(value) => value
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidMinutes {
                    var: NOTIFY_MINUTES_BEFORE_VAR,
                    value,
                })?,
            None => DEFAULT_MINUTES_BEFORE,
        };

        let notifications_granted = match lookup(NOTIFICATIONS_GRANTED_VAR) {
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" => false,
                _ => {
                    return Err(ConfigError::InvalidFlag {
                        var: NOTIFICATIONS_GRANTED_VAR,
                        value,
                    });
                }
            },
            None => true,
        };

        Ok(Self {
            addr,
            log_filter: lookup(LOG_VAR).unwrap_or_else(|| DEFAULT_LOG.to_string()),
            session_cache_path: lookup(SESSION_CACHE_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_CACHE)),
            notify_minutes_before,
            notifications_granted,
        })
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[rstest]
    fn it_should_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.log_filter, "info");
        assert_eq!(
            config.session_cache_path,
            PathBuf::from(".shard_calendar/session.json")
        );
        assert_eq!(config.notify_minutes_before, 15);
        assert!(config.notifications_granted);
    }

    #[rstest]
    fn it_should_read_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (ADDR_VAR, "0.0.0.0:9000"),
            (LOG_VAR, "shard_calendar=debug"),
            (SESSION_CACHE_VAR, "/tmp/session.json"),
            (NOTIFY_MINUTES_BEFORE_VAR, "30"),
            (NOTIFICATIONS_GRANTED_VAR, "false"),
        ]))
        .unwrap();
        assert_eq!(config.addr, "0.0.0.0:9000".parse().unwrap());
        assert_eq!(config.log_filter, "shard_calendar=debug");
        assert_eq!(config.session_cache_path, PathBuf::from("/tmp/session.json"));
        assert_eq!(config.notify_minutes_before, 30);
        assert!(!config.notifications_granted);
    }

    #[rstest]
    #[case(
        ADDR_VAR,
        "localhost",
        ConfigError::InvalidAddr { var: ADDR_VAR, value: "localhost".into() }
    )]
    #[case(
        NOTIFY_MINUTES_BEFORE_VAR,
        "-5",
        ConfigError::InvalidMinutes { var: NOTIFY_MINUTES_BEFORE_VAR, value: "-5".into() }
    )]
    #[case(
        NOTIFICATIONS_GRANTED_VAR,
        "maybe",
        ConfigError::InvalidFlag { var: NOTIFICATIONS_GRANTED_VAR, value: "maybe".into() }
    )]
    fn it_should_reject_unparsable_values(
        #[case] var: &str,
        #[case] value: &str,
        #[case] expected: ConfigError,
    ) {
        assert_eq!(
            Config::from_lookup(lookup_from(&[(var, value)])),
            Err(expected)
        );
    }
}
