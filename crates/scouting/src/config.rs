use std::fmt;

use tracing::debug;

pub const DEFAULT_ENDPOINT: &str = "http://ftc-api.firstinspires.org/v2.0";
pub const DEFAULT_SEASON: u16 = 2024;
pub const DEFAULT_TOP_TEAMS: usize = 10;
pub const DEFAULT_EVENTS: [&str; 7] = [
    "MXCMQ2", "MXCAQ", "MXMEQ", "MXTOQ", "MXZAQ", "MXCMQ1", "MXMOQ",
];

pub const USERNAME_VAR: &str = "FTC_USERNAME";
pub const AUTHORIZATION_KEY_VAR: &str = "FTC_AUTHORIZATION_KEY";
pub const ENDPOINT_VAR: &str = "FTC_ENDPOINT";
pub const SEASON_VAR: &str = "FTC_SEASON";
pub const EVENTS_VAR: &str = "FTC_EVENTS";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error(".env `{0}` not set")]
    MissingVar(&'static str),
    #[error("invalid season `{0}`")]
    InvalidSeason(String),
}

/// FTC Events API credentials, sent as HTTP Basic authorization.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub authorization_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("authorization_key", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub credentials: Credentials,
    /// FTC_ENDPOINT
    pub endpoint: String,
    /// FTC_SEASON
    pub season: u16,
    /// FTC_EVENTS, processed in this order
    pub events: Vec<String>,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, unset variables return `None`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let username = lookup(USERNAME_VAR).ok_or(Error::MissingVar(USERNAME_VAR))?;
        let authorization_key =
            lookup(AUTHORIZATION_KEY_VAR).ok_or(Error::MissingVar(AUTHORIZATION_KEY_VAR))?;

        let endpoint = lookup(ENDPOINT_VAR).unwrap_or_else(|| {
            debug!(".env `{ENDPOINT_VAR}` not found. Using default.");
            DEFAULT_ENDPOINT.to_string()
        });

        let season = match lookup(SEASON_VAR) {
            Some(season) => parse_season(&season)?,
            None => {
                debug!(".env `{SEASON_VAR}` not found. Using default.");
                DEFAULT_SEASON
            }
        };

        let events = match lookup(EVENTS_VAR) {
            Some(events) => parse_events(&events),
            None => {
                debug!(".env `{EVENTS_VAR}` not found. Using default.");
                DEFAULT_EVENTS.iter().map(ToString::to_string).collect()
            }
        };

        Ok(Self {
            credentials: Credentials {
                username,
                authorization_key,
            },
            endpoint,
            season,
            events,
        })
    }
}

pub fn parse_season(season: &str) -> Result<u16, Error> {
    season
        .trim()
        .parse()
        .map_err(|_| Error::InvalidSeason(season.to_string()))
}

/// Splits a comma separated list of event codes, dropping empty entries.
pub fn parse_events(events: &str) -> Vec<String> {
    events
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(ToString::to_string)
        .collect()
}
