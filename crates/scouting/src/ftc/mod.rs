use epa::Match;
use reqwest::{StatusCode, header::ACCEPT};
use tracing::debug;

use crate::config::{Config, Credentials};
use crate::ftc::endpoints::{MatchesResponse, matches_path};

pub mod endpoints;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("event `{event_code}` responded with {status}")]
    Status {
        event_code: String,
        status: StatusCode,
    },
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

/// Client for the FTC Events API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FtcClient {
    credentials: Credentials,
    /// FTC_ENDPOINT, without trailing slash
    url: String,
    /// FTC_SEASON
    season: u16,
}

impl FtcClient {
    pub fn new(credentials: Credentials, url: impl Into<String>, season: u16) -> Self {
        let url: String = url.into();
        Self {
            credentials,
            url: url.trim_end_matches('/').to_string(),
            season,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.credentials.clone(),
            config.endpoint.as_str(),
            config.season,
        )
    }

    pub fn matches_url(&self, event_code: &str) -> String {
        format!("{}{}", self.url, matches_path(self.season, event_code))
    }

    /// Fetches every match of `event_code`, in the order the API lists them.
    pub async fn fetch_matches(
        &self,
        http_client: &reqwest::Client,
        event_code: &str,
    ) -> Result<Vec<Match>, Error> {
        let url = self.matches_url(event_code);
        debug!("GET {url}");

        let response = http_client
            .get(&url)
            .basic_auth(
                &self.credentials.username,
                Some(&self.credentials.authorization_key),
            )
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                event_code: event_code.to_string(),
                status,
            });
        }

        let body = response.text().await?;
        let payload: MatchesResponse = serde_json::from_str(&body)?;
        debug!("{event_code}: {} matches", payload.matches.len());

        Ok(payload.matches.into_iter().map(Match::from).collect())
    }
}
