use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::debug;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to build http client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Result of loading a `.env` file.
///
/// `.env` has to be read before logging is configured, since it may carry
/// `LOG_LEVEL`, so the outcome is held here and logged with [`DotEnv::log`] afterwards.
#[derive(Debug)]
pub struct DotEnv(Result<PathBuf, dotenv::Error>);

impl DotEnv {
    /// Loads the nearest `.env`, if any, into the process environment.
    pub fn load() -> Self {
        Self(dotenv::dotenv())
    }

    pub fn from_path(path: &Path) -> Self {
        Self(dotenv::from_path(path).map(|()| path.to_path_buf()))
    }

    pub const fn is_loaded(&self) -> bool {
        self.0.is_ok()
    }

    pub fn log(&self) {
        match &self.0 {
            Ok(path) => debug!("loaded {}", path.display()),
            Err(err) => debug!(".env not loaded: {err}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct InternalClients {
    pub http_client: reqwest::Client,
}

impl InternalClients {
    pub fn try_new() -> Result<Self, Error> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http_client })
    }

    pub const fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }
}
