//! Network client collaborator for the HTTP sink
//!
//! The logger only needs `get(url)` and `post(url, body)` and never inspects
//! the response beyond completion. The default implementation is a blocking
//! reqwest client; tests inject recording doubles through the same trait.

use crate::errors::LogResult;

/// Minimal delivery surface the HTTP sink relies on.
pub trait NetworkClient: Send + Sync {
    fn get(&self, url: &str) -> LogResult<()>;
    fn post(&self, url: &str, body: String) -> LogResult<()>;
}

/// Default client backed by `reqwest::blocking`.
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl NetworkClient for ReqwestClient {
    fn get(&self, url: &str) -> LogResult<()> {
        self.client.get(url).send()?;
        Ok(())
    }

    fn post(&self, url: &str, body: String) -> LogResult<()> {
        self.client.post(url).body(body).send()?;
        Ok(())
    }
}
