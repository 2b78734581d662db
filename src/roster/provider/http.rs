//! The remote people API.

use super::PeopleProvider;
use crate::config::RosterConfig;
use crate::error::{RosterError, Result};
use crate::model::{ProviderResponse, RawPerson};
use std::time::Duration;

/// Blocking HTTP client for a randomuser.me-compatible endpoint.
///
/// No timeout is set: a request that never answers keeps the caller waiting.
pub struct HttpProvider {
    endpoint: String,
    params: Vec<(&'static str, String)>,
    client: reqwest::blocking::Client,
}

impl HttpProvider {
    pub fn new(endpoint: impl Into<String>, params: Vec<(&'static str, String)>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| RosterError::Transport(e.to_string()))?;
        Ok(Self {
            endpoint: endpoint.into(),
            params,
            client,
        })
    }

    pub fn from_config(config: &RosterConfig) -> Result<Self> {
        Self::new(config.endpoint.clone(), config.query_params())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request(&self) -> reqwest::blocking::RequestBuilder {
        self.client.get(&self.endpoint).query(&self.params)
    }
}

impl PeopleProvider for HttpProvider {
    fn fetch(&self) -> Result<Vec<RawPerson>> {
        tracing::debug!(endpoint = %self.endpoint, params = ?self.params, "fetching people");
        let response = self
            .request()
            .send()
            .map_err(|e| RosterError::Transport(e.to_string()))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(RosterError::Provider {
                status: status.as_u16(),
            });
        }

        let payload = response.json::<ProviderResponse>().map_err(|e| {
            if e.is_decode() {
                RosterError::Payload(e.to_string())
            } else {
                RosterError::Transport(e.to_string())
            }
        })?;
        Ok(payload.results)
    }
}
