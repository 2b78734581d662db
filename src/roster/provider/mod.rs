//! # Provider Layer
//!
//! Where person records come from. The [`PeopleProvider`] trait lets the page
//! bootstrap against any source of provider-shaped records.
//!
//! ## Implementations
//!
//! - [`http::HttpProvider`]: the remote people API (randomuser.me by default)
//! - [`file::FileProvider`]: a saved response on disk, for offline runs
//! - [`memory::MemoryProvider`]: canned records or errors, for tests
//!
//! ## Errors
//!
//! A non-success status is [`RosterError::Provider`]; anything that stops the
//! request from completing is [`RosterError::Transport`]; a body that isn't a
//! provider response is [`RosterError::Payload`]. Nothing is retried.
//!
//! [`RosterError::Provider`]: crate::error::RosterError::Provider
//! [`RosterError::Transport`]: crate::error::RosterError::Transport
//! [`RosterError::Payload`]: crate::error::RosterError::Payload

use crate::error::{RosterError, Result};
use crate::model::{ProviderResponse, RawPerson};

pub mod file;
pub mod http;
#[cfg(any(test, feature = "test_utils"))]
pub mod memory;

pub trait PeopleProvider {
    /// Fetches the raw records in provider order.
    fn fetch(&self) -> Result<Vec<RawPerson>>;
}

/// Decodes a provider response body.
pub fn parse_response(body: &str) -> Result<Vec<RawPerson>> {
    let response: ProviderResponse =
        serde_json::from_str(body).map_err(|e| RosterError::Payload(e.to_string()))?;
    Ok(response.results)
}
