//! # Bootstrap
//!
//! One pass, in order: fetch, load the store, render the cards, render the
//! search control. Nothing is rendered before the fetch has answered.
//!
//! - A non-success status is logged and yields an empty [`Page`]: no records,
//!   no cards, no search control. The caller sees `Ok`.
//! - Transport failures (and undecodable or invalid payloads) are logged and
//!   returned as `Err`.
//!
//! Nothing is retried.

use crate::error::{RosterError, Result};
use crate::page::Page;
use crate::provider::PeopleProvider;

pub fn bootstrap<P: PeopleProvider + ?Sized>(provider: &P) -> Result<Page> {
    let mut page = Page::new();

    let raw = match provider.fetch() {
        Ok(raw) => raw,
        Err(RosterError::Provider { status }) => {
            tracing::error!(status, "Looks like there was a problem. Status Code: {}", status);
            return Ok(page);
        }
        Err(e) => {
            tracing::error!(error = %e, "Fetch Error");
            return Err(e);
        }
    };

    page.populate(raw)
        .inspect_err(|e| tracing::error!(error = %e, "Fetch Error"))?;
    tracing::info!(count = page.store().len(), "directory ready");
    Ok(page)
}
