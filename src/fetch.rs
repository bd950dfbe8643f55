//! Spec retrieval — a single blocking GET, fail-fast with no retry.

use anyhow::{Context, Result};

/// Fetch the XML spec body from `url`.
pub fn fetch(url: &str) -> Result<String> {
    let response = ureq::get(url)
        .call()
        .with_context(|| format!("fetching spec from {}", url))?;
    response
        .into_string()
        .with_context(|| format!("reading spec body from {}", url))
}
