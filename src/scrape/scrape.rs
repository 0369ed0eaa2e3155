// src/scrape/scrape.rs
use std::{cmp::Reverse, thread, time::Duration};

use reqwest::blocking::Client;

use crate::{
    config::consts::{MAX_RETRIES, RETRY_DELAY, SOURCE_URL},
    contract::Contract,
    core::net,
    specs,
};

use super::FetchError;

/// Anything that can produce one page worth of contracts, all or nothing.
pub trait ContractSource {
    fn fetch(&self) -> Result<Vec<Contract>, FetchError>;
}

/// The live listing page.
pub struct WebSource {
    client: Client,
    url: String,
}

impl WebSource {
    pub fn new(url: impl Into<String>) -> Result<Self, FetchError> {
        Ok(Self { client: net::client()?, url: url.into() })
    }

    /// The fixed public listing.
    pub fn listing() -> Result<Self, FetchError> {
        Self::new(SOURCE_URL)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ContractSource for WebSource {
    fn fetch(&self) -> Result<Vec<Contract>, FetchError> {
        specs::contracts::fetch(&self.client, &self.url)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Extra attempts after the first one.
    pub max_retries: u32,
    /// Blocking pause between attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_retries: MAX_RETRIES, delay: RETRY_DELAY }
    }
}

impl RetryPolicy {
    pub fn attempts(&self) -> u32 {
        self.max_retries + 1
    }
}

/// Run `source` until it succeeds or the policy is spent.
/// The last attempt's error is returned; no partial data ever escapes.
pub fn fetch_with_retry(
    source: &dyn ContractSource,
    policy: &RetryPolicy,
) -> Result<Vec<Contract>, FetchError> {
    let attempts = policy.attempts();
    let mut attempt = 1;
    loop {
        match source.fetch() {
            Ok(contracts) => return Ok(contracts),
            Err(e) if attempt < attempts => {
                logw!("Attempt #{attempt} failed with error: {e}. Retrying in {:?}...", policy.delay);
                thread::sleep(policy.delay);
                attempt += 1;
            }
            Err(e) => {
                loge!("Operation failed after {} retries: {e}", policy.max_retries);
                return Err(e);
            }
        }
    }
}

/// Most recent first. Unparsable dates rank as the earliest possible date.
pub fn sort_by_date_desc(contracts: &mut [Contract]) {
    contracts.sort_unstable_by_key(|c| Reverse(c.parsed_date()));
}

/// Scrape with retry, then sort.
pub fn fetch_contracts(
    source: &dyn ContractSource,
    policy: &RetryPolicy,
) -> Result<Vec<Contract>, FetchError> {
    let mut contracts = fetch_with_retry(source, policy)?;
    sort_by_date_desc(&mut contracts);
    Ok(contracts)
}
