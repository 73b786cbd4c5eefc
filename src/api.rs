//! Synchronous client for the **REST Countries API (v3.1)**.
//!
//! One GET against the configured endpoint returns the full country list as
//! a JSON array; each element is normalized through [`Country::from_raw`].
//! The request is blocking with a fixed timeout and is never retried — a
//! failed fetch is surfaced as [`Error::FetchFailed`] and the caller decides
//! whether to try again via the explicit refresh path.

use crate::error::Result;
use crate::models::{Country, LOCALIZED_NAME_KEY, RawCountry};
use log::{debug, info, warn};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use std::time::Duration;

/// Default endpoint, restricted to the four fields the record model uses.
pub const DEFAULT_ENDPOINT: &str =
    "https://restcountries.com/v3.1/all?fields=name,population,area,continents";

/// Total request timeout. The fetch is blocking and uncancellable, so this
/// is the only bound on its duration.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct Client {
    pub endpoint: String,
    lang: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl Client {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_timeout(endpoint, FETCH_TIMEOUT)
    }

    /// Like [`Client::new`] with an explicit request timeout. Mainly for
    /// tests that simulate a slow endpoint.
    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let http = HttpClient::builder()
            .timeout(timeout)
            .redirect(Policy::limited(5))
            .user_agent(concat!("countries_rs/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("reqwest client build");
        Self {
            endpoint: endpoint.into(),
            lang: LOCALIZED_NAME_KEY.to_string(),
            http,
        }
    }

    /// Fetch and normalize the full country list.
    ///
    /// Returns the validated records in response order plus the number of
    /// raw elements dropped by validation. A transport error, timeout, or
    /// non-success status aborts the whole fetch; a single malformed element
    /// does not.
    pub fn fetch(&self) -> Result<(Vec<Country>, usize)> {
        info!("fetching country data from {}", self.endpoint);
        let resp = self.http.get(&self.endpoint).send()?.error_for_status()?;
        // Elements are decoded one by one so a wrong-typed field drops that
        // record only, never the whole response.
        let raw: Vec<serde_json::Value> = resp.json()?;
        debug!("received {} raw records", raw.len());

        let mut countries = Vec::with_capacity(raw.len());
        let mut skipped = 0usize;
        for v in raw {
            let r = match serde_json::from_value::<RawCountry>(v) {
                Ok(r) => r,
                Err(e) => {
                    warn!("skipping undecodable record from API: {e}");
                    skipped += 1;
                    continue;
                }
            };
            match Country::from_raw(r, &self.lang) {
                Ok(c) => countries.push(c),
                Err(issue) => {
                    warn!("skipping record from API: {issue}");
                    skipped += 1;
                }
            }
        }
        info!(
            "normalized {} countries ({} skipped)",
            countries.len(),
            skipped
        );
        Ok((countries, skipped))
    }
}
