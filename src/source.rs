//! Cache-or-fetch source selection.
//!
//! A [`DataSource`] owns the branch decision: when the cache file exists it
//! is authoritative and the API is never contacted;
//! when it is absent, one fetch is issued and a non-empty result is written
//! back as the new cache. A [`Session`] holds the resulting [`Snapshot`] for
//! the rest of the run and swaps it only after a refresh has fully
//! succeeded.

use crate::api::Client;
use crate::error::Result;
use crate::models::Country;
use crate::storage;
use log::{info, warn};
use std::path::PathBuf;

/// Where the current snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Cache,
    Api,
}

/// An immutable record set for one session. Replaced wholesale on refresh,
/// never mutated in place.
#[derive(Debug, Clone)]
pub struct Snapshot {
    countries: Vec<Country>,
    /// Records dropped by validation while building this snapshot.
    pub skipped: usize,
    pub origin: Origin,
}

impl Snapshot {
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct DataSource {
    cache_path: PathBuf,
    client: Client,
}

impl DataSource {
    pub fn new(cache_path: impl Into<PathBuf>, client: Client) -> Self {
        Self {
            cache_path: cache_path.into(),
            client,
        }
    }

    /// Produce the initial snapshot: cache file if present, otherwise one
    /// API fetch. The branch is mutually exclusive — a cache that exists
    /// but fails to read is `LoadFailed`, with no fallback to the API.
    pub fn load(&self) -> Result<Snapshot> {
        if self.cache_path.exists() {
            info!("loading countries from cache {}", self.cache_path.display());
            let (countries, skipped) = storage::load_csv(&self.cache_path)?;
            Ok(Snapshot {
                countries,
                skipped,
                origin: Origin::Cache,
            })
        } else {
            info!(
                "cache {} not found, fetching from API",
                self.cache_path.display()
            );
            self.fetch_and_persist()
        }
    }

    /// Explicit re-fetch. Always takes the API path and overwrites the
    /// cache on success, regardless of whether a cache file exists.
    pub fn refresh(&self) -> Result<Snapshot> {
        self.fetch_and_persist()
    }

    fn fetch_and_persist(&self) -> Result<Snapshot> {
        let (countries, skipped) = self.client.fetch()?;
        if countries.is_empty() {
            warn!("fetch produced no valid records, cache not written");
        } else if let Err(e) = storage::save_csv(&countries, &self.cache_path) {
            // The in-memory snapshot stays valid even if it cannot be persisted.
            warn!(
                "could not write cache {}: {e:#}",
                self.cache_path.display()
            );
        }
        Ok(Snapshot {
            countries,
            skipped,
            origin: Origin::Api,
        })
    }
}

/// Owns the snapshot for the duration of a run.
#[derive(Debug)]
pub struct Session {
    source: DataSource,
    snapshot: Snapshot,
}

impl Session {
    /// Start a session by producing the initial snapshot. Fails when
    /// neither source yields data, in which case there is no session.
    pub fn start(source: DataSource) -> Result<Self> {
        let snapshot = source.load()?;
        Ok(Self { source, snapshot })
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Re-fetch and atomically replace the snapshot. On failure the
    /// previous snapshot is retained unchanged and remains usable.
    pub fn refresh(&mut self) -> Result<&Snapshot> {
        let fresh = self.source.refresh()?;
        self.snapshot = fresh;
        Ok(&self.snapshot)
    }
}
