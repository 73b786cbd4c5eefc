//! countries-rs
//!
//! A lightweight Rust library for fetching, caching, querying, and
//! summarizing country data from the REST Countries API. Pairs with the
//! `countries` CLI.
//!
//! ### Features
//! - Cache-or-fetch loading: a local CSV cache is authoritative when
//!   present, otherwise one blocking API fetch populates it
//! - Validated records (malformed rows and API elements are skipped and
//!   counted, never partially admitted)
//! - Substring name search, continent and numeric-range filters
//! - Stable sorting by name, population, or area
//! - Global and per-continent summary statistics
//!
//! ### Example
//! ```no_run
//! use countries_rs::api::Client;
//! use countries_rs::source::{DataSource, Session};
//! use countries_rs::{query, sort, stats};
//!
//! let source = DataSource::new("paises.csv", Client::default());
//! let session = Session::start(source)?;
//! let snapshot = session.snapshot();
//!
//! let hits = query::search_by_name(snapshot.countries(), "arg")?;
//! let ordered = sort::sort_countries(
//!     snapshot.countries(),
//!     sort::SortKey::Population,
//!     sort::Direction::Ascending,
//! );
//! let summary = stats::global_summary(snapshot.countries())?;
//! println!("{} countries, mean population {:.0}", summary.count, summary.mean_population);
//! # Ok::<(), countries_rs::Error>(())
//! ```

pub mod api;
pub mod error;
pub mod models;
pub mod query;
pub mod sort;
pub mod source;
pub mod stats;
pub mod storage;

pub use api::Client;
pub use error::{Error, InvalidQuery};
pub use models::Country;
pub use source::{DataSource, Session, Snapshot};
