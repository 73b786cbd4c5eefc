//! Aggregate statistics over a snapshot.
//!
//! The global area mean deliberately excludes records whose area is unknown
//! (0), while the per-continent area mean includes every record of the
//! continent. The asymmetry is inherited product behavior and is kept.

use crate::error::{Error, Result};
use crate::models::Country;
use std::collections::BTreeMap;

/// Global summary of a non-empty snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalSummary {
    pub count: usize,
    pub most_populous: Country,
    pub least_populous: Country,
    pub largest: Country,
    pub smallest: Country,
    pub mean_population: f64,
    /// Mean over records with a known (non-zero) area; `None` when the area
    /// of every record is unknown.
    pub mean_area: Option<f64>,
}

/// Per-continent aggregate, computed on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct ContinentSummary {
    pub continent: String,
    pub count: usize,
    pub population_total: u64,
    pub area_total: u64,
    pub mean_population: f64,
    /// Unlike [`GlobalSummary::mean_area`], zero-area records count here.
    pub mean_area: f64,
}

/// First occurrence wins on ties, by iteration order.
fn extreme_by<'a, K, F>(countries: &'a [Country], key: F, want_max: bool) -> &'a Country
where
    K: Ord,
    F: Fn(&Country) -> K,
{
    let mut best = &countries[0];
    for c in &countries[1..] {
        let better = if want_max {
            key(c) > key(best)
        } else {
            key(c) < key(best)
        };
        if better {
            best = c;
        }
    }
    best
}

/// Compute the global summary. An empty snapshot yields [`Error::NoData`].
pub fn global_summary(countries: &[Country]) -> Result<GlobalSummary> {
    if countries.is_empty() {
        return Err(Error::NoData);
    }
    let count = countries.len();
    let population_sum: u64 = countries.iter().map(|c| c.population).sum();

    let with_area: Vec<u64> = countries
        .iter()
        .map(|c| c.area)
        .filter(|&a| a > 0)
        .collect();
    let mean_area = if with_area.is_empty() {
        None
    } else {
        Some(with_area.iter().sum::<u64>() as f64 / with_area.len() as f64)
    };

    Ok(GlobalSummary {
        count,
        most_populous: extreme_by(countries, |c| c.population, true).clone(),
        least_populous: extreme_by(countries, |c| c.population, false).clone(),
        largest: extreme_by(countries, |c| c.area, true).clone(),
        smallest: extreme_by(countries, |c| c.area, false).clone(),
        mean_population: population_sum as f64 / count as f64,
        mean_area,
    })
}

/// Compute per-continent aggregates, ordered by continent name. An empty
/// snapshot yields [`Error::NoData`].
pub fn by_continent(countries: &[Country]) -> Result<Vec<ContinentSummary>> {
    if countries.is_empty() {
        return Err(Error::NoData);
    }

    #[derive(Default)]
    struct Acc {
        count: usize,
        population_total: u64,
        area_total: u64,
    }

    let mut groups: BTreeMap<&str, Acc> = BTreeMap::new();
    for c in countries {
        let acc = groups.entry(c.continent.as_str()).or_default();
        acc.count += 1;
        acc.population_total += c.population;
        acc.area_total += c.area;
    }

    Ok(groups
        .into_iter()
        .map(|(continent, acc)| ContinentSummary {
            continent: continent.to_string(),
            count: acc.count,
            population_total: acc.population_total,
            area_total: acc.area_total,
            mean_population: acc.population_total as f64 / acc.count as f64,
            mean_area: acc.area_total as f64 / acc.count as f64,
        })
        .collect())
}
