//! Pure read-only filters over a snapshot. Every function validates its
//! parameters before scanning and preserves the original relative order of
//! matching records.

use crate::error::InvalidQuery;
use crate::models::Country;

/// Which numeric field a range filter applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeField {
    Population,
    Area,
}

impl RangeField {
    fn get(self, c: &Country) -> u64 {
        match self {
            RangeField::Population => c.population,
            RangeField::Area => c.area,
        }
    }
}

/// Case-insensitive substring search against the name field.
pub fn search_by_name(countries: &[Country], term: &str) -> Result<Vec<Country>, InvalidQuery> {
    let term = term.trim();
    if term.is_empty() {
        return Err(InvalidQuery::EmptyTerm);
    }
    let needle = term.to_lowercase();
    Ok(countries
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&needle))
        .cloned()
        .collect())
}

/// Case-insensitive exact match against the continent field.
pub fn filter_by_continent(
    countries: &[Country],
    continent: &str,
) -> Result<Vec<Country>, InvalidQuery> {
    let continent = continent.trim();
    if continent.is_empty() {
        return Err(InvalidQuery::EmptyTerm);
    }
    let wanted = continent.to_lowercase();
    Ok(countries
        .iter()
        .filter(|c| c.continent.to_lowercase() == wanted)
        .cloned()
        .collect())
}

/// Inclusive `[min, max]` filter on population or area. An inverted range
/// is rejected before any record is examined.
pub fn filter_by_range(
    countries: &[Country],
    field: RangeField,
    min: u64,
    max: u64,
) -> Result<Vec<Country>, InvalidQuery> {
    if min > max {
        return Err(InvalidQuery::InvertedRange { min, max });
    }
    Ok(countries
        .iter()
        .filter(|c| {
            let v = field.get(c);
            min <= v && v <= max
        })
        .cloned()
        .collect())
}
