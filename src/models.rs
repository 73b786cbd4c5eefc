use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sentinel name for a country whose name object carries no usable value.
pub const UNKNOWN_NAME: &str = "Desconocido";
/// Sentinel continent for a country without a `continents` entry.
pub const UNKNOWN_CONTINENT: &str = "Indefinido";
/// Language key looked up in the localized-name map before falling back to
/// the common name.
pub const LOCALIZED_NAME_KEY: &str = "spa";

/// One validated country record. Field renames match the Spanish CSV header
/// (`nombre,poblacion,superficie,continente`) so the cache file round-trips
/// through serde.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Country {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "poblacion")]
    pub population: u64,
    /// Surface in km²; 0 means unknown.
    #[serde(rename = "superficie")]
    pub area: u64,
    #[serde(rename = "continente")]
    pub continent: String,
}

/// Why a single raw record was dropped during normalization. Dropped records
/// never abort a load; they are logged and counted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordIssue {
    #[error("missing name object")]
    MissingName,
    #[error("empty {0} field")]
    Empty(&'static str),
    #[error("invalid {field} value {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

/// Localized name variant inside `name.nativeName`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawLocalName {
    pub common: Option<String>,
    pub official: Option<String>,
}

/// The `name` object of a raw API element.
#[derive(Debug, Clone, Deserialize)]
pub struct RawName {
    pub common: Option<String>,
    pub official: Option<String>,
    #[serde(rename = "nativeName", default)]
    pub native_name: HashMap<String, RawLocalName>,
}

/// One element of the REST Countries response array, before validation.
/// Every field is optional here; defaults are applied in [`Country::from_raw`].
#[derive(Debug, Clone, Deserialize)]
pub struct RawCountry {
    pub name: Option<RawName>,
    pub population: Option<u64>,
    /// The API serializes area as a float (km²).
    pub area: Option<f64>,
    #[serde(default)]
    pub continents: Vec<String>,
}

impl Country {
    /// Normalize a raw API element into a validated record.
    ///
    /// Name resolution: the localized-name map entry for `lang` wins, then
    /// the common name, then [`UNKNOWN_NAME`]. A record without a `name`
    /// object at all is rejected. Population defaults to 0, area is coerced
    /// to a non-negative integer (0 = unknown), and the continent is the
    /// first entry of `continents`, defaulting to [`UNKNOWN_CONTINENT`].
    pub fn from_raw(raw: RawCountry, lang: &str) -> Result<Self, RecordIssue> {
        let name_obj = raw.name.ok_or(RecordIssue::MissingName)?;

        // Blank candidates fall through to the next step instead of
        // shadowing a usable name further down the chain.
        fn non_blank(s: Option<String>) -> Option<String> {
            s.filter(|v| !v.trim().is_empty())
        }
        let localized = name_obj.native_name.get(lang).and_then(|n| {
            non_blank(n.common.clone()).or_else(|| non_blank(n.official.clone()))
        });
        let name = localized
            .or_else(|| non_blank(name_obj.common))
            .or_else(|| non_blank(name_obj.official))
            .unwrap_or_else(|| UNKNOWN_NAME.to_string());

        let population = raw.population.unwrap_or(0);
        let area = match raw.area {
            Some(a) if a.is_finite() && a > 0.0 => a as u64,
            _ => 0,
        };
        let continent = raw
            .continents
            .into_iter()
            .next()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_CONTINENT.to_string());

        Ok(Country {
            name,
            population,
            area,
            continent,
        })
    }
}

/// One CSV row as read from the cache, before numeric validation. Numbers are
/// kept as strings so a parse failure drops only the offending row.
#[derive(Debug, Clone, Deserialize)]
pub struct CsvRow {
    pub nombre: String,
    pub poblacion: String,
    pub superficie: String,
    pub continente: String,
}

impl CsvRow {
    /// Validate the row into a [`Country`], rejecting empty name/continent
    /// and non-integer population/area.
    pub fn validate(self) -> Result<Country, RecordIssue> {
        if self.nombre.trim().is_empty() {
            return Err(RecordIssue::Empty("nombre"));
        }
        if self.continente.trim().is_empty() {
            return Err(RecordIssue::Empty("continente"));
        }
        let population =
            self.poblacion
                .trim()
                .parse::<u64>()
                .map_err(|_| RecordIssue::InvalidNumber {
                    field: "poblacion",
                    value: self.poblacion.clone(),
                })?;
        let area = self
            .superficie
            .trim()
            .parse::<u64>()
            .map_err(|_| RecordIssue::InvalidNumber {
                field: "superficie",
                value: self.superficie.clone(),
            })?;
        Ok(Country {
            name: self.nombre,
            population,
            area,
            continent: self.continente,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(json: &str) -> RawCountry {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn localized_name_wins_over_common() {
        let r = raw(
            r#"{"name":{"common":"Spain","official":"Kingdom of Spain",
                "nativeName":{"spa":{"official":"Reino de España","common":"España"}}},
                "population":47351567,"area":505992.0,"continents":["Europe"]}"#,
        );
        let c = Country::from_raw(r, LOCALIZED_NAME_KEY).unwrap();
        assert_eq!(c.name, "España");
        assert_eq!(c.area, 505992);
    }

    #[test]
    fn blank_localized_name_falls_back_to_common() {
        let r = raw(
            r#"{"name":{"common":"Spain",
                "nativeName":{"spa":{"official":" ","common":"  "}}},
                "population":1,"area":1.0,"continents":["Europe"]}"#,
        );
        let c = Country::from_raw(r, LOCALIZED_NAME_KEY).unwrap();
        assert_eq!(c.name, "Spain");
    }

    #[test]
    fn missing_name_object_is_rejected() {
        let r = raw(r#"{"population":1000,"area":10.0,"continents":["Africa"]}"#);
        assert_eq!(
            Country::from_raw(r, LOCALIZED_NAME_KEY).unwrap_err(),
            RecordIssue::MissingName
        );
    }

    #[test]
    fn defaults_applied_for_absent_fields() {
        let r = raw(r#"{"name":{"common":"Atlantis"}}"#);
        let c = Country::from_raw(r, LOCALIZED_NAME_KEY).unwrap();
        assert_eq!(c.population, 0);
        assert_eq!(c.area, 0);
        assert_eq!(c.continent, UNKNOWN_CONTINENT);
    }

    #[test]
    fn negative_area_coerced_to_unknown() {
        let r = raw(r#"{"name":{"common":"Nowhere"},"area":-1.0,"continents":["Oceania"]}"#);
        let c = Country::from_raw(r, LOCALIZED_NAME_KEY).unwrap();
        assert_eq!(c.area, 0);
    }

    #[test]
    fn csv_row_rejects_bad_numbers() {
        let row = CsvRow {
            nombre: "Chile".into(),
            poblacion: "diecinueve".into(),
            superficie: "756096".into(),
            continente: "South America".into(),
        };
        assert!(matches!(
            row.validate(),
            Err(RecordIssue::InvalidNumber { field: "poblacion", .. })
        ));
    }
}
