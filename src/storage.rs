use crate::error::{Error, Result};
use crate::models::{Country, CsvRow};
use anyhow::Context;
use csv::WriterBuilder;
use log::warn;
use std::path::Path;

/// Load the cache file.
///
/// Returns the validated records in file order plus the number of rows
/// dropped (missing columns, non-integer numbers, empty name/continent).
/// A structural problem with the file itself — unreadable, a directory,
/// permissions — yields [`Error::LoadFailed`]; a bad row never does.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<(Vec<Country>, usize)> {
    let path = path.as_ref();
    let mut rdr = csv::Reader::from_path(path).map_err(|e| Error::LoadFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut countries = Vec::new();
    let mut skipped = 0usize;
    for row in rdr.deserialize::<CsvRow>() {
        match row {
            Ok(r) => match r.validate() {
                Ok(c) => countries.push(c),
                Err(issue) => {
                    warn!("skipping cache row: {issue}");
                    skipped += 1;
                }
            },
            Err(e) if e.is_io_error() => {
                return Err(Error::LoadFailed {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
            Err(e) => {
                warn!("skipping malformed cache row: {e}");
                skipped += 1;
            }
        }
    }
    Ok((countries, skipped))
}

/// Save records as CSV with the `nombre,poblacion,superficie,continente`
/// header, overwriting any existing file.
pub fn save_csv<P: AsRef<Path>>(countries: &[Country], path: P) -> anyhow::Result<()> {
    let path = path.as_ref();
    let mut wtr = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("create {}", path.display()))?;
    for c in countries {
        wtr.serialize(c)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn round_trip_preserves_fields() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("paises.csv");
        let countries = vec![
            Country {
                name: "Argentina".into(),
                population: 45_808_747,
                area: 2_780_400,
                continent: "South America".into(),
            },
            Country {
                name: "Fiji".into(),
                population: 896_444,
                area: 18_272,
                continent: "Oceania".into(),
            },
        ];
        save_csv(&countries, &p).unwrap();
        let (loaded, skipped) = load_csv(&p).unwrap();
        assert_eq!(loaded, countries);
        assert_eq!(skipped, 0);
    }

    #[test]
    fn bad_rows_are_skipped_not_fatal() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("paises.csv");
        std::fs::write(
            &p,
            "nombre,poblacion,superficie,continente\n\
             Argentina,45808747,2780400,South America\n\
             Ruritania,not-a-number,10,Europe\n\
             MissingColumns,123\n\
             Chile,19000000,756096,South America\n",
        )
        .unwrap();
        let (loaded, skipped) = load_csv(&p).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(skipped, 2);
        assert_eq!(loaded[1].name, "Chile");
    }

    #[test]
    fn unreadable_path_is_load_failed() {
        let dir = tempdir().unwrap();
        // A directory is not a readable cache file.
        let err = load_csv(dir.path()).unwrap_err();
        assert!(matches!(err, Error::LoadFailed { .. }));
    }

    #[test]
    fn empty_file_with_header_is_a_valid_empty_snapshot() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("paises.csv");
        std::fs::write(&p, "nombre,poblacion,superficie,continente\n").unwrap();
        let (loaded, skipped) = load_csv(&p).unwrap();
        assert!(loaded.is_empty());
        assert_eq!(skipped, 0);
    }
}
