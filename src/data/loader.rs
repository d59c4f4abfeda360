use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;

use crate::error::LoadError;

use super::model::{LaunchDataset, LaunchRecord};

/// Columns every launch file must provide, after header normalization.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "launch site",
    "booster version",
    "booster version category",
    "payload mass (kg)",
    "class",
];

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the launch table from a CSV file.
///
/// Rows whose booster version equals `excluded_booster` are dropped.
pub fn load_csv(path: &Path, excluded_booster: &str) -> Result<LaunchDataset, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_reader(file, excluded_booster)
}

/// CSV layout: header row, one launch per line. Header names are matched
/// after trimming and lowercasing, so `" Launch Site"` and `launch site`
/// are the same column. Extra columns are ignored.
pub fn load_from_reader<R: Read>(
    source: R,
    excluded_booster: &str,
) -> Result<LaunchDataset, LoadError> {
    let mut reader = ReaderBuilder::new().trim(Trim::Headers).from_reader(source);

    let headers = normalize_headers(reader.headers()?);
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(LoadError::MissingColumn(col));
        }
    }
    reader.set_headers(headers);

    let mut records = Vec::new();
    let mut excluded = 0usize;

    for (i, result) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = result?;
        let row = i + 1;
        if raw.booster_version == excluded_booster {
            excluded += 1;
            continue;
        }
        records.push(raw.into_record(row)?);
    }

    if records.is_empty() {
        return Err(LoadError::NoRows {
            excluded: excluded_booster.to_string(),
        });
    }

    log::debug!(
        "Parsed {} launch records ({excluded} '{excluded_booster}' rows dropped)",
        records.len()
    );

    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn normalize_headers(headers: &StringRecord) -> StringRecord {
    headers
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect()
}

/// One CSV row as written; validated into a [`LaunchRecord`].
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "launch site")]
    launch_site: String,
    #[serde(rename = "booster version")]
    booster_version: String,
    #[serde(rename = "booster version category")]
    booster_version_category: String,
    #[serde(rename = "payload mass (kg)")]
    payload_mass_kg: f64,
    class: f64,
}

impl RawRecord {
    fn into_record(self, row: usize) -> Result<LaunchRecord, LoadError> {
        if !self.payload_mass_kg.is_finite() {
            return Err(LoadError::InvalidPayload { row });
        }
        let class = if self.class == 0.0 {
            0
        } else if self.class == 1.0 {
            1
        } else {
            return Err(LoadError::InvalidClass {
                row,
                value: self.class,
            });
        };
        Ok(LaunchRecord {
            launch_site: self.launch_site,
            booster_version: self.booster_version,
            booster_version_category: self.booster_version_category,
            payload_mass_kg: self.payload_mass_kg,
            class,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = "\
Unnamed: 0, Flight Number ,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,0,525.0,F9 v1.0  B0005,v1.0
2,3,VAFB SLC-4E,1,9600.0,F9 FT B1029.1,FT
3,4,Kwajalein,0,180.0,Falcon 1,Falcon 1
4,5,KSC LC-39A,1,2490.0,F9 FT B1031.1,FT
";

    fn load(text: &str) -> Result<LaunchDataset, LoadError> {
        load_from_reader(text.as_bytes(), "Falcon 1")
    }

    #[test]
    fn headers_are_trimmed_and_lowercased() {
        let ds = load(SAMPLE).unwrap();
        assert_eq!(ds.len(), 4);
        let first = &ds.records[0];
        assert_eq!(first.launch_site, "CCAFS LC-40");
        assert_eq!(first.booster_version, "F9 v1.0  B0003");
        assert_eq!(first.booster_version_category, "v1.0");
        assert_eq!(first.class, 0);
    }

    #[test]
    fn legacy_booster_rows_are_excluded() {
        let ds = load(SAMPLE).unwrap();
        assert!(ds.records.iter().all(|r| r.booster_version != "Falcon 1"));
        assert!(!ds.has_site("Kwajalein"));
        assert_eq!(ds.sites, vec!["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A"]);
    }

    #[test]
    fn cell_values_are_kept_verbatim() {
        let text = "Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category\n\
                    \" Site A \",1,500,\" Falcon 1\",v1.0\n\
                    \" Site B \",1,500,F9,v1.0\n";
        let ds = load(text).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].booster_version, " Falcon 1");
        assert_eq!(ds.sites, vec![" Site A ", " Site B "]);
    }

    #[test]
    fn missing_class_column_fails() {
        let text = "Launch Site,Payload Mass (kg),Booster Version,Booster Version Category\n\
                    CCAFS LC-40,500,F9 v1.0  B0003,v1.0\n";
        assert!(matches!(load(text), Err(LoadError::MissingColumn("class"))));
    }

    #[test]
    fn class_outside_zero_one_fails() {
        let text = "Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category\n\
                    CCAFS LC-40,2,500,F9 v1.0  B0003,v1.0\n";
        assert!(matches!(
            load(text),
            Err(LoadError::InvalidClass { row: 1, .. })
        ));
    }

    #[test]
    fn non_numeric_payload_is_malformed() {
        let text = "Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category\n\
                    CCAFS LC-40,1,heavy,F9 v1.0  B0003,v1.0\n";
        assert!(matches!(load(text), Err(LoadError::Csv(_))));
    }

    #[test]
    fn only_legacy_rows_leaves_nothing_to_show() {
        let text = "Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category\n\
                    Kwajalein,0,180,Falcon 1,Falcon 1\n";
        assert!(matches!(load(text), Err(LoadError::NoRows { .. })));
    }

    #[test]
    fn loads_from_file_on_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let ds = load_csv(file.path(), "Falcon 1").unwrap();
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.payload_range(), Ok((0.0, 9600.0)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_csv(&dir.path().join("absent.csv"), "Falcon 1").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
