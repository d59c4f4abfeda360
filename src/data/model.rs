use std::fmt;

use crate::error::DatasetError;

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the launch table
// ---------------------------------------------------------------------------

/// A single launch attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub launch_site: String,
    pub booster_version: String,
    pub booster_version_category: String,
    pub payload_mass_kg: f64,
    /// Outcome class: 1 = success, 0 = failure.
    pub class: u8,
}

impl LaunchRecord {
    pub fn is_success(&self) -> bool {
        self.class == 1
    }
}

// ---------------------------------------------------------------------------
// SiteSelection – value of the site dropdown
// ---------------------------------------------------------------------------

/// Dropdown value meaning "do not restrict by site".
pub const ALL_SITES: &str = "ALL";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Parse a raw dropdown value; `ALL` maps to the sentinel.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    pub fn value(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(s) => s,
        }
    }

    /// Whether `site` passes this selection.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(s) => s == site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => write!(f, "All Sites"),
            SiteSelection::Site(s) => write!(f, "{s}"),
        }
    }
}

// ---------------------------------------------------------------------------
// PayloadRange – value of the payload slider
// ---------------------------------------------------------------------------

/// Inclusive payload mass interval in kilograms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        PayloadRange { low, high }
    }

    /// Finite bounds with `low <= high`.
    pub fn is_valid(&self) -> bool {
        self.low.is_finite() && self.high.is_finite() && self.low <= self.high
    }

    pub fn contains(&self, mass: f64) -> bool {
        self.low <= mass && mass <= self.high
    }
}

impl From<(f64, f64)> for PayloadRange {
    fn from((low, high): (f64, f64)) -> Self {
        PayloadRange { low, high }
    }
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full loaded dataset. Read-only once built.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    /// All records in file order.
    pub records: Vec<LaunchRecord>,
    /// Distinct launch sites in order of first appearance.
    pub sites: Vec<String>,
}

impl LaunchDataset {
    /// Build the site index from the loaded records.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut sites: Vec<String> = Vec::new();
        for rec in &records {
            if !sites.contains(&rec.launch_site) {
                sites.push(rec.launch_site.clone());
            }
        }
        LaunchDataset { records, sites }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn has_site(&self, site: &str) -> bool {
        self.sites.iter().any(|s| s == site)
    }

    /// Minimum and maximum payload mass across all records.
    pub fn payload_range(&self) -> Result<(f64, f64), DatasetError> {
        let mut masses = self.records.iter().map(|r| r.payload_mass_kg);
        let first = masses.next().ok_or(DatasetError::Empty)?;
        Ok(masses.fold((first, first), |(lo, hi), m| (lo.min(m), hi.max(m))))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn record(site: &str, payload: f64, class: u8) -> LaunchRecord {
        LaunchRecord {
            launch_site: site.to_string(),
            booster_version: format!("F9 FT B10{}", payload as u32 / 100),
            booster_version_category: if class == 1 { "FT" } else { "v1.1" }.to_string(),
            payload_mass_kg: payload,
            class,
        }
    }

    /// Three rows: two at site A, one at site B.
    pub(crate) fn three_rows() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            record("Site A", 3000.0, 1),
            record("Site A", 6000.0, 0),
            record("Site B", 4000.0, 1),
        ])
    }

    #[test]
    fn sites_keep_first_appearance_order() {
        let ds = LaunchDataset::from_records(vec![
            record("B", 1.0, 1),
            record("A", 2.0, 0),
            record("B", 3.0, 1),
        ]);
        assert_eq!(ds.sites, vec!["B".to_string(), "A".to_string()]);
    }

    #[test]
    fn payload_range_spans_all_rows() {
        assert_eq!(three_rows().payload_range(), Ok((3000.0, 6000.0)));
    }

    #[test]
    fn payload_range_of_empty_dataset_is_an_error() {
        let ds = LaunchDataset::from_records(Vec::new());
        assert_eq!(ds.payload_range(), Err(DatasetError::Empty));
    }

    #[test]
    fn site_selection_round_trips_dropdown_value() {
        assert_eq!(SiteSelection::from_value("ALL"), SiteSelection::All);
        let site = SiteSelection::from_value("KSC LC-39A");
        assert_eq!(site.value(), "KSC LC-39A");
        assert!(site.matches("KSC LC-39A"));
        assert!(!site.matches("VAFB SLC-4E"));
    }

    #[test]
    fn payload_range_validity() {
        assert!(PayloadRange::new(0.0, 0.0).is_valid());
        assert!(!PayloadRange::new(10.0, 5.0).is_valid());
        assert!(!PayloadRange::new(f64::NAN, 5.0).is_valid());
        assert!(!PayloadRange::new(0.0, f64::INFINITY).is_valid());
    }
}
