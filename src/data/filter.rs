use crate::error::SelectionError;

use super::model::{LaunchDataset, LaunchRecord, PayloadRange, SiteSelection};

// ---------------------------------------------------------------------------
// Selection checks
// ---------------------------------------------------------------------------

/// Reject a site the dataset has never seen.
///
/// The dropdown is populated from the dataset, so this only trips when a
/// caller builds a selection by hand.
pub fn check_site(dataset: &LaunchDataset, site: &SiteSelection) -> Result<(), SelectionError> {
    match site {
        SiteSelection::All => Ok(()),
        SiteSelection::Site(s) if dataset.has_site(s) => Ok(()),
        SiteSelection::Site(s) => Err(SelectionError::InvalidSelection(s.clone())),
    }
}

pub fn check_range(range: PayloadRange) -> Result<(), SelectionError> {
    if range.is_valid() {
        Ok(())
    } else {
        Err(SelectionError::InvalidRange {
            low: range.low,
            high: range.high,
        })
    }
}

// ---------------------------------------------------------------------------
// Row filters
// ---------------------------------------------------------------------------

/// Records at the selected site (all records for [`SiteSelection::All`]).
pub fn by_site<'a>(
    dataset: &'a LaunchDataset,
    site: &'a SiteSelection,
) -> impl Iterator<Item = &'a LaunchRecord> + 'a {
    dataset
        .records
        .iter()
        .filter(move |r| site.matches(&r.launch_site))
}

/// Records at the selected site whose payload lies in `range` (inclusive).
pub fn by_site_and_payload<'a>(
    dataset: &'a LaunchDataset,
    site: &'a SiteSelection,
    range: PayloadRange,
) -> impl Iterator<Item = &'a LaunchRecord> + 'a {
    by_site(dataset, site).filter(move |r| range.contains(r.payload_mass_kg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::three_rows;

    #[test]
    fn unknown_site_is_rejected() {
        let ds = three_rows();
        assert_eq!(
            check_site(&ds, &SiteSelection::Site("Site Z".into())),
            Err(SelectionError::InvalidSelection("Site Z".into()))
        );
        assert!(check_site(&ds, &SiteSelection::Site("Site A".into())).is_ok());
        assert!(check_site(&ds, &SiteSelection::All).is_ok());
    }

    #[test]
    fn inverted_range_is_rejected() {
        assert!(matches!(
            check_range(PayloadRange::new(5000.0, 1000.0)),
            Err(SelectionError::InvalidRange { .. })
        ));
    }

    #[test]
    fn payload_bounds_are_inclusive() {
        let ds = three_rows();
        let all = SiteSelection::All;
        let hits: Vec<f64> = by_site_and_payload(&ds, &all, PayloadRange::new(3000.0, 4000.0))
            .map(|r| r.payload_mass_kg)
            .collect();
        assert_eq!(hits, vec![3000.0, 4000.0]);
    }

    #[test]
    fn site_filter_restricts_rows() {
        let ds = three_rows();
        let a = SiteSelection::Site("Site A".into());
        assert_eq!(by_site(&ds, &a).count(), 2);
        assert_eq!(by_site(&ds, &SiteSelection::All).count(), 3);
    }
}
