use std::collections::BTreeMap;

use serde::Serialize;

use crate::data::filter::{by_site, check_site};
use crate::data::model::{LaunchDataset, SiteSelection};
use crate::error::SelectionError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }
}

/// Success breakdown for the selected site.
///
/// * `All`: one slice per site, sized by its number of successful launches.
/// * a single site: one slice per outcome class present, sized by its count.
pub fn pie_chart(dataset: &LaunchDataset, site: &SiteSelection) -> Result<PieChart, SelectionError> {
    check_site(dataset, site)?;

    match site {
        SiteSelection::All => {
            let slices = dataset
                .sites
                .iter()
                .map(|s| PieSlice {
                    label: s.clone(),
                    value: dataset
                        .records
                        .iter()
                        .filter(|r| &r.launch_site == s && r.is_success())
                        .count() as f64,
                })
                .collect();
            Ok(PieChart {
                title: "Total Success Launches by Site".to_string(),
                slices,
            })
        }
        SiteSelection::Site(name) => {
            let mut counts: BTreeMap<u8, usize> = BTreeMap::new();
            for rec in by_site(dataset, site) {
                *counts.entry(rec.class).or_default() += 1;
            }
            let slices = counts
                .into_iter()
                .map(|(class, n)| PieSlice {
                    label: class.to_string(),
                    value: n as f64,
                })
                .collect();
            Ok(PieChart {
                title: format!("Success vs Failure for site {name}"),
                slices,
            })
        }
    }
}
