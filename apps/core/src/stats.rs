use serde::Serialize;

use crate::domain::{distinct_regions, Party, Record};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_areas: usize,
    pub total_regions: usize,
    /// Seats per party in legend order; parties with no seats are left out.
    pub by_party: Vec<(String, usize)>,
    /// Areas per region in first-seen order.
    pub by_region: Vec<(String, usize)>,
    pub invalid_margins: usize,
}

impl Summary {
    pub fn from_records(records: &[Record]) -> Self {
        let by_party = Party::ALL
            .iter()
            .map(|party| {
                let seats = records.iter().filter(|r| r.party() == *party).count();
                (party.as_str().to_string(), seats)
            })
            .filter(|(_, seats)| *seats > 0)
            .collect();

        let regions = distinct_regions(records);
        let by_region = regions
            .iter()
            .map(|region| {
                let areas = records.iter().filter(|r| r.region == *region).count();
                ((*region).to_string(), areas)
            })
            .collect();

        Self {
            total_areas: records.len(),
            total_regions: regions.len(),
            by_party,
            by_region,
            invalid_margins: records.iter().filter(|r| r.margin_value().is_err()).count(),
        }
    }
}
