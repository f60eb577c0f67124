use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::ChartError;

/// One row of the results dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub area: String,
    pub region: String,
    #[serde(rename = "WinnerGE2024")]
    pub winner: String,
    /// Percentage string as published, e.g. `"12.3%"`.
    #[serde(rename = "Winner margin")]
    pub margin: String,
}

impl Record {
    pub fn party(&self) -> Party {
        Party::parse(&self.winner)
    }

    pub fn margin_value(&self) -> Result<f64, ChartError> {
        parse_margin(&self.margin)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Party {
    Conservatives,
    Labour,
    LibDems,
    Reform,
    Green,
    Snp,
    Plaid,
    Others,
}

impl Party {
    pub const ALL: [Self; 8] = [
        Self::Conservatives,
        Self::Labour,
        Self::LibDems,
        Self::Reform,
        Self::Green,
        Self::Snp,
        Self::Plaid,
        Self::Others,
    ];

    /// Dataset label, also the palette key.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Conservatives => "Conservatives",
            Self::Labour => "Labour",
            Self::LibDems => "Lib Dems",
            Self::Reform => "Reform",
            Self::Green => "Green",
            Self::Snp => "SNP",
            Self::Plaid => "Plaid",
            Self::Others => "Others",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Conservatives => "Conservative",
            Self::Labour => "Labour",
            Self::LibDems => "Liberal Democrat",
            Self::Reform => "Reform UK",
            Self::Green => "Green",
            Self::Snp => "Scottish National",
            Self::Plaid => "Plaid Cymru",
            Self::Others => "Others",
        }
    }

    /// Exact match on the dataset label; anything unrecognised is `Others`.
    pub fn parse(value: &str) -> Self {
        match value {
            "Conservatives" => Self::Conservatives,
            "Labour" => Self::Labour,
            "Lib Dems" => Self::LibDems,
            "Reform" => Self::Reform,
            "Green" => Self::Green,
            "SNP" => Self::Snp,
            "Plaid" => Self::Plaid,
            _ => Self::Others,
        }
    }
}

/// Parses a margin such as `"12.3%"` into `12.3`.
pub fn parse_margin(value: &str) -> Result<f64, ChartError> {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();

    match number.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Ok(parsed),
        _ => Err(ChartError::InvalidMargin {
            value: value.to_string(),
        }),
    }
}

pub fn parse_records(json: &str) -> Result<Vec<Record>, ChartError> {
    Ok(serde_json::from_str(json)?)
}

/// Distinct region names in first-appearance order.
pub fn distinct_regions(records: &[Record]) -> Vec<&str> {
    let mut seen = HashSet::new();
    records
        .iter()
        .map(|record| record.region.as_str())
        .filter(|region| seen.insert(*region))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{distinct_regions, parse_margin, parse_records, Party, Record};
    use crate::error::ChartError;

    fn record(region: &str, area: &str) -> Record {
        Record {
            area: area.to_string(),
            region: region.to_string(),
            winner: "Labour".to_string(),
            margin: "1%".to_string(),
        }
    }

    #[test]
    fn margin_strips_trailing_percent() {
        assert!((parse_margin("12.3%").unwrap() - 12.3).abs() < 1e-9);
        assert!((parse_margin(" 7 ").unwrap() - 7.0).abs() < 1e-9);
        assert!((parse_margin("0.5 %").unwrap() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn margin_rejects_non_numbers() {
        for value in ["", "%", "abc%", "NaN%", "inf"] {
            assert!(
                matches!(parse_margin(value), Err(ChartError::InvalidMargin { .. })),
                "{value:?} should be rejected"
            );
        }
    }

    #[test]
    fn records_decode_from_dataset_keys() {
        let json = r#"[{"region":"North","area":"Leeds","WinnerGE2024":"Labour","Winner margin":"10%"}]"#;
        let records = parse_records(json).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].winner, "Labour");
        assert_eq!(records[0].margin, "10%");
        assert_eq!(records[0].party(), Party::Labour);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(parse_records("{not json"), Err(ChartError::Json(_))));
    }

    #[test]
    fn regions_keep_first_appearance_order() {
        let records = vec![
            record("Wales", "Cardiff"),
            record("North", "Leeds"),
            record("Wales", "Swansea"),
            record("London", "Hackney"),
            record("North", "York"),
        ];

        assert_eq!(distinct_regions(&records), vec!["Wales", "North", "London"]);
    }

    #[test]
    fn unknown_party_is_others() {
        assert_eq!(Party::parse("Independent"), Party::Others);
        assert_eq!(Party::parse("Lib Dems"), Party::LibDems);
        for party in Party::ALL {
            assert_eq!(Party::parse(party.as_str()), party);
        }
    }
}
