use serde::{Deserialize, Serialize};

use crate::domain::Party;
use crate::radius::RadiusScale;

/// Immutable sizing and color settings for one chart.
///
/// Every field has a default, so a JSON override file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Total canvas width including the left and right margins.
    pub width: f64,
    pub margin: Margins,
    pub bubble_diameter: f64,
    pub bubble_margin: f64,
    /// Vertical space reserved above each region's grid for its label.
    pub region_label_padding: f64,
    pub radius: RadiusScale,
    pub palette: Palette,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1400.0,
            margin: Margins::default(),
            bubble_diameter: 80.0,
            bubble_margin: 25.0,
            region_label_padding: 50.0,
            radius: RadiusScale::default(),
            palette: Palette::default(),
        }
    }
}

impl ChartConfig {
    pub fn drawable_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    /// Width and height of one grid cell.
    pub fn cell_size(&self) -> f64 {
        self.bubble_diameter + self.bubble_margin
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 120.0,
            right: 20.0,
            bottom: 30.0,
            left: 20.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub party: String,
    pub color: String,
}

/// Party name to CSS color, with a fallback for anything unmapped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub entries: Vec<PaletteEntry>,
    pub fallback: String,
}

impl Default for Palette {
    fn default() -> Self {
        let entries = [
            (Party::Conservatives, "#0072CE"),
            (Party::Labour, "#E4003B"),
            (Party::LibDems, "#F0C300"),
            (Party::Reform, "#6D28D9"),
            (Party::Green, "#008837"),
            (Party::Snp, "#FDF1A5"),
            (Party::Plaid, "#CDEBC5"),
        ]
        .into_iter()
        .map(|(party, color)| PaletteEntry {
            party: party.as_str().to_string(),
            color: color.to_string(),
        })
        .collect();

        Self {
            entries,
            fallback: "grey".to_string(),
        }
    }
}

impl Palette {
    pub fn color_for(&self, party: &str) -> &str {
        self.entries
            .iter()
            .find(|entry| entry.party == party)
            .map_or(self.fallback.as_str(), |entry| entry.color.as_str())
    }

    /// Legend rows: every mapped party followed by the `Others` fallback.
    pub fn legend(&self) -> Vec<(&str, &str)> {
        self.entries
            .iter()
            .map(|entry| (entry.party.as_str(), entry.color.as_str()))
            .chain(std::iter::once((
                Party::Others.as_str(),
                self.fallback.as_str(),
            )))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{ChartConfig, Palette};

    #[test]
    fn palette_maps_known_parties() {
        let palette = Palette::default();
        assert_eq!(palette.color_for("Labour"), "#E4003B");
        assert_eq!(palette.color_for("Conservatives"), "#0072CE");
        assert_eq!(palette.color_for("Plaid"), "#CDEBC5");
    }

    #[test]
    fn palette_falls_back_to_grey() {
        let palette = Palette::default();
        assert_eq!(palette.color_for("Independent"), "grey");
        assert_eq!(palette.color_for("Others"), "grey");
        assert_eq!(palette.color_for(""), "grey");
    }

    #[test]
    fn legend_lists_fallback_last() {
        let palette = Palette::default();
        let legend = palette.legend();
        assert_eq!(legend.len(), 8);
        assert_eq!(legend.last(), Some(&("Others", "grey")));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = ChartConfig::from_json(r#"{"width": 800, "margin": {"top": 60}}"#).unwrap();

        assert!((config.width - 800.0).abs() < f64::EPSILON);
        assert!((config.margin.top - 60.0).abs() < f64::EPSILON);
        assert!((config.margin.bottom - 30.0).abs() < f64::EPSILON);
        assert_eq!(config.palette, Palette::default());
    }

    #[test]
    fn default_drawable_width() {
        let config = ChartConfig::default();
        assert!((config.drawable_width() - 1360.0).abs() < f64::EPSILON);
        assert!((config.cell_size() - 105.0).abs() < f64::EPSILON);
    }
}
