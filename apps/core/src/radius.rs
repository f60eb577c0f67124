use serde::{Deserialize, Serialize};

const DEFAULT_MAX_MARGIN: f64 = 50.0;
const DEFAULT_MIN_RADIUS: f64 = 30.0;
const DEFAULT_MAX_RADIUS: f64 = 60.0;

/// Linear mapping from win margin (percentage points) to bubble radius (pixels).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadiusScale {
    pub max_margin: f64,
    pub min_radius: f64,
    pub max_radius: f64,
}

impl Default for RadiusScale {
    fn default() -> Self {
        Self {
            max_margin: DEFAULT_MAX_MARGIN,
            min_radius: DEFAULT_MIN_RADIUS,
            max_radius: DEFAULT_MAX_RADIUS,
        }
    }
}

impl RadiusScale {
    /// Margins are clamped to `[0, max_margin]`; NaN maps to `min_radius`.
    pub fn radius(self, margin: f64) -> f64 {
        if self.max_margin <= 0.0 {
            return self.min_radius;
        }

        let clamped = if margin.is_nan() {
            0.0
        } else {
            margin.clamp(0.0, self.max_margin)
        };
        let normalized = clamped / self.max_margin;

        normalized.mul_add(self.max_radius - self.min_radius, self.min_radius)
    }
}

pub fn bubble_radius(margin: f64) -> f64 {
    RadiusScale::default().radius(margin)
}
