use serde::Serialize;

/// Text shown while the pointer rests on a bubble.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoverInfo {
    pub area: String,
    pub winner: String,
    pub margin: String,
}

impl HoverInfo {
    pub fn lines(&self) -> [String; 3] {
        [
            format!("Area: {}", self.area),
            format!("Winner: {}", self.winner),
            format!("Win Margin: {}", self.margin),
        ]
    }
}

/// Pointer position in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Hover side channel handed to a surface at submit time.
///
/// Callers only invoke it after the scene has been submitted.
pub trait HoverSink {
    fn on_hover(&self, info: &HoverInfo, pointer: Option<Point>);
    fn on_hover_end(&self);
}

pub struct NoHover;

impl HoverSink for NoHover {
    fn on_hover(&self, _info: &HoverInfo, _pointer: Option<Point>) {}

    fn on_hover_end(&self) {}
}
