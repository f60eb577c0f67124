// Layout and draw-command core shared by the terminal and browser renderers
pub mod config;
pub mod domain;
pub mod error;
pub mod hover;
pub mod layout;
pub mod radius;
pub mod scene;
pub mod stats;
pub mod svg;

pub use config::{ChartConfig, Margins, Palette, PaletteEntry};
pub use domain::{distinct_regions, parse_margin, parse_records, Party, Record};
pub use error::ChartError;
pub use hover::{HoverInfo, HoverSink, NoHover, Point};
pub use layout::{columns_per_row, CanvasSize, ChartLayout, GridCell, RegionLayout};
pub use radius::{bubble_radius, RadiusScale};
pub use scene::{render_chart, Bubble, Diagnostic, DrawCommand, RegionLabel, Scene, Surface};
pub use stats::Summary;
pub use svg::SvgDocument;
