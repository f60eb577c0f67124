pub mod bubbles;
pub mod legend;
pub mod popup;
pub mod tooltip;
