use crate::app::preview::{PreviewSurface, TooltipPanel};
use crate::config::AppConfig;
use election_bubbles_core::{render_chart, Bubble, HoverInfo, Record, Scene, Summary};
use std::cell::Cell;
use std::rc::Rc;

/// Scene units moved by PageUp / PageDown.
pub const PAGE_STEP: f64 = 420.0;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum InputMode {
    Browse,
    Search,
}

pub struct App {
    pub running: bool,
    pub records: Vec<Record>,
    pub settings: AppConfig,
    pub preview: PreviewSurface,
    pub tooltip: Rc<TooltipPanel>,
    pub summary: Summary,
    pub selected: Option<usize>,
    /// Scene y shown at the top of the chart viewport.
    pub scroll: f64,
    /// Scene units the chart viewport showed on the last draw.
    pub visible_height: Cell<f64>,
    pub input_mode: InputMode,
    pub search_input: String,
    pub status_message: String,
}

impl App {
    pub fn new(records: Vec<Record>, settings: AppConfig) -> Self {
        let tooltip = Rc::new(TooltipPanel::default());
        let mut preview = PreviewSurface::default();

        let scene = match render_chart(&records, &settings.chart, &mut preview, tooltip.clone()) {
            Ok(scene) => scene,
            Err(never) => match never {},
        };
        let status_message = if scene.diagnostics.is_empty() {
            format!("Loaded {} areas", records.len())
        } else {
            format!(
                "Loaded {} areas ({} with unreadable margins)",
                records.len(),
                scene.diagnostics.len()
            )
        };

        Self {
            running: true,
            summary: Summary::from_records(&records),
            records,
            settings,
            preview,
            tooltip,
            selected: None,
            scroll: 0.0,
            visible_height: Cell::new(PAGE_STEP),
            input_mode: InputMode::Browse,
            search_input: String::new(),
            status_message,
        }
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.preview.scene()
    }

    pub fn bubbles(&self) -> &[Bubble] {
        self.preview.bubbles()
    }

    pub fn hover_info(&self) -> Option<HoverInfo> {
        self.tooltip.current()
    }

    /// Selects a bubble, raises its tooltip and scrolls it into view.
    pub fn select(&mut self, index: usize) {
        let Some(bubble) = self.bubbles().get(index) else {
            return;
        };
        let top = bubble.cy - bubble.radius;
        let bottom = bubble.cy + bubble.radius;
        let visible = self.visible_height.get();

        self.selected = Some(index);
        self.preview.hover(index);
        if top < self.scroll || bottom > self.scroll + visible {
            self.scroll = (top - visible / 4.0).clamp(0.0, self.max_scroll());
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.preview.hover_end();
    }

    pub fn scroll_by(&mut self, delta: f64) {
        self.scroll = (self.scroll + delta).clamp(0.0, self.max_scroll());
    }

    /// Largest scroll that still fills the viewport.
    fn max_scroll(&self) -> f64 {
        let visible = self.visible_height.get();
        self.scene()
            .map_or(0.0, |scene| (scene.canvas.height - visible).max(0.0))
    }
}
