use election_bubbles_core::{Bubble, HoverInfo, HoverSink, Point, Scene, Surface};
use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

/// Hover sink backing the tooltip panel under the chart.
#[derive(Debug, Default)]
pub struct TooltipPanel {
    current: RefCell<Option<HoverInfo>>,
}

impl TooltipPanel {
    pub fn current(&self) -> Option<HoverInfo> {
        self.current.borrow().clone()
    }
}

impl HoverSink for TooltipPanel {
    fn on_hover(&self, info: &HoverInfo, _pointer: Option<Point>) {
        *self.current.borrow_mut() = Some(info.clone());
    }

    fn on_hover_end(&self) {
        *self.current.borrow_mut() = None;
    }
}

/// Terminal surface: keeps the submitted scene for drawing and routes selection to the
/// hover sink it was given.
#[derive(Default)]
pub struct PreviewSurface {
    scene: Option<Scene>,
    bubbles: Vec<Bubble>,
    hover: Option<Rc<dyn HoverSink>>,
}

impl Surface for PreviewSurface {
    type Error = Infallible;

    fn submit(&mut self, scene: &Scene, hover: Rc<dyn HoverSink>) -> Result<(), Self::Error> {
        self.bubbles = scene.bubbles().cloned().collect();
        self.scene = Some(scene.clone());
        self.hover = Some(hover);
        Ok(())
    }
}

impl PreviewSurface {
    pub const fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    /// Bubbles in paint order.
    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    pub fn hover(&self, index: usize) {
        if let (Some(hover), Some(bubble)) = (&self.hover, self.bubbles.get(index)) {
            hover.on_hover(&bubble.hover, None);
        }
    }

    pub fn hover_end(&self) {
        if let Some(hover) = &self.hover {
            hover.on_hover_end();
        }
    }
}
