use election_bubbles_core::svg::escape;
use election_bubbles_core::{
    Bubble, DrawCommand, HoverInfo, HoverSink, Point, RegionLabel, Scene, Surface,
};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, MouseEvent};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Tooltip body: one escaped line per field.
pub fn tooltip_html(info: &HoverInfo) -> String {
    info.lines()
        .iter()
        .map(|line| escape(line))
        .collect::<Vec<_>>()
        .join("<br>")
}

/// Writes hover text into the page's `#tooltip` element.
pub struct TooltipHover {
    tooltip: Option<HtmlElement>,
}

impl TooltipHover {
    pub fn new(document: &Document) -> Self {
        let tooltip = document
            .get_element_by_id("tooltip")
            .and_then(|element| element.dyn_into::<HtmlElement>().ok());
        if tooltip.is_none() {
            web_sys::console::warn_1(&"No #tooltip element; hover text disabled".into());
        }
        Self { tooltip }
    }
}

impl HoverSink for TooltipHover {
    fn on_hover(&self, info: &HoverInfo, pointer: Option<Point>) {
        let Some(tooltip) = &self.tooltip else {
            return;
        };
        let style = tooltip.style();
        let _ = style.set_property("opacity", "1");
        if let Some(point) = pointer {
            let _ = style.set_property("left", &format!("{}px", point.x));
            let _ = style.set_property("top", &format!("{}px", point.y - 28.0));
        }

        tooltip.set_inner_html(&tooltip_html(info));
    }

    fn on_hover_end(&self) {
        if let Some(tooltip) = &self.tooltip {
            let _ = tooltip.style().set_property("opacity", "0");
        }
    }
}

/// Appends the scene to the page's first `<svg>` element.
pub struct DomSurface {
    document: Document,
    svg: Element,
}

impl DomSurface {
    pub fn attach(document: Document) -> Result<Self, JsValue> {
        let svg = document
            .query_selector("svg")?
            .ok_or_else(|| JsValue::from_str("no <svg> element on the page"))?;
        Ok(Self { document, svg })
    }

    fn svg_element(&self, tag: &str) -> Result<Element, JsValue> {
        self.document.create_element_ns(Some(SVG_NS), tag)
    }

    fn append_region_label(&self, label: &RegionLabel) -> Result<(), JsValue> {
        let text = self.svg_element("text")?;
        text.set_attribute("x", &label.x.to_string())?;
        text.set_attribute("y", &label.y.to_string())?;
        text.set_attribute("text-anchor", "middle")?;
        text.set_attribute("style", "font-size: 1rem; font-weight: bold")?;
        text.set_text_content(Some(label.text.as_str()));
        self.svg.append_child(&text)?;
        Ok(())
    }

    fn append_bubble(&self, bubble: &Bubble, hover: &Rc<dyn HoverSink>) -> Result<(), JsValue> {
        let group = self.svg_element("g")?;
        group.set_attribute("class", &format!("node node-{}", bubble.region_index))?;
        group.set_attribute(
            "transform",
            &format!("translate({},{})", bubble.cx, bubble.cy),
        )?;

        let circle = self.svg_element("circle")?;
        circle.set_attribute("r", &bubble.radius.to_string())?;
        circle.set_attribute(
            "style",
            &format!("fill: {}; stroke: black; stroke-width: 1px", bubble.fill),
        )?;
        group.append_child(&circle)?;

        let title = self.svg_element("title")?;
        title.set_text_content(Some(bubble.title.as_str()));
        group.append_child(&title)?;

        for (dy, content) in [("-0.5em", &bubble.area_label), ("0.6em", &bubble.party_label)] {
            let text = self.svg_element("text")?;
            text.set_attribute("dy", dy)?;
            text.set_attribute("style", "text-anchor: middle; font-size: 0.8rem")?;
            text.set_text_content(Some(content.as_str()));
            group.append_child(&text)?;
        }

        let over = {
            let hover = Rc::clone(hover);
            let info = bubble.hover.clone();
            Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                let pointer = Point {
                    x: f64::from(event.page_x()),
                    y: f64::from(event.page_y()),
                };
                hover.on_hover(&info, Some(pointer));
            })
        };
        let out = {
            let hover = Rc::clone(hover);
            Closure::<dyn FnMut(MouseEvent)>::new(move |_event: MouseEvent| {
                hover.on_hover_end();
            })
        };
        group.add_event_listener_with_callback("mouseover", over.as_ref().unchecked_ref())?;
        group.add_event_listener_with_callback("mouseout", out.as_ref().unchecked_ref())?;
        // Listeners live as long as the page.
        over.forget();
        out.forget();

        self.svg.append_child(&group)?;
        Ok(())
    }
}

impl Surface for DomSurface {
    type Error = JsValue;

    fn submit(&mut self, scene: &Scene, hover: Rc<dyn HoverSink>) -> Result<(), Self::Error> {
        // Size first: every y below is absolute.
        self.svg
            .set_attribute("width", &scene.canvas.width.to_string())?;
        self.svg
            .set_attribute("height", &scene.canvas.height.to_string())?;

        for command in &scene.commands {
            match command {
                DrawCommand::RegionLabel(label) => self.append_region_label(label)?,
                DrawCommand::Bubble(bubble) => {
                    // One failing bubble must not blank the rest of the chart.
                    if let Err(error) = self.append_bubble(bubble, &hover) {
                        web_sys::console::error_2(
                            &format!("Failed to draw {}", bubble.hover.area).into(),
                            &error,
                        );
                    }
                }
            }
        }

        Ok(())
    }
}
