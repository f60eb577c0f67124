use std::fmt::Write as _;
use std::rc::Rc;

use crate::hover::HoverSink;
use crate::scene::{Bubble, DrawCommand, RegionLabel, Scene, Surface};

/// Standalone SVG serializer. Each bubble's `<title>` names its area and winner.
#[derive(Debug, Default)]
pub struct SvgDocument {
    output: String,
}

impl SvgDocument {
    pub const fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.output
    }

    pub fn into_string(self) -> String {
        self.output
    }

    fn push_region_label(&mut self, label: &RegionLabel) -> std::fmt::Result {
        writeln!(
            self.output,
            r#"  <text x="{}" y="{}" text-anchor="middle" style="font-size: 1rem; font-weight: bold">{}</text>"#,
            label.x,
            label.y,
            escape(&label.text)
        )
    }

    fn push_bubble(&mut self, bubble: &Bubble) -> std::fmt::Result {
        writeln!(
            self.output,
            r#"  <g class="node node-{}" transform="translate({},{})">"#,
            bubble.region_index, bubble.cx, bubble.cy
        )?;
        writeln!(
            self.output,
            r#"    <circle r="{}" style="fill: {}; stroke: black; stroke-width: 1px"/>"#,
            bubble.radius,
            escape(&bubble.fill)
        )?;
        writeln!(
            self.output,
            "    <title>{}</title>",
            escape(&bubble.title)
        )?;
        writeln!(
            self.output,
            r#"    <text dy="-0.5em" style="text-anchor: middle; font-size: 0.8rem">{}</text>"#,
            escape(&bubble.area_label)
        )?;
        writeln!(
            self.output,
            r#"    <text dy="0.6em" style="text-anchor: middle; font-size: 0.8rem">{}</text>"#,
            escape(&bubble.party_label)
        )?;
        self.output.push_str("  </g>\n");
        Ok(())
    }
}

impl Surface for SvgDocument {
    type Error = std::fmt::Error;

    fn submit(&mut self, scene: &Scene, _hover: Rc<dyn HoverSink>) -> Result<(), Self::Error> {
        self.output.clear();
        writeln!(
            self.output,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
            scene.canvas.width, scene.canvas.height
        )?;

        for command in &scene.commands {
            match command {
                DrawCommand::RegionLabel(label) => self.push_region_label(label)?,
                DrawCommand::Bubble(bubble) => self.push_bubble(bubble)?,
            }
        }

        self.output.push_str("</svg>\n");
        Ok(())
    }
}

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
