use crate::app::App;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::canvas::{Canvas, Circle};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Slice of the scene visible in a terminal area. A cell is roughly twice as tall as it is
/// wide, so one row covers two columns' worth of scene units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub units_per_column: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Viewport {
    pub fn fit(scene_width: f64, scene_height: f64, area: Rect, scroll: f64) -> Self {
        let units_per_column = scene_width / f64::from(area.width.max(1));
        let visible = f64::from(area.height) * 2.0 * units_per_column;
        let top = scroll.clamp(0.0, (scene_height - visible).max(0.0));

        Self {
            units_per_column,
            top,
            bottom: top + visible,
        }
    }

    pub fn shows(&self, y: f64, reach: f64) -> bool {
        y + reach >= self.top && y - reach <= self.bottom
    }

    /// Left edge that centers `chars` columns of text on `x`.
    pub fn centered_text_x(&self, x: f64, chars: usize) -> f64 {
        x - chars as f64 * self.units_per_column / 2.0
    }
}

pub fn css_color(value: &str) -> Color {
    if let Some(hex) = value.strip_prefix('#') {
        if hex.len() == 6 && hex.is_ascii() {
            let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16);
            if let (Ok(r), Ok(g), Ok(b)) = (channel(0..2), channel(2..4), channel(4..6)) {
                return Color::Rgb(r, g, b);
            }
        }
    }

    match value.trim().to_ascii_lowercase().as_str() {
        "black" => Color::Black,
        "white" => Color::White,
        "red" => Color::Red,
        "green" => Color::Green,
        "blue" => Color::Blue,
        "yellow" => Color::Yellow,
        "purple" | "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        _ => Color::Gray,
    }
}

pub fn render_bubble_chart(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Results by Region")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(scene) = app.scene() else {
        return;
    };

    if app.bubbles().is_empty() {
        let paragraph = Paragraph::new("No areas in dataset")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, inner);
        return;
    }

    if inner.width < 4 || inner.height < 4 {
        return;
    }

    let viewport = Viewport::fit(scene.canvas.width, scene.canvas.height, inner, app.scroll);
    app.visible_height.set(viewport.bottom - viewport.top);

    f.render_widget(
        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, scene.canvas.width])
            .y_bounds([-viewport.bottom, -viewport.top])
            .paint(|ctx| {
                for (index, bubble) in app.bubbles().iter().enumerate() {
                    if !viewport.shows(bubble.cy, bubble.radius) {
                        continue;
                    }
                    ctx.draw(&Circle {
                        x: bubble.cx,
                        y: -bubble.cy,
                        radius: bubble.radius,
                        color: css_color(&bubble.fill),
                    });
                    if app.selected == Some(index) {
                        ctx.draw(&Circle {
                            x: bubble.cx,
                            y: -bubble.cy,
                            radius: bubble.radius + 8.0,
                            color: Color::White,
                        });
                    }
                }

                ctx.layer();

                for label in scene.region_labels() {
                    if !viewport.shows(label.y, 0.0) {
                        continue;
                    }
                    let width = label.text.chars().count();
                    ctx.print(
                        viewport.centered_text_x(label.x, width),
                        -label.y,
                        TextLine::from(Span::styled(
                            label.text.clone(),
                            Style::default()
                                .fg(Color::White)
                                .add_modifier(Modifier::BOLD),
                        )),
                    );
                }

                for (index, bubble) in app.bubbles().iter().enumerate() {
                    if !viewport.shows(bubble.cy, 0.0) {
                        continue;
                    }
                    let room = (bubble.radius * 2.0 / viewport.units_per_column) as usize;
                    let text = bubble.area_label.chars().take(room).collect::<String>();
                    let style = if app.selected == Some(index) {
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(css_color(&bubble.fill))
                    };
                    ctx.print(
                        viewport.centered_text_x(bubble.cx, text.chars().count()),
                        -bubble.cy,
                        TextLine::from(Span::styled(text, style)),
                    );
                }
            }),
        inner,
    );
}

#[cfg(test)]
mod tests {
    use super::{css_color, Viewport};
    use ratatui::layout::Rect;
    use ratatui::style::Color;

    #[test]
    fn hex_and_named_colors() {
        assert_eq!(css_color("#E4003B"), Color::Rgb(0xE4, 0x00, 0x3B));
        assert_eq!(css_color("#0072ce"), Color::Rgb(0x00, 0x72, 0xCE));
        assert_eq!(css_color("grey"), Color::Gray);
        assert_eq!(css_color("Cyan"), Color::Cyan);
        assert_eq!(css_color("#12"), Color::Gray);
        assert_eq!(css_color("#zzzzzz"), Color::Gray);
    }

    #[test]
    fn viewport_scales_to_width() {
        let viewport = Viewport::fit(1400.0, 5000.0, Rect::new(0, 0, 140, 30), 100.0);

        assert!((viewport.units_per_column - 10.0).abs() < 1e-9);
        assert!((viewport.top - 100.0).abs() < 1e-9);
        assert!((viewport.bottom - 700.0).abs() < 1e-9);
        assert!(viewport.shows(90.0, 20.0));
        assert!(!viewport.shows(750.0, 20.0));
    }

    #[test]
    fn viewport_clamps_past_the_end() {
        let viewport = Viewport::fit(1400.0, 800.0, Rect::new(0, 0, 140, 30), 10_000.0);

        assert!((viewport.top - 200.0).abs() < 1e-9);
        assert!((viewport.bottom - 800.0).abs() < 1e-9);
    }
}
