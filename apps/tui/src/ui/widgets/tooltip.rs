use crate::app::App;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_tooltip(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Area")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    let text = app.hover_info().map_or_else(
        || {
            Text::from(TextLine::from(Span::styled(
                "Arrows select a bubble • / search • PgUp/PgDn scroll • s save SVG • q quit",
                Style::default().fg(Color::Gray),
            )))
        },
        |info| {
            Text::from(
                info.lines()
                    .into_iter()
                    .map(TextLine::from)
                    .collect::<Vec<_>>(),
            )
        },
    );

    f.render_widget(Paragraph::new(text).block(block), area);
}
