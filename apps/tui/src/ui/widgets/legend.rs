use crate::app::App;
use crate::ui::widgets::bubbles::css_color;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_legend(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Parties")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    let mut lines = Vec::new();
    for (party, color) in app.settings.chart.palette.legend() {
        let seats = app
            .summary
            .by_party
            .iter()
            .find(|(name, _)| name == party)
            .map_or(0, |(_, seats)| *seats);

        lines.push(TextLine::from(vec![
            Span::styled("● ", Style::default().fg(css_color(color))),
            Span::styled(party.to_string(), Style::default().fg(Color::White)),
            Span::styled(
                format!("  {seats}"),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::DIM),
            ),
        ]));
    }

    lines.push(TextLine::from(""));
    lines.push(TextLine::from(Span::styled(
        "Size: win margin",
        Style::default().fg(Color::Gray),
    )));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
