// UI module for election_bubbles
// Lays out the chart, legend, tooltip and status line

pub mod widgets;

use crate::app::{App, InputMode};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(5),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_header(app, f, main_layout[0]);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(26)])
        .split(main_layout[1]);

    widgets::bubbles::render_bubble_chart(app, f, content[0]);
    widgets::legend::render_legend(app, f, content[1]);
    widgets::tooltip::render_tooltip(app, f, main_layout[2]);
    render_status(app, f, main_layout[3]);

    if app.input_mode == InputMode::Search {
        widgets::popup::render_search_popup(app, f);
    }
}

fn render_header(app: &App, f: &mut Frame<'_>, area: Rect) {
    let columns = app.scene().map_or(0, |scene| scene.layout.columns);
    let line = TextLine::from(vec![Span::styled(
        format!(
            "Areas: {}  Regions: {}  Columns: {columns}",
            app.summary.total_areas, app.summary.total_regions
        ),
        Style::default().fg(Color::White),
    )]);

    let block = Block::default()
        .title("Election Results")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    f.render_widget(
        Paragraph::new(line).block(block).alignment(Alignment::Left),
        area,
    );
}

fn render_status(app: &App, f: &mut Frame<'_>, area: Rect) {
    let paragraph = Paragraph::new(app.status_message.as_str())
        .alignment(Alignment::Left)
        .style(Style::default().fg(Color::Gray));
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::ui;
    use crate::app::{test_settings, App, InputMode};
    use election_bubbles_core::Record;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn draws_chart_and_tooltip() {
        let records = vec![Record {
            area: "Leeds".to_string(),
            region: "North".to_string(),
            winner: "Labour".to_string(),
            margin: "10%".to_string(),
        }];
        let mut app = App::new(records, test_settings());
        app.select(0);

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| ui(&app, f)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("Election Results"));
        assert!(text.contains("Area: Leeds"));
        assert!(text.contains("Win Margin: 10%"));
        assert!(text.contains("Labour"));
    }

    #[test]
    fn drawing_records_chart_viewport_height() {
        let records = (0..60)
            .map(|i| Record {
                area: format!("Area {i}"),
                region: "North".to_string(),
                winner: "Labour".to_string(),
                margin: "10%".to_string(),
            })
            .collect();
        let app = App::new(records, test_settings());

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| ui(&app, f)).unwrap();

        // 80 - 26 legend - 2 borders = 52 columns; 24 - 3 - 5 - 1 - 2 borders = 13 rows
        let expected = 13.0 * 2.0 * (1400.0 / 52.0);
        assert!((app.visible_height.get() - expected).abs() < 1e-9);
    }

    #[test]
    fn empty_dataset_says_so() {
        let mut app = App::new(Vec::new(), test_settings());
        app.input_mode = InputMode::Search;

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(&app, f)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("No areas in dataset"));
        assert!(text.contains("Find area"));
    }
}
