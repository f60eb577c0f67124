mod helpers;

use crate::app::actions::export_svg;
use crate::app::state::{App, InputMode, PAGE_STEP};
use crossterm::event::KeyCode;

use helpers::{best_area_match, row_above, row_below, wrap_decrement, wrap_increment};

pub async fn handle_input(app: &mut App, key: KeyCode) {
    match app.input_mode {
        InputMode::Search => handle_search_input(app, key),
        InputMode::Browse => handle_browse_input(app, key).await,
    }
}

async fn handle_browse_input(app: &mut App, key: KeyCode) {
    let len = app.bubbles().len();

    match key {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Esc => app.clear_selection(),
        KeyCode::Right | KeyCode::Char('l') => {
            let next = app.selected.map_or(0, |index| wrap_increment(index, len));
            app.select(next);
        }
        KeyCode::Left | KeyCode::Char('h') => {
            let next = app
                .selected
                .map_or_else(|| len.saturating_sub(1), |index| wrap_decrement(index, len));
            app.select(next);
        }
        KeyCode::Down | KeyCode::Char('j') => match app.selected {
            Some(index) => {
                if let Some(next) = row_below(app.bubbles(), index) {
                    app.select(next);
                }
            }
            None => app.select(0),
        },
        KeyCode::Up | KeyCode::Char('k') => {
            if let Some(next) = app.selected.and_then(|index| row_above(app.bubbles(), index)) {
                app.select(next);
            }
        }
        KeyCode::PageDown => app.scroll_by(PAGE_STEP),
        KeyCode::PageUp => app.scroll_by(-PAGE_STEP),
        KeyCode::Char('/') => {
            app.input_mode = InputMode::Search;
            app.search_input.clear();
        }
        KeyCode::Char('s') => save_chart(app).await,
        _ => {}
    }
}

fn handle_search_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => {
            app.input_mode = InputMode::Browse;
            app.search_input.clear();
        }
        KeyCode::Enter => {
            match best_area_match(app.bubbles(), &app.search_input) {
                Some(index) => {
                    app.select(index);
                    app.status_message = format!("Found {}", app.bubbles()[index].hover.area);
                }
                None => {
                    app.status_message = format!("No area matches \"{}\"", app.search_input);
                }
            }
            app.input_mode = InputMode::Browse;
            app.search_input.clear();
        }
        KeyCode::Backspace => {
            app.search_input.pop();
        }
        KeyCode::Char(c) => app.search_input.push(c),
        _ => {}
    }
}

async fn save_chart(app: &mut App) {
    let path = app.settings.output_path.clone();
    app.status_message = match export_svg(&app.records, &app.settings.chart, &path).await {
        Ok(()) => format!(
            "Saved {} at {}",
            path.display(),
            chrono::Local::now().format("%H:%M:%S")
        ),
        Err(e) => {
            tracing::error!("chart export failed: {e}");
            format!("Error: {e}")
        }
    };
}
