use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use election_bubbles_core::Summary;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;

use crate::app::{handle_input, App};
use crate::ui;

/// Run the application in headless mode (no UI)
pub fn run_headless(app: &App, json: bool) -> Result<()> {
    if json {
        render_headless_json(&app.summary)?;
    } else {
        print!("{}", headless_text(&app.summary));
    }

    Ok(())
}

fn render_headless_json(summary: &Summary) -> Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    println!("{json}");
    Ok(())
}

pub fn headless_text(summary: &Summary) -> String {
    let mut out = String::new();

    out.push_str("\nElection Results\n");
    out.push_str("================\n");
    out.push_str(&format!("Total areas: {}\n", summary.total_areas));
    out.push_str(&format!("Regions: {}\n", summary.total_regions));
    if summary.invalid_margins > 0 {
        out.push_str(&format!(
            "Unreadable margins: {}\n",
            summary.invalid_margins
        ));
    }

    out.push_str("\nSeats by Party:\n");
    for (party, seats) in &summary.by_party {
        out.push_str(&format!("- {party}: {seats}\n"));
    }

    out.push_str("\nAreas by Region:\n");
    for (region, areas) in &summary.by_region {
        out.push_str(&format!("- {region}: {areas}\n"));
    }

    out
}

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    loop {
        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    handle_input(app, key.code).await;
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    // Force a redraw after resize
                    if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
                        tracing::debug!("redraw after resize failed: {e}");
                    }
                }
                Ok(_) => {}
                Err(e) => tracing::debug!("event read failed: {e}"),
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::headless_text;
    use election_bubbles_core::{Record, Summary};

    #[test]
    fn headless_text_lists_parties_and_regions() {
        let records = vec![
            Record {
                area: "Leeds".to_string(),
                region: "North".to_string(),
                winner: "Labour".to_string(),
                margin: "10%".to_string(),
            },
            Record {
                area: "Ceredigion".to_string(),
                region: "Wales".to_string(),
                winner: "Plaid".to_string(),
                margin: "oops".to_string(),
            },
        ];
        let text = headless_text(&Summary::from_records(&records));

        assert!(text.contains("Total areas: 2"));
        assert!(text.contains("- Labour: 1"));
        assert!(text.contains("- Plaid: 1"));
        assert!(text.contains("- Wales: 1"));
        assert!(text.contains("Unreadable margins: 1"));
    }
}
