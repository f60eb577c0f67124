// App module for election_bubbles
// Holds the loaded chart, selection and hover state for the terminal preview

pub mod actions;
pub mod input;
pub mod preview;
pub mod state;

pub use input::handle_input;
pub use state::{App, InputMode};

#[cfg(test)]
pub(crate) fn test_settings() -> crate::config::AppConfig {
    crate::config::AppConfig {
        data_path: std::path::PathBuf::from("data.json"),
        output_path: std::env::temp_dir()
            .join(format!("bubbles-app-{}", std::process::id()))
            .join("chart.svg"),
        export: false,
        chart: election_bubbles_core::ChartConfig::default(),
        debug: false,
    }
}
