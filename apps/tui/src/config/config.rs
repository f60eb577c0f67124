use color_eyre::eyre::{eyre, WrapErr};
use dotenv::dotenv;
use election_bubbles_core::ChartConfig;
use std::env;
use std::path::PathBuf;

const DEFAULT_DATA_PATH: &str = "data.json";
const DEFAULT_OUTPUT_PATH: &str = "bubbles.svg";

/// Resolved runtime settings for one invocation.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_path: PathBuf,
    /// Where `s` saves the chart, and the export target when `export` is set.
    pub output_path: PathBuf,
    /// True when an output path was given explicitly (`--out` / `BUBBLES_OUT`).
    pub export: bool,
    pub chart: ChartConfig,
    pub debug: bool,
}

/// Initializes the application configuration from `.env`, the environment and any
/// chart override file named by `BUBBLES_CONFIG`.
pub fn init_app_config() -> color_eyre::eyre::Result<AppConfig> {
    // Load environment variables from .env file
    dotenv().ok();

    let base_dir: PathBuf = env::current_dir()?;
    from_lookup(&base_dir, |key| env::var(key).ok())
}

/// Resolves settings through `lookup`, with relative paths anchored at `base_dir`.
pub fn from_lookup(
    base_dir: &std::path::Path,
    lookup: impl Fn(&str) -> Option<String>,
) -> color_eyre::eyre::Result<AppConfig> {
    let data_path = base_dir.join(
        lookup("BUBBLES_DATA").unwrap_or_else(|| DEFAULT_DATA_PATH.to_string()),
    );

    let explicit_output = lookup("BUBBLES_OUT").filter(|path| !path.is_empty());
    let export = explicit_output.is_some();
    let output_path =
        base_dir.join(explicit_output.unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string()));

    let chart = match lookup("BUBBLES_CONFIG").filter(|path| !path.is_empty()) {
        Some(path) => load_chart_config(&base_dir.join(path))?,
        None => ChartConfig::default(),
    };

    let debug = lookup("DEBUG").is_some_and(|value| !value.is_empty() && value != "0");

    Ok(AppConfig {
        data_path,
        output_path,
        export,
        chart,
        debug,
    })
}

fn load_chart_config(path: &std::path::Path) -> color_eyre::eyre::Result<ChartConfig> {
    let json = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read chart config {}", path.display()))?;

    let chart = ChartConfig::from_json(&json)
        .map_err(|e| eyre!("Invalid chart config {}: {e}", path.display()))?;

    tracing::debug!(path = %path.display(), "loaded chart config overrides");
    Ok(chart)
}
