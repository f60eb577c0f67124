use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "election_bubbles", version, about = "Election results bubble chart")]
pub struct CliArgs {
    /// Dataset to render
    #[arg(long, value_name = "PATH")]
    pub data: Option<String>,

    /// Write the chart as SVG to PATH and exit
    #[arg(long, value_name = "PATH")]
    pub out: Option<String>,

    /// JSON file overriding chart sizes and colors
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Print a summary and exit
    #[arg(long)]
    pub headless: bool,

    /// Print the headless summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(data) = &self.data {
            std::env::set_var("BUBBLES_DATA", data);
        }
        if let Some(out) = &self.out {
            std::env::set_var("BUBBLES_OUT", out);
        }
        if let Some(config) = &self.config {
            std::env::set_var("BUBBLES_CONFIG", config);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CliArgs;
    use clap::Parser;

    #[test]
    fn parses_export_flags() {
        let args = CliArgs::parse_from([
            "election_bubbles",
            "--data",
            "results.json",
            "--out",
            "chart.svg",
        ]);

        assert_eq!(args.data.as_deref(), Some("results.json"));
        assert_eq!(args.out.as_deref(), Some("chart.svg"));
        assert!(!args.headless);
    }

    #[test]
    fn headless_json() {
        let args = CliArgs::parse_from(["election_bubbles", "--headless", "--json", "--debug"]);

        assert!(args.headless);
        assert!(args.json);
        assert!(args.debug);
        assert!(args.data.is_none());
    }
}
