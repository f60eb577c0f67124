use clap::Parser;
use color_eyre::Result;
use election_bubbles::app::{actions, App};
use election_bubbles::cli::CliArgs;
use election_bubbles::{config, event, loader, logging, terminal};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let settings = config::init_app_config()?;
    logging::init_logging(settings.debug);

    // A failed load is logged by the loader; nothing is drawn.
    let Some(records) = loader::load_or_log(&settings.data_path).await else {
        return Ok(());
    };

    if settings.export {
        return actions::export_svg(&records, &settings.chart, &settings.output_path).await;
    }

    let mut app = App::new(records, settings);

    if args.headless || args.json || !is_terminal() {
        return event::run_headless(&app, args.json);
    }

    let mut terminal = terminal::setup()?;

    let result = event::run(&mut terminal, &mut app).await;

    terminal::cleanup(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
