mod loop_handler;

pub use loop_handler::{headless_text, run, run_headless};
