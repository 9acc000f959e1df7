use colored::*;
use env_logger::{Builder, Env};
use log::{info, warn, LevelFilter};
use std::io::Write;

/// Install the global logger. `RUST_LOG` wins over the flag-derived level.
pub fn init(verbose: bool, quiet: bool) {
    let default_level = level_for(verbose, quiet).to_string().to_lowercase();
    let _ = Builder::from_env(Env::default().default_filter_or(default_level))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .try_init();
}

pub fn level_for(verbose: bool, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Error
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Print a success message with a green checkmark
pub fn success(msg: &str) {
    info!("{} {}", "✓".green(), msg);
}

/// Print an info message with a blue info symbol
pub fn info(msg: &str) {
    info!("{} {}", "ℹ".blue(), msg);
}

/// Print a warning message with a yellow warning symbol
pub fn warning(msg: &str) {
    warn!("{} {}", "⚠".yellow(), msg);
}

/// Print a progress message with a blue arrow
pub fn progress(msg: &str) {
    info!("{} {}", "→".blue(), msg);
}
