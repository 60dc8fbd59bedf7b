//! RPS Terminal Game
//!
//! Interactive Rock-Paper-Scissors against the computer, with difficulty
//! levels, colour themes, round animations and a stats chart.

mod app;
mod config;
mod error;
mod render;
mod theme;

use app::App;
use clap::Parser;
use colored::Colorize;
use config::Config;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    let config = Config::parse();

    // Logs go to stderr so they never interleave with the game screen
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = App::new(config).and_then(App::run);
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Game aborted");
            eprintln!("{}", e.to_string().red().bold());
            ExitCode::FAILURE
        }
    }
}
