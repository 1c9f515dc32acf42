//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `idspy` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Printing the result list
//!
//! All core functionality is implemented in the library crate.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use idspy::collectors::lookup_host;
use idspy::config::Opt;
use idspy::output::print_results;
use idspy::{init_context, init_logger_with, lookup};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; the API key may come from the real environment
    let _ = dotenvy::dotenv();

    let opt = Opt::parse();
    let config = opt.to_config();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    if opt.no_color {
        colored::control::set_override(false);
    }

    let ctx = init_context(&config).context("Failed to initialize HTTP client")?;

    let Some(target) = opt.target.as_deref() else {
        print_results(&lookup_host(&ctx).await);
        return Ok(());
    };

    match lookup(&ctx, target).await {
        Ok(outcome) => {
            print_results(&outcome.results);
            Ok(())
        }
        Err(e) => {
            log::error!("Lookup for {} failed: {}", target, e);
            eprintln!("idspy error: {:#}", anyhow::Error::new(e));
            process::exit(1);
        }
    }
}
