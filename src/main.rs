//! HST Professional Services - Application entry point
//!
//! CLI-based entry point that dispatches to various commands.

use clap::Parser;

use hst_site::{
    cli::{Cli, Commands},
    commands,
    config::Settings,
    logging,
};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration before logging so LOG_* settings apply
    let settings = match Settings::load(cli.env_file.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            logging::init_fallback();
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize tracing (verbose mode sets debug level)
    let guard = match logging::init(&settings.logging, cli.verbose) {
        Ok(guard) => guard,
        Err(e) => {
            logging::init_fallback();
            tracing::error!(file = %settings.logging.file.display(), "Failed to open log file: {}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!(?settings, "Configuration loaded");

    // Execute command
    let result = match cli.command {
        Commands::Serve(args) => commands::serve::execute(args, settings).await,
        Commands::Config(args) => commands::config::execute(args, settings).await,
        Commands::Token(args) => commands::token::execute(args, settings).await,
    };

    // Handle errors
    if let Err(e) = result {
        tracing::error!("Command failed: {}", e);
        drop(guard);
        std::process::exit(1);
    }
}
