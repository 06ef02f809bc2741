//! seqgen — stateful integer sequence generator.

use anyhow::Result;
use seqgen_core::constants::exit_codes;
use seqgen_core::generator::SeqError;
use seqgen_lib::{app, config, errors, version};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();
    tracing::debug!(version = %version::full_version(), "starting");

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    if let Err(err) = app::run(&config) {
        eprintln!("Error: {err:#}");
        let code = err
            .downcast_ref::<SeqError>()
            .map_or(exit_codes::ERROR_GENERIC, errors::handle_error);
        std::process::exit(code);
    }
    Ok(())
}
