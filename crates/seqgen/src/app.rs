//! Application entry point and dispatch.

use std::time::Instant;

use anyhow::Result;

use seqgen_cli::completion::generate_completion;
use seqgen_cli::output::{terms_to_json, write_terms};
use seqgen_cli::presenter::TermPresenter;
use seqgen_core::cancel::CancellationToken;
use seqgen_core::registry::{DefaultFactory, GeneratorFactory};
use seqgen_core::series::collect_range;

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let factory = DefaultFactory::new();

    // Handle sequence listing
    if config.list {
        for name in factory.available() {
            println!("{name}");
        }
        return Ok(());
    }

    run_cli(config, &factory)
}

fn run_cli(config: &AppConfig, factory: &dyn GeneratorFactory) -> Result<()> {
    let mut generator = factory.get(&config.sequence)?;
    let cancel = CancellationToken::new();

    // Set up Ctrl+C handler
    let cancel_clone = cancel.clone();
    ctrlc_handler(cancel_clone);

    let started = Instant::now();
    let terms = collect_range(generator.as_mut(), config.start, config.n, &cancel)?;
    let duration = started.elapsed();

    if config.json {
        println!("{}", terms_to_json(&terms)?);
    } else {
        let presenter = TermPresenter::new(config.verbose, config.quiet);
        presenter.present_terms(generator.name(), &terms, duration, config.details);
    }

    // Write to file if requested
    if let Some(ref path) = config.output {
        write_terms(path, &terms)?;
    }

    Ok(())
}

fn ctrlc_handler(cancel: CancellationToken) {
    ctrlc::set_handler(move || {
        cancel.cancel();
    })
    .expect("Error setting Ctrl+C handler");
}
