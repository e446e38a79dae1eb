use clap::Parser;
use pin_lerna_versions::utils::{logger, validation::Validate};
use pin_lerna_versions::{CliConfig, LocalStorage, PinEngine};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!(target: "pin::options", "Options: {:?}", cli);

    let config = match cli.resolve().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(e.exit_code());
        }
    };

    let engine = PinEngine::new(config.lister(), LocalStorage::new(), config);

    // Leaving the select drops the run, which kills a listing still in progress.
    let outcome = tokio::select! {
        result = engine.run() => Some(result),
        Ok(()) = tokio::signal::ctrl_c() => None,
    };

    match outcome {
        Some(Ok(summary)) => {
            if summary.would_write > 0 {
                eprintln!("{} manifest(s) are out of date", summary.would_write);
                std::process::exit(1);
            }
        }
        Some(Err(e)) => {
            tracing::debug!("Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("{}", e);
            std::process::exit(e.exit_code());
        }
        None => {
            eprintln!("Interrupted");
            std::process::exit(130);
        }
    }
}
