use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the stderr logger used by the CLI.
///
/// `RUST_LOG` takes precedence. Otherwise manifest updates are shown at
/// info and `--verbose` adds the debug trail (options, listing, no-ops).
pub fn init_cli_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("pin_lerna_versions=debug,pin=debug,info"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("pin_lerna_versions=info,pin=info,warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .without_time()
                .compact(),
        )
        .init();
}

/// Same filtering as [`init_cli_logger`], emitted as JSON lines for CI log collectors.
pub fn init_json_logger(verbose: bool) {
    let default = if verbose {
        "pin_lerna_versions=debug,pin=debug,info"
    } else {
        "pin_lerna_versions=info,pin=info,warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .json(),
        )
        .init();
}
