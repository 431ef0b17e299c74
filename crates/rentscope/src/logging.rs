use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging to stderr.
///
/// The log level can be controlled via the `level` parameter or the
/// `RUST_LOG` environment variable. Results go to stdout, diagnostics to
/// stderr, so output stays pipeable.
pub fn init_logging(level: &str) -> color_eyre::Result<()> {
    let default_filter = format!("rentscope={level},rentscope_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false),
        )
        .init();

    Ok(())
}
