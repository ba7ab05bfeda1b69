//! Logging initialization

/// Initialize logging based on debug flag
///
/// Logs go to stderr so the DOT/JSON output on stdout stays clean enough to
/// pipe straight into a renderer.
pub fn init_logging(debug: bool) {
    if !debug {
        // Silent operation by default
        return;
    }

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_target(true)
        .init();
}
