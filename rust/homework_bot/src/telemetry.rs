use tracing_subscriber::EnvFilter;

/// Stdout logger: timestamp, level, target:line, message. `RUST_LOG` overrides the default filter.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,homework_bot=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_line_number(true)
        .init();
}
