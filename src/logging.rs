use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber for a binary.
///
/// Output goes to stderr so the MCP server's stdout transport stays clean.
/// Verbosity follows `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A second initialisation (e.g. from an embedding test) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
