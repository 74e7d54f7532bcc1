use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber used by the binaries.
///
/// Stdout carries program output only. The filter defaults to `warn` and can
/// be raised with `RUST_LOG`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
