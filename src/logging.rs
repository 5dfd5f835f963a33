/// Initializes structured logging for the CLI.
///
/// Verbosity is controlled through `RUST_LOG` (e.g. `RUST_LOG=pizzeria=debug`).
/// Logs are written to stderr so stdout carries only the order narrative.
#[cfg(feature = "pizzeria-cli")]
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
