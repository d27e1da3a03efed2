/// Initializes the tracing/logging infrastructure for the application.
///
/// Log lines go to **stderr**; stdout carries the customer-facing console.
///
/// # Environment Variables
///
/// Set `RUST_LOG` to control log verbosity:
/// - `RUST_LOG=info` - Session start/end and every placed order
/// - `RUST_LOG=warn` - Rejected menu choices and item selections
/// - `RUST_LOG=debug` - Every dispatched command
/// - `RUST_LOG=coffee_shop=debug` - Debug only for this crate
///
/// With `RUST_LOG` unset only errors are shown, so the console stays clean.
///
/// # Example
///
/// ```ignore
/// setup_tracing();
/// tracing::info!("Application started");
/// ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
