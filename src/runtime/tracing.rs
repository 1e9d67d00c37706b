//! # Observability & Tracing
//!
//! Structured logging for the mapper and the console driver.
//!
//! Log output goes to **stderr**. Stdout carries the report and nothing else,
//! so piping the binary's output stays clean regardless of the log level.
//!
//! ## What Gets Traced
//!
//! - **Driver**: start and finish (`info`)
//! - **Report**: user id and address count before writing (`debug`)
//! - **Mapping**: one event per user record converted (`trace`)
//!
//! ## Usage Examples
//!
//! ```bash
//! # Silent apart from errors (default)
//! cargo run
//!
//! # Driver lifecycle
//! RUST_LOG=info cargo run
//!
//! # Every mapping call
//! RUST_LOG=record_mapper=trace cargo run
//! ```

/// Initializes the tracing/logging infrastructure for the application.
///
/// Set `RUST_LOG` to control log verbosity:
/// - `RUST_LOG=info` - Show info, warn, and error messages
/// - `RUST_LOG=debug` - Show debug and above
/// - `RUST_LOG=trace` - Show all messages
///
/// Must be called at most once per process.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
