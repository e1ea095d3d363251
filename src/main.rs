//! Evaluates `cos(x) / x + 2` at x = 3 and x = 1.5 and prints both values.
//!
//! Diagnostics go to stderr and are controlled by `RUST_LOG`; stdout carries
//! only the two values.

use expr_templates::{Report, ReportError, cos, var};
use std::io;
use std::process;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() {
    setup_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ReportError> {
    let x = var::<f64>();
    let expr = cos(x) / x + 2.0;
    tracing::info!(%expr, "built expression");

    let stdout = io::stdout();
    Report::default().write_to(&expr, &mut stdout.lock())?;
    Ok(())
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
