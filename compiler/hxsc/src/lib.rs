//! HXS command-line runner.
//!
//! Wires the lexer, the reduction engine, logging and configuration
//! together for the `hxs` binary. Embedders should depend on `hxs_eval`
//! directly; this crate only adds what a terminal session needs.
//!
//! # Tracing
//!
//! - `RUST_LOG=hxs_eval=debug`: program runs and function calls.
//! - `RUST_LOG=hxs_eval=trace`: every rule and operator reduction (very
//!   verbose).

mod config;
mod error;

use std::path::Path;
use std::sync::Once;

use hxs_eval::{Interpreter, SharedPrintHandler, Value};

pub use config::{Config, MAX_DEPTH_ENV};
pub use error::CliError;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// Build an interpreter for `source_name` under `config`.
pub fn interpreter(
    config: &Config,
    source_name: &str,
    print_handler: SharedPrintHandler,
) -> Interpreter {
    Interpreter::builder()
        .source_name(source_name)
        .max_depth(config.max_depth)
        .print_handler(print_handler)
        .build()
}

/// Run a script file. Returns the value of its last statement.
pub fn run_file(
    path: &Path,
    config: &Config,
    print_handler: SharedPrintHandler,
) -> Result<Option<Value>, CliError> {
    let source = read_file(path)?;
    let name = path.display().to_string();
    tracing::debug!(path = %name, bytes = source.len(), "running file");
    let mut interp = interpreter(config, &name, print_handler);
    Ok(interp.eval_source(&source)?)
}

/// Evaluate source text given on the command line.
pub fn eval_code(
    code: &str,
    config: &Config,
    print_handler: SharedPrintHandler,
) -> Result<Option<Value>, CliError> {
    let mut interp = interpreter(config, "<eval>", print_handler);
    Ok(interp.eval_source(code)?)
}

fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.display().to_string(),
        source,
    })
}
