use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::core::operation::Evaluation;
use crate::error::CalcError;

/// Filter directives used when `RUST_LOG` is unset.
fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "calculator=debug,info"
    } else {
        "calculator=info,warn,error"
    }
}

/// Initialize structured logging on stderr; `RUST_LOG` overrides the verbosity default.
pub fn init_logging(verbose: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    if verbose {
        tracing::info!("Verbose logging enabled");
    }

    Ok(())
}

/// Log a completed evaluation
pub fn log_evaluation(evaluation: &Evaluation) {
    tracing::debug!(
        operation = evaluation.operation.name(),
        operands = ?evaluation.operands,
        result = evaluation.result,
        "Evaluation completed"
    );
}

/// Log input rejected by an operation
pub fn log_rejected_input(operation: &str, error: &CalcError) {
    tracing::debug!(
        operation = operation,
        kind = ?error.kind(),
        error = %error,
        "Input rejected"
    );
}
