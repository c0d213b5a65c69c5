use crate::config::{CalcConfig, OutputFormat};
use crate::core::operation::Evaluation;
use crate::error::Result;

/// Format `value` with a fixed number of decimal places, or in its shortest
/// round-trip form when `precision` is `None`.
pub fn format_number(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(places) => format!("{value:.places$}"),
        None => value.to_string(),
    }
}

fn round_to(value: f64, places: usize) -> f64 {
    format_number(value, Some(places)).parse().unwrap_or(value)
}

/// Render an evaluation for display according to `config`.
pub fn render(evaluation: &Evaluation, config: &CalcConfig) -> Result<String> {
    match config.format {
        OutputFormat::Text => Ok(format_number(evaluation.result, config.precision)),
        OutputFormat::Json => {
            let mut shown = evaluation.clone();
            if let Some(places) = config.precision {
                shown.result = round_to(shown.result, places);
            }
            Ok(serde_json::to_string(&shown)?)
        }
    }
}
