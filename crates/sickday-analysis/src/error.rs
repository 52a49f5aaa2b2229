use sickday_stats::StatsError;

/// Errors raised while grouping records or running the hypothesis engine.
///
/// Errors are propagated unchanged; the engine never retries or falls back to a
/// different test family.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum AnalysisError {
    #[display("unknown grouping mode '{token}', expected 'sex' or 'age'")]
    InvalidGroupingMode { token: String },
    #[display("missing required parameter '{parameter}'")]
    MissingParameter { parameter: &'static str },
    #[display("sample '{label}' is insufficient for a normality test: {source}")]
    InsufficientSample { label: String, source: StatsError },
    #[display("sample '{label}' is degenerate: {source}")]
    DegenerateSample { label: String, source: StatsError },
}
