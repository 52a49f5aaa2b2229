/// Errors raised when a sample cannot support a statistical test.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum StatsError {
    #[display("sample has {len} value(s), at least {min_len} required")]
    TooFewValues { len: usize, min_len: usize },
    #[display("sample has zero variance")]
    ZeroVariance,
    #[display("sample contains a non-finite value")]
    NonFiniteValue,
    #[display("invalid distribution parameters: {reason}")]
    Distribution { reason: String },
}

impl StatsError {
    pub(crate) fn distribution<E>(err: E) -> Self
    where
        E: std::fmt::Display,
    {
        Self::Distribution {
            reason: err.to_string(),
        }
    }
}

/// Checks that every value is finite and that there are at least `min_len` of them.
pub(crate) fn check_values(values: &[f64], min_len: usize) -> Result<(), StatsError> {
    if values.len() < min_len {
        return Err(StatsError::TooFewValues {
            len: values.len(),
            min_len,
        });
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(StatsError::NonFiniteValue);
    }
    Ok(())
}
