use thiserror::Error;

/// Why a raw amount string cannot be executed. Never shown to the user;
/// the execute control is disabled instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("'{0}' is not a finite amount")]
    NotFinite(String),
}

/// Parse user-typed amount text. Surrounding whitespace is ignored; `inf`
/// and `NaN` parse as floats but are rejected.
pub fn parse_amount(raw: &str) -> Result<f64, AmountError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AmountError::Empty);
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| AmountError::NotANumber(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(AmountError::NotFinite(trimmed.to_string()));
    }
    Ok(value)
}
