use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

/// Largest base cost accepted. Any segment markup applied to it stays far
/// inside `Decimal` range.
pub const MAX_COST: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Reasons a new base cost is refused before any state is touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CostError {
    #[error("cost is empty")]
    Empty,

    #[error("cost is not a number: {0:?}")]
    NotNumeric(String),

    #[error("cost is not a finite number")]
    NotFinite,

    #[error("cost must not be negative, got {0}")]
    Negative(Decimal),

    #[error("cost must not exceed 1000000000, got {0}")]
    TooLarge(Decimal),
}

/// A base cost as handed in by an administrator, before validation.
#[derive(Debug, Clone, PartialEq)]
pub enum CostInput {
    Text(String),
    Number(f64),
    Decimal(Decimal),
}

impl CostInput {
    /// Validate the input into a non-negative cost.
    pub fn into_cost(self) -> Result<Decimal, CostError> {
        match self {
            CostInput::Text(text) => parse_cost(&text),
            CostInput::Number(value) => cost_from_f64(value),
            CostInput::Decimal(value) => validate_cost(value),
        }
    }
}

impl From<&str> for CostInput {
    fn from(value: &str) -> Self {
        CostInput::Text(value.to_string())
    }
}

impl From<String> for CostInput {
    fn from(value: String) -> Self {
        CostInput::Text(value)
    }
}

impl From<f64> for CostInput {
    fn from(value: f64) -> Self {
        CostInput::Number(value)
    }
}

impl From<Decimal> for CostInput {
    fn from(value: Decimal) -> Self {
        CostInput::Decimal(value)
    }
}

/// Parse a textual cost. Accepts `.` or a single `,` as decimal separator.
pub fn parse_cost(input: &str) -> Result<Decimal, CostError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CostError::Empty);
    }

    let normalized = if trimmed.matches(',').count() == 1 && !trimmed.contains('.') {
        trimmed.replace(',', ".")
    } else {
        trimmed.to_string()
    };

    let value = Decimal::from_str(&normalized)
        .map_err(|_| CostError::NotNumeric(input.to_string()))?;
    validate_cost(value)
}

pub fn cost_from_f64(value: f64) -> Result<Decimal, CostError> {
    if !value.is_finite() {
        return Err(CostError::NotFinite);
    }
    let value = Decimal::try_from(value).map_err(|_| CostError::NotNumeric(value.to_string()))?;
    validate_cost(value)
}

pub fn validate_cost(value: Decimal) -> Result<Decimal, CostError> {
    if value < Decimal::ZERO {
        return Err(CostError::Negative(value));
    }
    if value > MAX_COST {
        return Err(CostError::TooLarge(value));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cost_accepts_both_separators() {
        assert_eq!(parse_cost("12.50"), Ok(Decimal::new(1250, 2)));
        assert_eq!(parse_cost(" 2,89 "), Ok(Decimal::new(289, 2)));
        assert_eq!(parse_cost("0"), Ok(Decimal::ZERO));
    }

    #[test]
    fn test_parse_cost_rejections() {
        assert_eq!(parse_cost(""), Err(CostError::Empty));
        assert_eq!(parse_cost("   "), Err(CostError::Empty));
        assert_eq!(parse_cost("abc"), Err(CostError::NotNumeric("abc".to_string())));
        assert_eq!(parse_cost("1,2,3"), Err(CostError::NotNumeric("1,2,3".to_string())));
        assert_eq!(parse_cost("-1.5"), Err(CostError::Negative(Decimal::new(-15, 1))));
    }

    #[test]
    fn test_cost_from_f64() {
        assert_eq!(cost_from_f64(10.0), Ok(Decimal::from(10)));
        assert_eq!(cost_from_f64(f64::NAN), Err(CostError::NotFinite));
        assert_eq!(cost_from_f64(f64::INFINITY), Err(CostError::NotFinite));
        assert!(matches!(cost_from_f64(-0.01), Err(CostError::Negative(_))));
    }

    #[test]
    fn test_cost_upper_bound() {
        assert_eq!(validate_cost(MAX_COST), Ok(MAX_COST));
        assert_eq!(
            parse_cost("79228162514264337593543950335"),
            Err(CostError::TooLarge(Decimal::MAX))
        );
        assert!(matches!(cost_from_f64(1e20), Err(CostError::TooLarge(_))));
        // The largest markup on the largest cost must not overflow.
        assert!(MAX_COST.checked_mul(Decimal::new(140, 2)).is_some());
    }

    #[test]
    fn test_cost_input_conversions() {
        assert_eq!(CostInput::from("7,90").into_cost(), Ok(Decimal::new(790, 2)));
        assert_eq!(CostInput::from(Decimal::new(5, 0)).into_cost(), Ok(Decimal::from(5)));
        assert_eq!(
            CostInput::from(Decimal::new(-5, 0)).into_cost(),
            Err(CostError::Negative(Decimal::from(-5)))
        );
    }
}
