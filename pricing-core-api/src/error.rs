use thiserror::Error;

use crate::domain::cost::CostError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    ValidationError(String),
    
    #[error("Not found: {0}")]
    NotFound(String),
    
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<CostError> for ApiError {
    fn from(err: CostError) -> Self {
        ApiError::ValidationError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::ValidationError(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(err: &ApiError) -> &'static str {
        match err {
            ApiError::ValidationError(_) => "validation",
            ApiError::NotFound(_) => "not_found",
            ApiError::InternalError(_) => "internal",
        }
    }

    #[test]
    fn test_cost_errors_are_validation_errors() {
        for err in [
            CostError::Empty,
            CostError::Negative(rust_decimal::Decimal::NEGATIVE_ONE),
            CostError::TooLarge(rust_decimal::Decimal::MAX),
        ] {
            assert_eq!(kind(&ApiError::from(err)), "validation");
        }
        assert_eq!(kind(&ApiError::NotFound("Product".to_string())), "not_found");
    }
}
