use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::ApiResult;

/// Name and address of a business an agent wants to register as a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ProspectRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,
}

impl ProspectRequest {
    /// Build a request with surrounding whitespace removed from both fields.
    pub fn new(name: &str, address: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            address: address.trim().to_string(),
        }
    }

    /// Build and validate a request; blank fields are a validation error.
    pub fn validated(name: &str, address: &str) -> ApiResult<Self> {
        let request = Self::new(name, address);
        request.validate()?;
        Ok(request)
    }
}
