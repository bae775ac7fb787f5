pub mod catalog_service;
pub mod price_list_service;
pub mod prospect_service;

pub use catalog_service::CatalogService;
pub use price_list_service::PriceListService;
pub use prospect_service::{ProspectClassification, ProspectService};

use pricing_core_api::ApiError;
use std::error::Error;

/// Repository failures are not the caller's fault; surface them as internal errors.
pub(crate) fn internal_error(err: Box<dyn Error + Send + Sync>) -> ApiError {
    ApiError::InternalError(err.to_string())
}
