//! Prospect onboarding.
//!
//! A prospect's name and address go to the business directory, the returned
//! category label is classified into a segment and the customer is stored.
//! The directory is best effort: when it fails or knows nothing, the customer
//! is still registered with the supplied name and address and the `Base`
//! segment.

use chrono::{DateTime, Utc};
use pricing_core_api::{
    classify_with_match, ApiResult, CustomerType, DirectoryLookup, LookupOutcome, ProspectRequest,
};
use pricing_core_db::models::CustomerModel;
use pricing_core_db::repository::create_batch::CreateBatch;
use pricing_core_db::repository::load_all::LoadAll;
use std::sync::Arc;
use uuid::Uuid;

use super::internal_error;
use crate::repository::CustomerRepositoryImpl;

/// Everything needed to register a prospect as a customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProspectClassification {
    pub customer_type: CustomerType,
    pub resolved_name: String,
    pub resolved_address: String,
    pub place_id: Option<String>,
    pub raw_category_label: Option<String>,
}

impl ProspectClassification {
    pub fn into_customer(self, registered_at: DateTime<Utc>) -> CustomerModel {
        CustomerModel {
            id: Uuid::new_v4(),
            name: self.resolved_name,
            address: self.resolved_address,
            place_id: self.place_id,
            directory_category: self.raw_category_label,
            customer_type: self.customer_type,
            registered_at,
        }
    }
}

pub struct ProspectService {
    directory: Arc<dyn DirectoryLookup>,
    customer_repository: Arc<CustomerRepositoryImpl>,
}

impl ProspectService {
    pub fn new(
        directory: Arc<dyn DirectoryLookup>,
        customer_repository: Arc<CustomerRepositoryImpl>,
    ) -> Self {
        Self {
            directory,
            customer_repository,
        }
    }

    /// Look the business up and classify it. Never fails.
    pub async fn classify_prospect(&self, name: &str, address: &str) -> ProspectClassification {
        let result = self.directory.lookup(name, address).await;
        if let Err(err) = &result {
            tracing::warn!(error = %err, name, "directory lookup failed, using supplied data");
        }

        let place = match LookupOutcome::from_result(result) {
            LookupOutcome::Found(place) => place,
            LookupOutcome::NoData => Default::default(),
        };

        let classification = classify_with_match(place.visible_category.as_deref());
        tracing::debug!(
            name,
            category = place.visible_category.as_deref().unwrap_or(""),
            keyword = classification.matched_keyword.unwrap_or(""),
            customer_type = %classification.customer_type,
            "classified prospect"
        );

        ProspectClassification {
            customer_type: classification.customer_type,
            resolved_name: place.name.unwrap_or_else(|| name.to_string()),
            resolved_address: place.formatted_address.unwrap_or_else(|| address.to_string()),
            place_id: place.place_id,
            raw_category_label: place.visible_category,
        }
    }

    /// Store a customer exactly as given.
    pub async fn add_customer(&self, customer: CustomerModel) -> ApiResult<CustomerModel> {
        let mut saved = self
            .customer_repository
            .create_batch(vec![customer])
            .await
            .map_err(internal_error)?;
        let customer = saved.remove(0);

        tracing::info!(
            customer_id = %customer.id,
            customer_type = %customer.customer_type,
            "registered customer"
        );
        Ok(customer)
    }

    /// Validate, classify and store a prospect.
    ///
    /// Blank name or address is rejected before the directory is called. The
    /// customer is only stored once the lookup has finished, so dropping the
    /// returned future early leaves nothing behind.
    pub async fn register_prospect(&self, name: &str, address: &str) -> ApiResult<CustomerModel> {
        let request = ProspectRequest::validated(name, address)?;

        let classification = self
            .classify_prospect(&request.name, &request.address)
            .await;
        self.add_customer(classification.into_customer(Utc::now()))
            .await
    }

    /// Registered customers, newest first.
    pub async fn list_customers(&self) -> ApiResult<Vec<CustomerModel>> {
        self.customer_repository
            .load_all()
            .await
            .map_err(internal_error)
    }
}
