use chrono::{DateTime, Utc};
use pricing_core_api::CustomerType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// A registered customer.
///
/// The segment is decided once, when the customer is registered, and is never
/// recomputed. The raw directory category is kept for reference only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerModel {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    /// Identifier of the business in the external directory, when it was found
    pub place_id: Option<String>,
    /// Category label as returned by the directory
    pub directory_category: Option<String>,
    pub customer_type: CustomerType,
    pub registered_at: DateTime<Utc>,
}

impl Identifiable for CustomerModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
