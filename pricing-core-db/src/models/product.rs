use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use pricing_core_api::REFERENCE_MARGIN;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::auditable::Auditable;
use crate::models::identifiable::Identifiable;
use crate::utils::hash_as_i64;

/// Represents a catalog product.
///
/// `list_price` is the price as supplied, which already carries the 30%
/// reference margin. `base_cost` is derived from it once at creation and is
/// the only field that changes afterwards; every change is recorded as a
/// [`PriceHistoryModel`](crate::models::price_history::PriceHistoryModel).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductModel {
    pub id: Uuid,
    pub code: HeaplessString<16>,
    pub name: HeaplessString<100>,
    pub category: HeaplessString<100>,
    pub list_price: Decimal,
    pub base_cost: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// Reference to the newest history entry (None until the first cost change)
    pub last_history_entry_id: Option<Uuid>,

    /// Hash of the entity with hash field set to 0
    /// - 0: for entities not yet hashed
    /// - Non-zero: computed hash, changes with every cost mutation
    pub hash: i64,
}

impl ProductModel {
    /// Build a product from its supplied list price.
    ///
    /// The base cost is `list_price / 1.30` at full decimal precision.
    pub fn from_list_price(
        code: &str,
        name: &str,
        category: &str,
        list_price: Decimal,
        now: DateTime<Utc>,
    ) -> Result<Self, String> {
        let mut product = ProductModel {
            id: Uuid::new_v4(),
            code: HeaplessString::try_from(code)
                .map_err(|_| format!("Product code '{code}' is too long (max 16 chars)"))?,
            name: HeaplessString::try_from(name)
                .map_err(|_| format!("Product name '{name}' is too long (max 100 chars)"))?,
            category: HeaplessString::try_from(category)
                .map_err(|_| format!("Product category '{category}' is too long (max 100 chars)"))?,
            list_price,
            base_cost: base_cost_from_list_price(list_price),
            created_at: now,
            updated_at: now,
            last_history_entry_id: None,
            hash: 0,
        };
        product.hash = product.compute_hash()?;
        Ok(product)
    }

    /// Hash of this record computed with `hash` set to 0.
    pub fn compute_hash(&self) -> Result<i64, String> {
        let mut entity_for_hashing = self.clone();
        entity_for_hashing.hash = 0;
        hash_as_i64(&entity_for_hashing)
    }
}

/// Strip the reference margin from a supplied list price.
pub fn base_cost_from_list_price(list_price: Decimal) -> Decimal {
    list_price / (Decimal::ONE + REFERENCE_MARGIN)
}

impl Identifiable for ProductModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Auditable for ProductModel {
    fn get_last_history_entry_id(&self) -> Option<Uuid> {
        self.last_history_entry_id
    }

    fn get_hash(&self) -> i64 {
        self.hash
    }
}
