use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::auditable::Auditable;
use crate::models::identifiable::Identifiable;
use crate::models::product::ProductModel;
use crate::utils::hash_as_i64;

/// One accepted base-cost change.
///
/// Entries are append-only. `antecedent_hash` and `product_hash` are the
/// product hashes before and after the change, so the entries of a product
/// form a chain that ends at the product's current hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistoryModel {
    pub id: Uuid,
    pub product_id: Uuid,
    /// Product name at the time of the change
    pub product_name: HeaplessString<100>,
    pub previous_cost: Decimal,
    pub new_cost: Decimal,
    pub changed_at: DateTime<Utc>,
    pub antecedent_hash: i64,
    pub product_hash: i64,
    pub hash: i64,
}

impl PriceHistoryModel {
    /// Hash of this entry computed with `hash` set to 0.
    pub fn compute_hash(&self) -> Result<i64, String> {
        let mut entry_for_hashing = self.clone();
        entry_for_hashing.hash = 0;
        hash_as_i64(&entry_for_hashing)
    }
}

impl Identifiable for PriceHistoryModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

/// Product and history entry produced together by one cost mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct CostUpdate {
    pub product: ProductModel,
    pub history_entry: PriceHistoryModel,
}

/// Apply a new base cost to `product` and build the matching history entry.
///
/// The product is returned with its cost, update time, hash and history
/// reference set. Nothing is stored here; the caller persists both records
/// as one unit.
pub fn apply_base_cost(
    product: &ProductModel,
    new_cost: Decimal,
    changed_at: DateTime<Utc>,
) -> Result<CostUpdate, String> {
    let entry_id = Uuid::new_v4();

    let mut updated = product.clone();
    updated.base_cost = new_cost;
    updated.updated_at = changed_at;
    updated.last_history_entry_id = Some(entry_id);
    updated.hash = 0;
    updated.hash = updated.compute_hash()?;

    let mut history_entry = PriceHistoryModel {
        id: entry_id,
        product_id: product.id,
        product_name: product.name.clone(),
        previous_cost: product.base_cost,
        new_cost,
        changed_at,
        antecedent_hash: product.hash,
        product_hash: updated.hash,
        hash: 0,
    };
    history_entry.hash = history_entry.compute_hash()?;

    Ok(CostUpdate {
        product: updated,
        history_entry,
    })
}

/// Check the history chain of one product.
///
/// `entries` must be the product's entries oldest first. Fails with a
/// description of the first broken link.
pub fn verify_history_chain(
    product: &impl Auditable,
    entries: &[PriceHistoryModel],
) -> Result<(), String> {
    let product_id = product.get_id();
    let mut expected_antecedent: Option<i64> = None;

    for entry in entries {
        if entry.product_id != product_id {
            return Err(format!("History entry {} belongs to another product", entry.id));
        }
        if entry.compute_hash()? != entry.hash {
            return Err(format!("History entry {} hash does not match its content", entry.id));
        }
        if let Some(expected) = expected_antecedent {
            if entry.antecedent_hash != expected {
                return Err(format!("History entry {} does not follow its predecessor", entry.id));
            }
        }
        expected_antecedent = Some(entry.product_hash);
    }

    if let Some(last) = entries.last() {
        if last.product_hash != product.get_hash()
            || product.get_last_history_entry_id() != Some(last.id)
        {
            return Err(format!("Product {product_id} does not match its newest history entry"));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> ProductModel {
        ProductModel::from_list_price(
            "68003",
            "PECHUGA DE POLLO FRESCA ENTERA",
            "POLLO",
            Decimal::new(579, 2),
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn test_apply_base_cost() {
        let original = product();
        let changed_at = Utc::now();
        let update = apply_base_cost(&original, Decimal::new(450, 2), changed_at).unwrap();

        assert_eq!(update.product.base_cost, Decimal::new(450, 2));
        assert_eq!(update.product.updated_at, changed_at);
        assert_eq!(update.product.created_at, original.created_at);
        assert_eq!(update.product.last_history_entry_id, Some(update.history_entry.id));
        assert_eq!(update.product.hash, update.product.compute_hash().unwrap());

        let entry = &update.history_entry;
        assert_eq!(entry.product_id, original.id);
        assert_eq!(entry.product_name, original.name);
        assert_eq!(entry.previous_cost, original.base_cost);
        assert_eq!(entry.new_cost, Decimal::new(450, 2));
        assert_eq!(entry.antecedent_hash, original.hash);
        assert_eq!(entry.product_hash, update.product.hash);
    }

    #[test]
    fn test_verify_chain() {
        let original = product();
        let first = apply_base_cost(&original, Decimal::new(400, 2), Utc::now()).unwrap();
        let second = apply_base_cost(&first.product, Decimal::new(420, 2), Utc::now()).unwrap();
        let entries = vec![first.history_entry.clone(), second.history_entry.clone()];

        assert!(verify_history_chain(&second.product, &entries).is_ok());
        assert!(verify_history_chain(&original, &[]).is_ok());

        // Out of order
        let reversed = vec![second.history_entry.clone(), first.history_entry.clone()];
        assert!(verify_history_chain(&second.product, &reversed).is_err());

        // Tampered entry
        let mut tampered = entries.clone();
        tampered[0].new_cost = Decimal::new(1, 0);
        assert!(verify_history_chain(&second.product, &tampered).is_err());

        // Product no longer at the head of the chain
        assert!(verify_history_chain(&first.product, &entries).is_err());
    }
}
