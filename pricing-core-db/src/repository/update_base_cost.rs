use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::price_history::CostUpdate;

/// Repository trait for the only mutation a product supports
///
/// The new cost and its history entry are stored as one unit: a reader sees
/// either both or neither. Concurrent calls against the same product are
/// serialized, and each call records the cost it actually replaced.
///
/// `new_cost` is expected to be validated already (finite, non-negative).
/// The change time is stamped by the repository while it holds the product,
/// so history order and timestamps agree.
#[async_trait]
pub trait UpdateBaseCost: Send + Sync {
    /// # Returns
    /// * `Ok(Some(CostUpdate))` - The updated product and its new history entry
    /// * `Ok(None)` - If the product does not exist
    /// * `Err` - If the update could not be applied
    async fn update_base_cost(
        &self,
        product_id: Uuid,
        new_cost: Decimal,
    ) -> Result<Option<CostUpdate>, Box<dyn std::error::Error + Send + Sync>>;
}
