use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for creating multiple entities in a batch
///
/// Either every item is stored or none is.
///
/// # Example
/// ```ignore
/// let saved = customer_repo.create_batch(vec![customer]).await?;
/// assert_eq!(saved.len(), 1);
/// ```
#[async_trait]
pub trait CreateBatch<T: Identifiable>: Send + Sync {
    /// Create multiple items
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - The stored entities
    /// * `Err` - If any item could not be stored (for example a duplicate ID)
    async fn create_batch(
        &self,
        items: Vec<T>,
    ) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
