use async_trait::async_trait;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for loading a single entity by its ID
///
/// # Type Parameters
/// * `T` - The entity type that must implement Identifiable trait
#[async_trait]
pub trait Load<T: Identifiable>: Send + Sync {
    /// Load an entity by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(T))` - The found entity
    /// * `Ok(None)` - If the entity does not exist
    /// * `Err` - An error if the entity could not be read
    async fn load(&self, id: Uuid) -> Result<Option<T>, Box<dyn std::error::Error + Send + Sync>>;
}
