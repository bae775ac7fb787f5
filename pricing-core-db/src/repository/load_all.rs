use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for listing every entity of a kind
///
/// Ordering is defined by the implementing repository (catalog order for
/// products, newest first for customers).
#[async_trait]
pub trait LoadAll<T: Identifiable>: Send + Sync {
    async fn load_all(&self) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
