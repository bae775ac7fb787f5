use async_trait::async_trait;
use uuid::Uuid;

use crate::models::price_history::PriceHistoryModel;
use crate::repository::pagination::{Page, PageRequest};

/// Repository trait for reading the cost history, newest entry first
///
/// # Example
/// ```ignore
/// use pricing_core_db::repository::pagination::PageRequest;
///
/// let page = history_repo.load_history(PageRequest::new(20, 0)).await?;
/// println!("Page {} of {}", page.page_number(), page.total_pages());
/// ```
#[async_trait]
pub trait LoadHistory: Send + Sync {
    /// Load a page of history entries across all products
    async fn load_history(
        &self,
        page: PageRequest,
    ) -> Result<Page<PriceHistoryModel>, Box<dyn std::error::Error + Send + Sync>>;

    /// Load a page of history entries of one product
    async fn load_product_history(
        &self,
        product_id: Uuid,
        page: PageRequest,
    ) -> Result<Page<PriceHistoryModel>, Box<dyn std::error::Error + Send + Sync>>;
}
