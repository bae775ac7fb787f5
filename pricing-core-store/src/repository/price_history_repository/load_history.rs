use async_trait::async_trait;
use pricing_core_db::models::PriceHistoryModel;
use pricing_core_db::repository::load_history::LoadHistory;
use pricing_core_db::repository::pagination::{Page, PageRequest};
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::PriceHistoryRepositoryImpl;

#[async_trait]
impl LoadHistory for PriceHistoryRepositoryImpl {
    async fn load_history(
        &self,
        page: PageRequest,
    ) -> Result<Page<PriceHistoryModel>, Box<dyn Error + Send + Sync>> {
        let newest_first: Vec<PriceHistoryModel> =
            self.state.read(|tables| tables.history.iter().rev().cloned().collect());
        Ok(Page::slice(newest_first, page))
    }

    async fn load_product_history(
        &self,
        product_id: Uuid,
        page: PageRequest,
    ) -> Result<Page<PriceHistoryModel>, Box<dyn Error + Send + Sync>> {
        let newest_first: Vec<PriceHistoryModel> = self.state.read(|tables| {
            tables
                .history
                .iter()
                .rev()
                .filter(|entry| entry.product_id == product_id)
                .cloned()
                .collect()
        });
        Ok(Page::slice(newest_first, page))
    }
}
