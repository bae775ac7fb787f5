use pricing_core_db::models::price_history::verify_history_chain;
use pricing_core_db::models::PriceHistoryModel;
use uuid::Uuid;

use super::repo_impl::PriceHistoryRepositoryImpl;

impl PriceHistoryRepositoryImpl {
    /// Check the hash chain of one product against its current state.
    ///
    /// Returns `Ok(None)` when the product does not exist.
    pub fn verify_chain(&self, product_id: Uuid) -> Result<Option<()>, String> {
        self.state.read(|tables| -> Result<Option<()>, String> {
            let Some(product) = tables.product(product_id) else {
                return Ok(None);
            };
            let entries: Vec<PriceHistoryModel> = tables
                .history
                .iter()
                .filter(|entry| entry.product_id == product_id)
                .cloned()
                .collect();
            verify_history_chain(product, &entries).map(Some)
        })
    }
}
