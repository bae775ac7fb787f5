use async_trait::async_trait;
use chrono::Utc;
use pricing_core_db::models::price_history::{apply_base_cost, CostUpdate};
use pricing_core_db::repository::update_base_cost::UpdateBaseCost;
use rust_decimal::Decimal;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::ProductRepositoryImpl;
use crate::repository::catalog_state::StoreError;

impl ProductRepositoryImpl {
    pub(super) fn update_base_cost_impl(
        &self,
        product_id: Uuid,
        new_cost: Decimal,
    ) -> Result<Option<CostUpdate>, Box<dyn Error + Send + Sync>> {
        self.state.write(|tables| -> Result<Option<CostUpdate>, Box<dyn Error + Send + Sync>> {
            let Some(current) = tables.product(product_id) else {
                return Ok(None);
            };

            let update = apply_base_cost(current, new_cost, Utc::now()).map_err(StoreError::Hash)?;

            if let Some(stored) = tables.product_mut(product_id) {
                *stored = update.product.clone();
            }
            tables.history.push(update.history_entry.clone());

            tracing::debug!(
                product_id = %product_id,
                history_entry_id = %update.history_entry.id,
                "stored base cost change"
            );
            Ok(Some(update))
        })
    }
}

#[async_trait]
impl UpdateBaseCost for ProductRepositoryImpl {
    async fn update_base_cost(
        &self,
        product_id: Uuid,
        new_cost: Decimal,
    ) -> Result<Option<CostUpdate>, Box<dyn Error + Send + Sync>> {
        self.update_base_cost_impl(product_id, new_cost)
    }
}
