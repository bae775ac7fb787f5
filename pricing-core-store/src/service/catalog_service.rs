//! Catalog administration: base cost changes and their audit history.

use pricing_core_api::{ApiError, ApiResult, CostInput};
use pricing_core_db::models::{PriceHistoryModel, ProductModel};
use pricing_core_db::pricing;
use pricing_core_db::repository::load::Load;
use pricing_core_db::repository::load_all::LoadAll;
use pricing_core_db::repository::load_history::LoadHistory;
use pricing_core_db::repository::pagination::{Page, PageRequest};
use pricing_core_db::repository::update_base_cost::UpdateBaseCost;
use std::sync::Arc;
use uuid::Uuid;

use super::internal_error;
use crate::repository::{PriceHistoryRepositoryImpl, ProductRepositoryImpl};

pub struct CatalogService {
    product_repository: Arc<ProductRepositoryImpl>,
    price_history_repository: Arc<PriceHistoryRepositoryImpl>,
    history_page_size: usize,
}

impl CatalogService {
    pub fn new(
        product_repository: Arc<ProductRepositoryImpl>,
        price_history_repository: Arc<PriceHistoryRepositoryImpl>,
        history_page_size: usize,
    ) -> Self {
        Self {
            product_repository,
            price_history_repository,
            history_page_size,
        }
    }

    /// Replace the base cost of a product and record the change.
    ///
    /// Rejected input leaves the product and the history untouched.
    pub async fn update_base_cost(
        &self,
        product_id: Uuid,
        input: impl Into<CostInput>,
    ) -> ApiResult<ProductModel> {
        let new_cost = input.into().into_cost().map_err(|err| {
            tracing::warn!(product_id = %product_id, error = %err, "rejected base cost");
            ApiError::from(err)
        })?;

        let update = self
            .product_repository
            .update_base_cost(product_id, new_cost)
            .await
            .map_err(internal_error)?
            .ok_or_else(|| ApiError::NotFound(format!("Product {product_id}")))?;

        tracing::info!(
            product_id = %product_id,
            code = %update.product.code,
            previous_cost = %update.history_entry.previous_cost,
            new_cost = %update.history_entry.new_cost,
            "updated base cost"
        );
        Ok(update.product)
    }

    pub async fn get_product(&self, product_id: Uuid) -> ApiResult<ProductModel> {
        self.product_repository
            .load(product_id)
            .await
            .map_err(internal_error)?
            .ok_or_else(|| ApiError::NotFound(format!("Product {product_id}")))
    }

    /// Whole catalog in catalog order.
    pub async fn list_products(&self) -> ApiResult<Vec<ProductModel>> {
        self.product_repository
            .load_all()
            .await
            .map_err(internal_error)
    }

    /// Admin search by name or code, ignoring case. An empty term returns everything.
    pub async fn search_products(&self, term: &str) -> ApiResult<Vec<ProductModel>> {
        let products = self.list_products().await?;
        Ok(pricing::search_products(&products, term)
            .into_iter()
            .cloned()
            .collect())
    }

    pub async fn categories(&self) -> ApiResult<Vec<String>> {
        let products = self.list_products().await?;
        Ok(pricing::categories(&products))
    }

    /// Cost history across the catalog, newest first.
    ///
    /// Without a page request the first page of the configured size is returned.
    pub async fn history(&self, page: Option<PageRequest>) -> ApiResult<Page<PriceHistoryModel>> {
        let page = page.unwrap_or_else(|| PageRequest::new(self.history_page_size, 0));
        self.price_history_repository
            .load_history(page)
            .await
            .map_err(internal_error)
    }

    pub async fn product_history(
        &self,
        product_id: Uuid,
        page: Option<PageRequest>,
    ) -> ApiResult<Page<PriceHistoryModel>> {
        let page = page.unwrap_or_else(|| PageRequest::new(self.history_page_size, 0));
        self.price_history_repository
            .load_product_history(product_id, page)
            .await
            .map_err(internal_error)
    }

    /// Check that the recorded history of a product leads to its current state.
    pub fn verify_history_chain(&self, product_id: Uuid) -> ApiResult<()> {
        match self.price_history_repository.verify_chain(product_id) {
            Ok(Some(())) => Ok(()),
            Ok(None) => Err(ApiError::NotFound(format!("Product {product_id}"))),
            Err(err) => {
                tracing::error!(product_id = %product_id, error = %err, "history chain broken");
                Err(ApiError::InternalError(err))
            }
        }
    }
}
