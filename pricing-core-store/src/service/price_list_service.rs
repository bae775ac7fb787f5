use pricing_core_api::{ApiError, ApiResult, CustomerType};
use pricing_core_db::models::CustomerModel;
use pricing_core_db::pricing::{self, PriceListFilter, PricedProduct};
use pricing_core_db::repository::load::Load;
use pricing_core_db::repository::load_all::LoadAll;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use super::internal_error;
use crate::repository::{CustomerRepositoryImpl, ProductRepositoryImpl};

/// Prices the catalog for a customer or a segment.
///
/// Prices are computed from the current base costs on every call, so a cost
/// change shows up in the next price list without any cache to invalidate.
pub struct PriceListService {
    product_repository: Arc<ProductRepositoryImpl>,
    customer_repository: Arc<CustomerRepositoryImpl>,
}

impl PriceListService {
    pub fn new(
        product_repository: Arc<ProductRepositoryImpl>,
        customer_repository: Arc<CustomerRepositoryImpl>,
    ) -> Self {
        Self {
            product_repository,
            customer_repository,
        }
    }

    /// Display price of one product for a segment.
    pub async fn price_for(&self, product_id: Uuid, customer_type: CustomerType) -> ApiResult<Decimal> {
        let product = self
            .product_repository
            .load(product_id)
            .await
            .map_err(internal_error)?
            .ok_or_else(|| ApiError::NotFound(format!("Product {product_id}")))?;
        Ok(pricing::price_for(&product, customer_type))
    }

    /// Price list as seen by a registered customer.
    pub async fn price_list(
        &self,
        customer_id: Uuid,
        filter: &PriceListFilter,
    ) -> ApiResult<(CustomerModel, Vec<PricedProduct>)> {
        let customer = self
            .customer_repository
            .load(customer_id)
            .await
            .map_err(internal_error)?
            .ok_or_else(|| ApiError::NotFound(format!("Customer {customer_id}")))?;

        let items = self
            .price_list_for_segment(customer.customer_type, filter)
            .await?;
        tracing::debug!(
            customer_id = %customer_id,
            customer_type = %customer.customer_type,
            items = items.len(),
            "built price list"
        );
        Ok((customer, items))
    }

    pub async fn price_list_for_segment(
        &self,
        customer_type: CustomerType,
        filter: &PriceListFilter,
    ) -> ApiResult<Vec<PricedProduct>> {
        let products = self
            .product_repository
            .load_all()
            .await
            .map_err(internal_error)?;
        Ok(pricing::price_list(&products, customer_type, filter))
    }
}
