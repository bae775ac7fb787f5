use async_trait::async_trait;
use pricing_core_db::models::ProductModel;
use pricing_core_db::repository::create_batch::CreateBatch;
use std::collections::HashSet;
use std::error::Error;

use super::repo_impl::ProductRepositoryImpl;
use crate::repository::catalog_state::StoreError;

impl ProductRepositoryImpl {
    pub(super) fn create_batch_impl(
        &self,
        items: Vec<ProductModel>,
    ) -> Result<Vec<ProductModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        self.state.write(|tables| -> Result<Vec<ProductModel>, Box<dyn Error + Send + Sync>> {
            let mut batch_ids = HashSet::with_capacity(items.len());
            for item in &items {
                if tables.product(item.id).is_some() || !batch_ids.insert(item.id) {
                    return Err(StoreError::DuplicateId(item.id).into());
                }
            }

            for item in &items {
                tables.insert_product(item.clone());
            }
            Ok(items)
        })
    }
}

#[async_trait]
impl CreateBatch<ProductModel> for ProductRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<ProductModel>,
    ) -> Result<Vec<ProductModel>, Box<dyn Error + Send + Sync>> {
        self.create_batch_impl(items)
    }
}
