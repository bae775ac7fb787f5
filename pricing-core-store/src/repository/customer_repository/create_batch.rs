use async_trait::async_trait;
use pricing_core_db::models::CustomerModel;
use pricing_core_db::repository::create_batch::CreateBatch;
use std::collections::HashSet;
use std::error::Error;

use super::repo_impl::CustomerRepositoryImpl;
use crate::repository::catalog_state::StoreError;

impl CustomerRepositoryImpl {
    pub(super) fn create_batch_impl(
        &self,
        items: Vec<CustomerModel>,
    ) -> Result<Vec<CustomerModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        self.state.write(|tables| -> Result<Vec<CustomerModel>, Box<dyn Error + Send + Sync>> {
            let mut seen: HashSet<_> = tables.customers.iter().map(|c| c.id).collect();
            for item in &items {
                if !seen.insert(item.id) {
                    return Err(StoreError::DuplicateId(item.id).into());
                }
            }

            tables.customers.extend(items.iter().cloned());
            Ok(items)
        })
    }
}

#[async_trait]
impl CreateBatch<CustomerModel> for CustomerRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<CustomerModel>,
    ) -> Result<Vec<CustomerModel>, Box<dyn Error + Send + Sync>> {
        self.create_batch_impl(items)
    }
}
