use async_trait::async_trait;
use pricing_core_db::models::CustomerModel;
use pricing_core_db::repository::load::Load;
use pricing_core_db::repository::load_all::LoadAll;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::CustomerRepositoryImpl;

#[async_trait]
impl Load<CustomerModel> for CustomerRepositoryImpl {
    async fn load(&self, id: Uuid) -> Result<Option<CustomerModel>, Box<dyn Error + Send + Sync>> {
        Ok(self
            .state
            .read(|tables| tables.customers.iter().find(|c| c.id == id).cloned()))
    }
}

/// Customers newest first.
#[async_trait]
impl LoadAll<CustomerModel> for CustomerRepositoryImpl {
    async fn load_all(&self) -> Result<Vec<CustomerModel>, Box<dyn Error + Send + Sync>> {
        Ok(self
            .state
            .read(|tables| tables.customers.iter().rev().cloned().collect()))
    }
}
