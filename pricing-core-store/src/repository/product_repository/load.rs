use async_trait::async_trait;
use pricing_core_db::models::ProductModel;
use pricing_core_db::repository::load::Load;
use pricing_core_db::repository::load_all::LoadAll;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::ProductRepositoryImpl;

#[async_trait]
impl Load<ProductModel> for ProductRepositoryImpl {
    async fn load(&self, id: Uuid) -> Result<Option<ProductModel>, Box<dyn Error + Send + Sync>> {
        Ok(self.state.read(|tables| tables.product(id).cloned()))
    }
}

/// Products in catalog order.
#[async_trait]
impl LoadAll<ProductModel> for ProductRepositoryImpl {
    async fn load_all(&self) -> Result<Vec<ProductModel>, Box<dyn Error + Send + Sync>> {
        Ok(self.state.read(|tables| tables.products.clone()))
    }
}
