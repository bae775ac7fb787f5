use parking_lot::RwLock as ParkingRwLock;
use pricing_core_db::models::{CustomerModel, PriceHistoryModel, ProductModel};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Duplicate id: {0}")]
    DuplicateId(Uuid),

    #[error("Hash computation failed: {0}")]
    Hash(String),
}

/// Every table of the store.
///
/// Products keep catalog order, history and customers keep insertion order
/// (oldest first). Listings that must be newest first reverse on read.
#[derive(Debug, Default)]
pub struct CatalogTables {
    pub products: Vec<ProductModel>,
    pub product_positions: HashMap<Uuid, usize>,
    pub history: Vec<PriceHistoryModel>,
    pub customers: Vec<CustomerModel>,
}

impl CatalogTables {
    pub fn product(&self, id: Uuid) -> Option<&ProductModel> {
        self.product_positions.get(&id).map(|pos| &self.products[*pos])
    }

    pub fn product_mut(&mut self, id: Uuid) -> Option<&mut ProductModel> {
        match self.product_positions.get(&id) {
            Some(pos) => Some(&mut self.products[*pos]),
            None => None,
        }
    }

    pub fn insert_product(&mut self, product: ProductModel) {
        self.product_positions.insert(product.id, self.products.len());
        self.products.push(product);
    }
}

/// Shared state behind all repositories of one store.
///
/// A single lock covers products and history, so a cost change and its
/// history entry become visible together.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    tables: Arc<ParkingRwLock<CatalogTables>>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read<R>(&self, f: impl FnOnce(&CatalogTables) -> R) -> R {
        f(&self.tables.read())
    }

    pub fn write<R>(&self, f: impl FnOnce(&mut CatalogTables) -> R) -> R {
        f(&mut self.tables.write())
    }
}
