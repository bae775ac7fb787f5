use chrono::Utc;
use pricing_core_db::seed::seed_products;
use std::error::Error;
use std::sync::Arc;

use crate::config::StoreConfig;
use crate::repository::{
    CatalogState, CustomerRepositoryImpl, PriceHistoryRepositoryImpl, ProductRepositoryImpl,
};

/// Owner of one in-memory store.
///
/// Every repository built from the same `StoreRepositories` shares its state.
pub struct StoreRepositories {
    state: CatalogState,
    config: StoreConfig,
}

impl StoreRepositories {
    /// Create a store, loading the seed catalog when the config asks for it.
    pub fn new(config: StoreConfig) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let state = CatalogState::new();

        if config.seed_catalog {
            let products = seed_products(Utc::now())?;
            let count = products.len();
            state.write(|tables| {
                for product in products {
                    tables.insert_product(product);
                }
            });
            tracing::info!(products = count, "seeded product catalog");
        }

        Ok(Self { state, config })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Build all repositories over the shared state
    pub fn create_all_repositories(&self) -> CatalogRepositories {
        CatalogRepositories {
            product_repository: Arc::new(ProductRepositoryImpl::new(self.state.clone())),
            customer_repository: Arc::new(CustomerRepositoryImpl::new(self.state.clone())),
            price_history_repository: Arc::new(PriceHistoryRepositoryImpl::new(self.state.clone())),
        }
    }
}

/// Container for all repositories of one store
#[derive(Clone)]
pub struct CatalogRepositories {
    pub product_repository: Arc<ProductRepositoryImpl>,
    pub customer_repository: Arc<CustomerRepositoryImpl>,
    pub price_history_repository: Arc<PriceHistoryRepositoryImpl>,
}
