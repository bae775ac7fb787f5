//! Test helpers for service-level tests
//!
//! Every test gets its own seeded in-memory store, so tests never observe each
//! other's writes and need no cleanup.

use async_trait::async_trait;
use pricing_core_api::{parse_place_payload, DirectoryError, DirectoryLookup, PlaceData};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::config::StoreConfig;
use crate::service::{CatalogService, PriceListService, ProspectService};
use crate::store_repositories::{CatalogRepositories, StoreRepositories};

pub struct TestContext {
    pub repos: CatalogRepositories,
    pub config: StoreConfig,
}

impl TestContext {
    pub fn catalog_service(&self) -> CatalogService {
        CatalogService::new(
            self.repos.product_repository.clone(),
            self.repos.price_history_repository.clone(),
            self.config.history_page_size,
        )
    }

    pub fn price_list_service(&self) -> PriceListService {
        PriceListService::new(
            self.repos.product_repository.clone(),
            self.repos.customer_repository.clone(),
        )
    }

    pub fn prospect_service(&self, directory: impl DirectoryLookup + 'static) -> ProspectService {
        ProspectService::new(Arc::new(directory), self.repos.customer_repository.clone())
    }
}

/// Setup a fresh store loaded with the seed catalog
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
///     let ctx = setup_test_context()?;
///     let products = ctx.catalog_service().list_products().await?;
///     Ok(())
/// }
/// ```
pub fn setup_test_context() -> Result<TestContext, Box<dyn std::error::Error + Send + Sync>> {
    let config = StoreConfig::default();
    let store = StoreRepositories::new(config.clone())?;
    Ok(TestContext {
        repos: store.create_all_repositories(),
        config,
    })
}

#[derive(Debug, Clone)]
enum StubResponse {
    Found(PlaceData),
    Failing(DirectoryError),
    Text(String),
}

/// Directory that always gives the same answer and counts how often it was asked.
#[derive(Debug, Clone)]
pub struct StubDirectory {
    response: StubResponse,
    calls: Arc<AtomicUsize>,
}

impl StubDirectory {
    fn with_response(response: StubResponse) -> Self {
        Self {
            response,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn found(place: PlaceData) -> Self {
        Self::with_response(StubResponse::Found(place))
    }

    pub fn failing(error: DirectoryError) -> Self {
        Self::with_response(StubResponse::Failing(error))
    }

    /// Answer with a raw text payload, parsed the way a real directory reply is.
    pub fn text(payload: &str) -> Self {
        Self::with_response(StubResponse::Text(payload.to_string()))
    }

    /// Number of lookups made through this stub or any of its clones.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DirectoryLookup for StubDirectory {
    async fn lookup(&self, _name: &str, _address: &str) -> Result<PlaceData, DirectoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            StubResponse::Found(place) => Ok(place.clone()),
            StubResponse::Failing(error) => Err(error.clone()),
            StubResponse::Text(payload) => parse_place_payload(payload),
        }
    }
}

/// Directory that never answers.
pub struct PendingDirectory;

#[async_trait]
impl DirectoryLookup for PendingDirectory {
    async fn lookup(&self, _name: &str, _address: &str) -> Result<PlaceData, DirectoryError> {
        std::future::pending().await
    }
}
