use crate::repository::catalog_state::CatalogState;

/// Read side of the cost history. Entries are only ever written by
/// [`ProductRepositoryImpl`](crate::repository::ProductRepositoryImpl)
/// together with the product they belong to.
pub struct PriceHistoryRepositoryImpl {
    pub state: CatalogState,
}

impl PriceHistoryRepositoryImpl {
    pub fn new(state: CatalogState) -> Self {
        Self { state }
    }
}
