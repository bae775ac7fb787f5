use crate::repository::catalog_state::CatalogState;

pub struct ProductRepositoryImpl {
    pub state: CatalogState,
}

impl ProductRepositoryImpl {
    pub fn new(state: CatalogState) -> Self {
        Self { state }
    }
}
