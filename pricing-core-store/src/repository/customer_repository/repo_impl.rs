use crate::repository::catalog_state::CatalogState;

pub struct CustomerRepositoryImpl {
    pub state: CatalogState,
}

impl CustomerRepositoryImpl {
    pub fn new(state: CatalogState) -> Self {
        Self { state }
    }
}
