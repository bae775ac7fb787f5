pub mod catalog_state;
pub mod customer_repository;
pub mod price_history_repository;
pub mod product_repository;

pub use catalog_state::{CatalogState, CatalogTables, StoreError};
pub use customer_repository::CustomerRepositoryImpl;
pub use price_history_repository::PriceHistoryRepositoryImpl;
pub use product_repository::ProductRepositoryImpl;
