pub mod config;
pub mod repository;
pub mod service;
pub mod store_repositories;

pub use config::StoreConfig;
pub use store_repositories::{CatalogRepositories, StoreRepositories};

#[cfg(test)]
pub mod test_helper;
