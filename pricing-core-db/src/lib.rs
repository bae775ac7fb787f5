pub mod models;
pub mod pricing;
pub mod repository;
pub mod seed;
pub mod utils;

pub use models::*;
pub use pricing::*;
