pub mod repo_impl;
pub mod load_history;
pub mod verify_chain;

pub use repo_impl::PriceHistoryRepositoryImpl;
