pub mod repo_impl;
pub mod create_batch;
pub mod load;
pub mod update_base_cost;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::ProductRepositoryImpl;
