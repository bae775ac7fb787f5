pub mod repo_impl;
pub mod create_batch;
pub mod load;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::CustomerRepositoryImpl;
