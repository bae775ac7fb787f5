pub mod create_batch;
pub mod load;
pub mod load_all;
pub mod load_history;
pub mod pagination;
pub mod update_base_cost;

// Re-exports
pub use create_batch::*;
pub use load::*;
pub use load_all::*;
pub use load_history::*;
pub use pagination::*;
pub use update_base_cost::*;
