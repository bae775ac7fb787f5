pub mod customer_type;
pub mod classifier;
pub mod cost;
pub mod prospect;

pub use customer_type::*;
pub use classifier::*;
pub use cost::*;
pub use prospect::*;
