pub mod auditable;
pub mod identifiable;
pub mod customer;
pub mod price_history;
pub mod product;

// Re-exports
pub use auditable::*;
pub use identifiable::*;
pub use customer::*;
pub use price_history::*;
pub use product::*;
