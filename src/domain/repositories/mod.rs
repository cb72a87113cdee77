// Repository interfaces (ports)
// Implemented by the adapters in crate::infrastructure::repositories

pub mod shrinkage_repository;
pub mod user_repository;

pub use shrinkage_repository::{ShrinkageRepository, PRODUCT_SEARCH_LIMIT};
pub use user_repository::UserRepository;
