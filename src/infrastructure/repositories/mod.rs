// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

mod errors;
pub mod postgres_shrinkage_repository;
pub mod postgres_user_repository;

pub use postgres_shrinkage_repository::PostgresShrinkageRepository;
pub use postgres_user_repository::PostgresUserRepository;
