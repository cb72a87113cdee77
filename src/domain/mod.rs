// Domain layer module exports
// Domain is independent of infrastructure concerns

pub mod errors;
pub mod repositories;
pub mod shrinkage;
pub mod user;

pub use errors::{RepositoryError, RepositoryResult};
