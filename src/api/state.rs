use std::sync::Arc;

use sqlx::PgPool;

use crate::config::AuthConfig;
use crate::domain::repositories::{ShrinkageRepository, UserRepository};
use crate::infrastructure::repositories::{PostgresShrinkageRepository, PostgresUserRepository};

/// Shared application state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub shrinkage: Arc<dyn ShrinkageRepository>,
    pub auth: Arc<AuthConfig>,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        shrinkage: Arc<dyn ShrinkageRepository>,
        auth: AuthConfig,
    ) -> Self {
        Self {
            users,
            shrinkage,
            auth: Arc::new(auth),
        }
    }

    /// State backed by the PostgreSQL repositories
    pub fn from_pool(pool: PgPool, auth: AuthConfig) -> Self {
        Self::new(
            Arc::new(PostgresUserRepository::new(pool.clone())),
            Arc::new(PostgresShrinkageRepository::new(pool)),
            auth,
        )
    }
}
