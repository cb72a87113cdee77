use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use super::errors::map_sqlx_error;
use crate::domain::errors::RepositoryResult;
use crate::domain::repositories::UserRepository;
use crate::domain::user::User;

#[derive(Debug, FromRow)]
struct UserRow {
    id: i32,
    name: String,
    email: String,
    level_id: i32,
    status: i32,
}

impl From<UserRow> for User {
    fn from(r: UserRow) -> Self {
        User {
            id: r.id,
            name: r.name,
            email: r.email,
            level_id: r.level_id,
            status: r.status,
        }
    }
}

/// PostgreSQL implementation of UserRepository
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a new PostgresUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<User>> {
        let rows: Vec<UserRow> = sqlx::query_as(
            r#"
            SELECT
                "idUsuarios" AS id,
                "NombreUsuario" AS name,
                email,
                "idNivelUsuario" AS level_id,
                estatus AS status
            FROM usuarios
            ORDER BY "idUsuarios"
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to list users", e))?;

        tracing::debug!(count = rows.len(), "Fetched users");

        Ok(rows.into_iter().map(User::from).collect())
    }
}
