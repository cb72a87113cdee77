use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::errors::ApiError;
use crate::api::middleware::AuthenticatedUser;
use crate::api::state::AppState;
use crate::domain::user::User;

/// User record as exposed over HTTP, keeping the storage field names
#[derive(Debug, Serialize)]
pub struct UserResponse {
    #[serde(rename = "idUsuarios")]
    pub id: i32,
    #[serde(rename = "NombreUsuario")]
    pub name: String,
    pub email: String,
    #[serde(rename = "idNivelUsuario")]
    pub level_id: i32,
    #[serde(rename = "estatus")]
    pub status: i32,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            level_id: user.level_id,
            status: user.status,
        }
    }
}

/// List every user
///
/// GET /usuarios
///
/// 404 when there are no users, 500 when the lookup fails.
pub async fn list_users(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.users.find_all().await.map_err(|e| {
        ApiError::internal_server_error(format!("Error al consultar usuarios: {}", e))
    })?;

    if users.is_empty() {
        return Err(ApiError::not_found("No se encontraron usuarios"));
    }

    tracing::debug!(subject = %caller.subject, count = users.len(), "Listed users");

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
