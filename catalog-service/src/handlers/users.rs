use crate::models::User;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use service_core::error::AppError;

#[utoipa::path(
    get,
    path = "/userchild",
    responses(
        (status = 200, description = "Every user record, as a bare array", body = [User]),
        (status = 500, description = "Store query failed")
    ),
    tag = "Users"
)]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    Ok(Json(state.db.list_users().await?))
}

#[utoipa::path(
    get,
    path = "/{name}",
    params(("name" = String, Path, description = "Exact user name")),
    responses(
        (status = 200, description = "User record", body = User),
        (status = 404, description = "No user with that name"),
        (status = 500, description = "Store query failed")
    ),
    tag = "Users"
)]
pub async fn get_user_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<User>, AppError> {
    let user = state
        .db
        .find_user(&name)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("User not found")))?;
    Ok(Json(user))
}
