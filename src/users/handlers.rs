use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    Json,
};
use tracing::{error, info, instrument, warn};

use crate::state::AppState;

use super::dto::{CreateUserRequest, DeleteParams};
use super::repo::User;

/// Method fallback for every route: the listed paths answer exactly one
/// method each, anything else gets 405 with the reference error text.
pub async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "Ошибка метода")
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>, (StatusCode, String)> {
    match state.repo.list().await {
        Ok(users) => Ok(Json(users)),
        Err(e) => {
            error!(error = %e, "list users failed");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), (StatusCode, String)> {
    let Json(payload) = payload.map_err(|e| {
        warn!(error = %e, "rejected create body");
        (StatusCode::BAD_REQUEST, "Invalid JSON".to_string())
    })?;

    if payload.name.trim().is_empty() || payload.surname.trim().is_empty() {
        warn!("blank name or surname");
        return Err((StatusCode::BAD_REQUEST, "NO NULL".to_string()));
    }

    // Values are stored as received; trimming is validation-only.
    match state.repo.create(&payload.name, &payload.surname).await {
        Ok(user) => {
            info!(id = user.id, "user created");
            Ok((StatusCode::CREATED, Json(user)))
        }
        Err(e) => {
            error!(error = %e, "create user failed");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> Result<StatusCode, (StatusCode, String)> {
    let raw = params.id.as_deref().unwrap_or_default();
    if raw.is_empty() {
        warn!("missing id parameter");
        return Err((StatusCode::BAD_REQUEST, "Bad request".to_string()));
    }

    let id: i32 = raw.parse().map_err(|_| {
        warn!(id = raw, "non-numeric id parameter");
        (StatusCode::BAD_REQUEST, "Invalid ID format".to_string())
    })?;

    // A zero-row delete is still a success.
    match state.repo.delete(id).await {
        Ok(affected) => {
            info!(id, affected, "user deleted");
            Ok(StatusCode::NO_CONTENT)
        }
        Err(e) => {
            error!(error = %e, id, "delete user failed");
            Err((StatusCode::INTERNAL_SERVER_ERROR, "DB err".to_string()))
        }
    }
}
