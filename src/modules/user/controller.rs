use axum::extract::{Path, State};
use axum::http::{HeaderName, StatusCode, header};
use axum::routing::get;
use axum::{Json, Router};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::server::AppState;

use super::contracts::{CreateUserRequest, UserResponse};
use super::model::User;

/// Path the user routes are nested under.
pub const BASE_PATH: &str = "/users";

/// Routes for the user resource, meant to be nested at [`BASE_PATH`].
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all).post(create))
        .route("/{id}", get(get_by_id).delete(delete_by_id))
}

async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>> {
    let user = state
        .user_service()
        .get_by_id(id)
        .await
        .ok_or(ApiError::NotFound)?;

    Ok(Json(user.to_response()))
}

async fn get_all(State(state): State<AppState>) -> Json<Vec<UserResponse>> {
    let users = state.user_service().get_all().await;
    Json(users.iter().map(User::to_response).collect())
}

async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<UserResponse>)> {
    let user = request.into_user();

    if !state.user_service().create(&user).await {
        return Err(ApiError::InvalidInput);
    }

    let location = format!("{BASE_PATH}/{}", user.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(user.to_response()),
    ))
}

async fn delete_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    if state.user_service().delete_by_id(id).await {
        Ok(StatusCode::OK)
    } else {
        Err(ApiError::NotFound)
    }
}
