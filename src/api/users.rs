//! User management endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::user::{CreateUser, UserProjection},
};

use super::validate_request;

/// User response with status message
#[derive(Serialize, ToSchema)]
pub struct UserResponse {
    /// Status message
    pub message: String,
    /// User details
    pub user: UserProjection,
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/create-user",
    tag = "users",
    request_body = CreateUser,
    responses(
        (status = 200, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_user(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateUser>,
) -> AppResult<Json<UserResponse>> {
    validate_request(&request)?;

    let user = state.services.users.create_user(request).await?;

    Ok(Json(UserResponse {
        message: "user created successfully".to_string(),
        user: user.into(),
    }))
}
