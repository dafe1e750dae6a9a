use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use crate::domain::user::models::CreateUserCommand;
use crate::inbound::http::router::AppState;

/// Register a user. Responds 201 with an empty body.
pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(body) = body?;

    state
        .user_service
        .create_user(body.into_command())
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::CREATED)
}

/// HTTP request body for creating a user (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateUserRequest {
    name: String,
    email: String,
    password: String,
}

impl CreateUserRequest {
    fn into_command(self) -> CreateUserCommand {
        CreateUserCommand::new(self.name, self.email, self.password)
    }
}
