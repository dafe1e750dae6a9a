use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::INVALID_CREDENTIALS_MESSAGE;
use crate::domain::user::models::EmailAddress;
use crate::inbound::http::router::AppState;

/// Exchange email and password for a signed access token.
///
/// Unknown email and wrong password produce the same 401 so callers cannot
/// probe which addresses are registered.
pub async fn create_token(
    State(state): State<AppState>,
    body: Result<Json<CreateTokenRequest>, JsonRejection>,
) -> Result<Json<CreateTokenResponse>, ApiError> {
    let Json(body) = body?;

    let email = EmailAddress::new(body.email).map_err(|_| invalid_credentials())?;

    let user = state.user_service.get_user_by_email(&email).await?;

    let result = state
        .authenticator
        .authenticate(
            &body.password,
            &user.password_hash,
            user.id,
            state.token_lifetime_seconds,
        )
        .map_err(|e| match e {
            auth::AuthenticationError::InvalidCredentials => {
                tracing::info!(user_id = %user.id, "Password mismatch");
                invalid_credentials()
            }
            auth::AuthenticationError::PasswordError(err) => {
                ApiError::InternalServerError(format!("Password verification failed: {}", err))
            }
            auth::AuthenticationError::JwtError(err) => {
                ApiError::InternalServerError(format!("Token generation failed: {}", err))
            }
        })?;

    tracing::info!(user_id = %user.id, "Access token issued");

    Ok(Json(CreateTokenResponse {
        access_token: result.access_token,
    }))
}

fn invalid_credentials() -> ApiError {
    ApiError::Unauthorized(INVALID_CREDENTIALS_MESSAGE.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTokenRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateTokenResponse {
    pub access_token: String,
}
