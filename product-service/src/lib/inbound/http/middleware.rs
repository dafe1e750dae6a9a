use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use super::handlers::ApiError;
use super::handlers::UNAUTHORIZED_MESSAGE;
use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;

/// Caller identity attached to requests that passed the authorization gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Authorization gate for protected routes.
///
/// Every rejection produces the same 401 response. The reason is only logged.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req).map_err(|reason| {
        tracing::warn!(reason, "Rejected request");
        unauthorized()
    })?;

    let claims = state.authenticator.verify_token(token).map_err(|e| {
        tracing::warn!(reason = %e, "Rejected token");
        unauthorized()
    })?;

    let user_id = claims
        .sub
        .as_deref()
        .map(UserId::from_string)
        .transpose()
        .map_err(|e| {
            tracing::warn!(reason = %e, "Rejected token subject");
            unauthorized()
        })?
        .ok_or_else(|| {
            tracing::warn!(reason = "missing subject", "Rejected token subject");
            unauthorized()
        })?;

    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}

fn unauthorized() -> Response {
    ApiError::Unauthorized(UNAUTHORIZED_MESSAGE.to_string()).into_response()
}

/// Pull the token out of `Authorization: Bearer <token>`.
///
/// The scheme is matched case-insensitively.
fn extract_bearer_token(req: &Request) -> Result<&str, &'static str> {
    let value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or("missing Authorization header")?
        .to_str()
        .map_err(|_| "Authorization header is not valid ASCII")?;

    let (scheme, token) = value
        .split_once(' ')
        .ok_or("Authorization header is not a bearer credential")?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err("Authorization header is not a bearer credential");
    }

    let token = token.trim();
    if token.is_empty() {
        return Err("empty bearer token");
    }

    Ok(token)
}
