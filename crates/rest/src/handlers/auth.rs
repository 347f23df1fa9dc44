//! Account handlers.
//!
//! - `POST /api/auth/register`
//! - `POST /api/auth/login`
//! - `GET /api/auth/me`

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use libris_catalog::accounts::{Credentials, Registration};
use libris_catalog::core::BookStorage;
use serde_json::{Value, json};
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::{BearerToken, JsonBody};
use crate::responses::success_envelope;
use crate::state::AppState;

/// Handler for registration.
///
/// # Response
///
/// - `201 Created` - `{ success, message, user }`
/// - `400 Bad Request` - Missing field or password too short
/// - `409 Conflict` - The email is already registered
pub async fn register_handler<S>(
    State(state): State<AppState<S>>,
    JsonBody(registration): JsonBody<Registration>,
) -> RestResult<Response>
where
    S: BookStorage,
{
    debug!("Processing register request");

    let user = state.accounts().register(registration)?;

    let body = success_envelope(Some("User registered successfully"), &json!({ "user": user }));
    Ok((StatusCode::CREATED, Json(body)).into_response())
}

/// Handler for login.
///
/// # Response
///
/// - `200 OK` - `{ success, message, token, user }`
/// - `400 Bad Request` - Email or password missing
/// - `401 Unauthorized` - Unknown email or wrong password
pub async fn login_handler<S>(
    State(state): State<AppState<S>>,
    JsonBody(credentials): JsonBody<Credentials>,
) -> RestResult<Json<Value>>
where
    S: BookStorage,
{
    debug!("Processing login request");

    let session = state.accounts().login(credentials)?;

    debug!(user_id = session.user.id, "Login succeeded");

    Ok(Json(success_envelope(Some("Login successful"), &session)))
}

/// Handler returning the user of the bearer token.
///
/// # Response
///
/// - `200 OK` - `{ success, user }`
/// - `401 Unauthorized` - Missing, malformed or unknown token
pub async fn me_handler<S>(
    State(state): State<AppState<S>>,
    token: BearerToken,
) -> RestResult<Json<Value>>
where
    S: BookStorage,
{
    let user = state.accounts().authenticate(token.as_str())?;
    debug!(user_id = user.id, "Resolved session");

    Ok(Json(json!({ "success": true, "user": user })))
}
