use axum::extract::State;
use axum::Json;

use crate::api::dto::{LoginRequest, MessageResponse, RegisterRequest};
use crate::api::state::AppState;
use crate::auth::{hash_password, verify_password};
use crate::error::{Result, ScrivenError};
use crate::models::User;

/// `POST /auth/register`
///
/// Hashes the password and persists a new account. Duplicate usernames are
/// rejected before any write happens; a race past this check is caught by
/// the UNIQUE constraint and surfaces as a server error.
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Account created", body = MessageResponse),
        (status = 400, description = "Username already taken"),
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<MessageResponse>> {
    if state.db.get_user_by_username(&req.username).await?.is_some() {
        return Err(ScrivenError::Conflict("User already exists".to_string()));
    }

    let user = User::new(
        nanoid::nanoid!(),
        req.username,
        req.email,
        hash_password(&req.password)?,
    );
    state.db.create_user(&user).await?;

    tracing::info!(username = %user.username, "User registered");
    Ok(Json(MessageResponse::new("User registered")))
}

/// `POST /auth/login`
///
/// Verifies credentials and returns an acknowledgment. No session or token
/// is issued. Unknown username and wrong password collapse into the same
/// rejection so the response does not reveal which check failed.
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials valid", body = MessageResponse),
        (status = 401, description = "Unknown username or wrong password"),
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<MessageResponse>> {
    let valid = state
        .db
        .get_user_by_username(&req.username)
        .await?
        .map(|user| verify_password(&req.password, &user.password_hash))
        .unwrap_or(false);

    if !valid {
        return Err(ScrivenError::Unauthorized(
            "Invalid credentials".to_string(),
        ));
    }

    Ok(Json(MessageResponse::new("Login success")))
}
