//! Auth endpoints: register, login, logout, current user, change password.
//!
//! These only talk to the backend; persisting the token and updating the
//! session signal is the `ui` crate's job, so there is exactly one writer of
//! session state.

use crate::client;
use crate::error::ApiError;
use crate::models::{AuthResponse, ChangePasswordRequest, LoginRequest, RegisterRequest, User};

pub async fn register(request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    client::post("/auth/register", request).await
}

pub async fn login(request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    client::post("/auth/login", request).await
}

/// Best-effort server-side logout. Callers clear local state regardless of
/// the outcome.
pub async fn logout() -> Result<(), ApiError> {
    client::post_empty("/auth/logout").await
}

pub async fn current_user() -> Result<User, ApiError> {
    client::get("/auth/me", &[]).await
}

/// Mutates backend credentials only; the local session is untouched.
pub async fn change_password(request: &ChangePasswordRequest) -> Result<(), ApiError> {
    client::post_ack("/auth/change-password", request).await
}
