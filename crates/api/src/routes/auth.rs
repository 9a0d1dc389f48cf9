//! Route definitions for the `/auth` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST /register          -> register
/// POST /login             -> login
/// POST /login/init        -> login_init (password, then emailed code)
/// POST /2fa/verify        -> verify_two_factor
/// POST /refresh           -> refresh
/// POST /logout            -> logout (requires auth)
/// POST /change-password   -> change_password (requires auth)
/// GET  /me                -> me (requires auth)
/// GET  /google/url        -> google_url
/// POST /google/callback   -> google_callback
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/login/init", post(auth::login_init))
        .route("/2fa/verify", post(auth::verify_two_factor))
        .route("/refresh", post(auth::refresh))
        .route("/logout", post(auth::logout))
        .route("/change-password", post(auth::change_password))
        .route("/me", get(auth::me))
        .route("/google/url", get(auth::google_url))
        .route("/google/callback", post(auth::google_callback))
}
