//! Handlers for the `/auth` resource (register, login with an optional
//! emailed code, refresh, logout, password change, current user, Google
//! sign-in).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use rpm_core::error::CoreError;
use rpm_core::roles::{DEFAULT_ROLE_ID, PROVIDER_GOOGLE, PROVIDER_LOCAL};
use rpm_core::validation::{validate_request, MIN_PASSWORD_LENGTH};
use rpm_db::models::session::CreateSession;
use rpm_db::models::two_factor::CreateTwoFactorChallenge;
use rpm_db::models::user::{CreateUser, User, UserResponse};
use rpm_db::repositories::{RoleRepo, SessionRepo, TwoFactorRepo, UserRepo};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::google::{authorization_url, exchange_code, GoogleProfile};
use crate::auth::jwt::{
    generate_access_token, generate_refresh_token, hash_refresh_token, random_hex,
};
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::auth::two_factor::{self, generate_code, hash_code, mask_email};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Bytes of randomness in the OAuth `state` parameter.
const OAUTH_STATE_BYTES: usize = 16;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub last_name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/2fa/verify`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoFactorVerifyRequest {
    pub two_factor_token: String,
    pub code: String,
}

/// Response of `POST /auth/login/init`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoFactorInitResponse {
    pub two_factor_required: bool,
    pub two_factor_token: String,
    pub delivery_channel: String,
    pub masked_destination: String,
}

/// Request body for `POST /auth/refresh`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Request body for `POST /auth/change-password`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Request body for `POST /auth/google/callback`.
#[derive(Debug, Deserialize)]
pub struct GoogleCallbackRequest {
    pub code: String,
}

/// Response of `GET /auth/google/url`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleUrlResponse {
    pub auth_url: String,
    pub state: String,
}

/// Successful authentication response returned by every sign-in flow.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
}

fn deactivated() -> AppError {
    AppError::Core(CoreError::Forbidden("Account is deactivated".into()))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Create a local account with the default `Usuario` role and sign it in.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<Json<AuthResponse>> {
    validate_request(&input)?;
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let email = input.email.trim().to_lowercase();
    if UserRepo::find_by_email(&state.pool, &email).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "An account with this email already exists".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            first_name: input.first_name,
            last_name: input.last_name,
            email,
            password_hash,
            google_id: None,
            profile_picture_url: None,
            provider: PROVIDER_LOCAL.to_string(),
            role_id: DEFAULT_ROLE_ID,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "User registered");
    Ok(Json(create_auth_response(&state, user).await?))
}

/// POST /api/v1/auth/login
///
/// Authenticate with email + password in one step.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = authenticate_local(&state, &input).await?;
    Ok(Json(create_auth_response(&state, user).await?))
}

/// POST /api/v1/auth/login/init
///
/// Check the password, then open a two-factor challenge and send its code.
/// The returned `twoFactorToken` plus the code go to `/auth/2fa/verify`.
pub async fn login_init(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<TwoFactorInitResponse>> {
    let user = authenticate_local(&state, &input).await?;

    let token = random_hex(two_factor::TOKEN_BYTES);
    let code = generate_code();
    let expires_at =
        Utc::now() + chrono::Duration::minutes(state.config.two_factor.code_ttl_mins);

    TwoFactorRepo::create(
        &state.pool,
        &CreateTwoFactorChallenge {
            user_id: user.id,
            token_hash: hash_refresh_token(&token),
            code_hash: hash_code(&token, &code),
            expires_at,
        },
    )
    .await?;

    state
        .code_delivery
        .deliver(&user, &code)
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    tracing::info!(user_id = user.id, "Two-factor challenge opened");
    Ok(Json(TwoFactorInitResponse {
        two_factor_required: true,
        two_factor_token: token,
        delivery_channel: state.code_delivery.channel().to_string(),
        masked_destination: mask_email(&user.email),
    }))
}

/// POST /api/v1/auth/2fa/verify
///
/// A challenge accepts one correct code. Each wrong code counts against
/// the attempt budget; once it is spent the challenge is burned.
pub async fn verify_two_factor(
    State(state): State<AppState>,
    Json(input): Json<TwoFactorVerifyRequest>,
) -> AppResult<Json<AuthResponse>> {
    let invalid = || {
        AppError::Core(CoreError::Unauthorized(
            "Invalid or expired verification code".into(),
        ))
    };

    let challenge = TwoFactorRepo::find_active_by_token_hash(
        &state.pool,
        &hash_refresh_token(&input.two_factor_token),
    )
    .await?
    .ok_or_else(invalid)?;

    if challenge.code_hash != hash_code(&input.two_factor_token, &input.code) {
        let attempts = TwoFactorRepo::record_failed_attempt(&state.pool, challenge.id).await?;
        if attempts >= state.config.two_factor.max_attempts {
            TwoFactorRepo::consume(&state.pool, challenge.id).await?;
            tracing::warn!(user_id = challenge.user_id, attempts, "Two-factor challenge burned");
        }
        return Err(invalid());
    }

    if !TwoFactorRepo::consume(&state.pool, challenge.id).await? {
        return Err(invalid());
    }

    let user = UserRepo::find_by_id(&state.pool, challenge.user_id)
        .await?
        .ok_or_else(invalid)?;
    if !user.is_active {
        return Err(deactivated());
    }

    Ok(Json(create_auth_response(&state, user).await?))
}

/// POST /api/v1/auth/refresh
///
/// Exchange a valid refresh token for a new token pair. The presented
/// session is revoked, so each refresh token works once.
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<AuthResponse>> {
    let token_hash = hash_refresh_token(&input.refresh_token);

    let session = SessionRepo::find_by_refresh_token_hash(&state.pool, &token_hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    if !SessionRepo::revoke(&state.pool, session.id).await? {
        // Lost a race with a concurrent refresh of the same token.
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid or expired refresh token".into(),
        )));
    }

    let user = UserRepo::find_by_id(&state.pool, session.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    if !user.is_active {
        return Err(deactivated());
    }

    Ok(Json(create_auth_response(&state, user).await?))
}

/// POST /api/v1/auth/logout
///
/// Revoke all sessions for the authenticated user. Returns 204 No Content.
pub async fn logout(State(state): State<AppState>, auth_user: AuthUser) -> AppResult<StatusCode> {
    let revoked = SessionRepo::revoke_all_for_user(&state.pool, auth_user.user_id).await?;
    tracing::debug!(user_id = auth_user.user_id, revoked, "User logged out");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/auth/change-password
///
/// Requires the current password. Every existing session is revoked, so
/// other devices must sign in again.
pub async fn change_password(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<ChangePasswordRequest>,
) -> AppResult<StatusCode> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    let current_valid = verify_password(&input.current_password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !current_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Current password is incorrect".into(),
        )));
    }

    validate_password_strength(&input.new_password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    let new_hash = hash_password(&input.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    UserRepo::update_password(&state.pool, user.id, &new_hash).await?;
    SessionRepo::revoke_all_for_user(&state.pool, user.id).await?;

    tracing::info!(user_id = user.id, "Password changed");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;
    let role = RoleRepo::resolve_name(&state.pool, user.role_id).await?;
    Ok(Json(UserResponse::from_user(user, role)))
}

/// GET /api/v1/auth/google/url
///
/// The URL the browser should visit to start Google sign-in.
pub async fn google_url(State(state): State<AppState>) -> AppResult<Json<GoogleUrlResponse>> {
    let google = state.config.google.as_ref().ok_or_else(google_disabled)?;
    let oauth_state = random_hex(OAUTH_STATE_BYTES);
    let url = authorization_url(google, &oauth_state)?;
    Ok(Json(GoogleUrlResponse {
        auth_url: url.into(),
        state: oauth_state,
    }))
}

/// POST /api/v1/auth/google/callback
///
/// Exchange the authorization code, then sign in the matching account:
/// by Google id first, then by email (linking the Google identity), else a
/// new Google-provisioned account with the default role. Linking and
/// provisioning need an email Google has verified.
pub async fn google_callback(
    State(state): State<AppState>,
    Json(input): Json<GoogleCallbackRequest>,
) -> AppResult<Json<AuthResponse>> {
    let google = state.config.google.as_ref().ok_or_else(google_disabled)?;
    if input.code.trim().is_empty() {
        return Err(AppError::BadRequest("code is required".into()));
    }

    let profile = exchange_code(&state.http, google, &input.code).await?;
    let user = find_or_provision(&state, profile).await?;

    if !user.is_active {
        return Err(deactivated());
    }
    Ok(Json(create_auth_response(&state, user).await?))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Check email + password for a local sign-in.
async fn authenticate_local(state: &AppState, input: &LoginRequest) -> AppResult<User> {
    let email = input.email.trim().to_lowercase();
    let user = UserRepo::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(invalid_credentials)?;

    if !user.is_active {
        return Err(deactivated());
    }

    if user.password_hash.is_empty() {
        return Err(AppError::Core(CoreError::Unauthorized(
            "This account signs in with Google".into(),
        )));
    }

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::warn!(user_id = user.id, "Failed login attempt");
        return Err(invalid_credentials());
    }
    Ok(user)
}

fn google_disabled() -> AppError {
    AppError::NotImplemented("Google sign-in is not configured".into())
}

async fn find_or_provision(state: &AppState, profile: GoogleProfile) -> AppResult<User> {
    if let Some(user) = UserRepo::find_by_google_id(&state.pool, &profile.id).await? {
        return Ok(user);
    }

    if !profile.verified_email {
        tracing::warn!("Google sign-in refused for an unverified email");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Google account email is not verified".into(),
        )));
    }

    let email = profile.email.trim().to_lowercase();
    if let Some(existing) = UserRepo::find_by_email(&state.pool, &email).await? {
        let user = UserRepo::link_google(
            &state.pool,
            existing.id,
            &profile.id,
            profile.picture.as_deref(),
        )
        .await?;
        tracing::info!(user_id = user.id, "Google identity linked to existing account");
        return Ok(user);
    }

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            first_name: profile.given_name.unwrap_or_default(),
            last_name: profile.family_name.unwrap_or_default(),
            email,
            password_hash: String::new(),
            google_id: Some(profile.id),
            profile_picture_url: profile.picture,
            provider: PROVIDER_GOOGLE.to_string(),
            role_id: DEFAULT_ROLE_ID,
        },
    )
    .await?;
    tracing::info!(user_id = user.id, "User provisioned from Google");
    Ok(user)
}

/// Generate access + refresh tokens, persist a session row, and build the response.
async fn create_auth_response(state: &AppState, user: User) -> AppResult<AuthResponse> {
    let role = RoleRepo::resolve_name(&state.pool, user.role_id).await?;

    let access_token = generate_access_token(user.id, &role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let (refresh_plaintext, refresh_hash) = generate_refresh_token();
    let expires_at =
        Utc::now() + chrono::Duration::days(state.config.jwt.refresh_token_expiry_days);

    SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id: user.id,
            refresh_token_hash: refresh_hash,
            expires_at,
        },
    )
    .await?;

    Ok(AuthResponse {
        access_token,
        refresh_token: refresh_plaintext,
        expires_in: state.config.jwt.access_token_ttl_secs(),
        user: UserResponse::from_user(user, role),
    })
}
