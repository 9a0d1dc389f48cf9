//! Google OAuth 2.0 authorization-code flow.
//!
//! The browser is sent to [`authorization_url`]; Google redirects back with
//! a one-time `code` that the backend trades for an access token at the
//! token endpoint (using the client secret, which never leaves the server)
//! and then uses to fetch the user's profile.

use reqwest::Url;
use serde::Deserialize;

const DEFAULT_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const DEFAULT_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const DEFAULT_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v2/userinfo";
const DEFAULT_REDIRECT_URI: &str = "http://localhost:3000/auth/google/callback";

/// Scopes requested from Google.
pub const SCOPES: &str = "email profile";

/// Google client registration plus endpoint locations.
#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub auth_url: String,
    pub token_url: String,
    pub userinfo_url: String,
}

impl GoogleConfig {
    /// Load Google sign-in configuration from environment variables.
    ///
    /// | Env Var                | Required | Default                                       |
    /// |------------------------|----------|-----------------------------------------------|
    /// | `GOOGLE_CLIENT_ID`     | no       | --  (Google sign-in disabled when unset)      |
    /// | `GOOGLE_CLIENT_SECRET` | with id  | --                                            |
    /// | `GOOGLE_REDIRECT_URI`  | no       | `http://localhost:3000/auth/google/callback`  |
    /// | `GOOGLE_AUTH_URL`      | no       | Google's authorization endpoint               |
    /// | `GOOGLE_TOKEN_URL`     | no       | Google's token endpoint                       |
    /// | `GOOGLE_USERINFO_URL`  | no       | Google's v2 userinfo endpoint                 |
    ///
    /// # Panics
    ///
    /// Panics if a client id is configured without a client secret.
    pub fn from_env() -> Option<Self> {
        let client_id = std::env::var("GOOGLE_CLIENT_ID")
            .ok()
            .filter(|id| !id.trim().is_empty())?;

        let client_secret = std::env::var("GOOGLE_CLIENT_SECRET")
            .expect("GOOGLE_CLIENT_SECRET must be set when GOOGLE_CLIENT_ID is set");

        let var_or = |name: &str, default: &str| {
            std::env::var(name).unwrap_or_else(|_| default.to_string())
        };

        Some(Self {
            client_id,
            client_secret,
            redirect_uri: var_or("GOOGLE_REDIRECT_URI", DEFAULT_REDIRECT_URI),
            auth_url: var_or("GOOGLE_AUTH_URL", DEFAULT_AUTH_URL),
            token_url: var_or("GOOGLE_TOKEN_URL", DEFAULT_TOKEN_URL),
            userinfo_url: var_or("GOOGLE_USERINFO_URL", DEFAULT_USERINFO_URL),
        })
    }
}

/// Failure while talking to Google.
#[derive(Debug, thiserror::Error)]
pub enum GoogleError {
    /// Google refused the code or the token (non-2xx answer).
    #[error("Google rejected the request with status {0}")]
    Rejected(u16),

    /// Google could not be reached or answered with an unreadable body.
    #[error("Google request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A configured endpoint is not a valid URL.
    #[error("Invalid Google endpoint URL: {0}")]
    InvalidUrl(String),
}

/// Profile fields returned by the userinfo endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleProfile {
    pub id: String,
    pub email: String,
    /// Missing counts as unverified.
    #[serde(default)]
    pub verified_email: bool,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Build the URL the browser is sent to. Never includes the client secret.
pub fn authorization_url(config: &GoogleConfig, state: &str) -> Result<Url, GoogleError> {
    let url = Url::parse_with_params(
        &config.auth_url,
        &[
            ("client_id", config.client_id.as_str()),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("response_type", "code"),
            ("scope", SCOPES),
            ("access_type", "offline"),
            ("state", state),
        ],
    )
    .map_err(|e| GoogleError::InvalidUrl(e.to_string()))?;
    Ok(url)
}

/// Trade an authorization code for the user's Google profile.
pub async fn exchange_code(
    client: &reqwest::Client,
    config: &GoogleConfig,
    code: &str,
) -> Result<GoogleProfile, GoogleError> {
    let response = client
        .post(&config.token_url)
        .form(&[
            ("code", code),
            ("client_id", config.client_id.as_str()),
            ("client_secret", config.client_secret.as_str()),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ])
        .send()
        .await?;

    if !response.status().is_success() {
        tracing::warn!(status = %response.status(), "Google token exchange rejected");
        return Err(GoogleError::Rejected(response.status().as_u16()));
    }
    let token: TokenResponse = response.json().await?;

    let response = client
        .get(&config.userinfo_url)
        .bearer_auth(&token.access_token)
        .send()
        .await?;

    if !response.status().is_success() {
        tracing::warn!(status = %response.status(), "Google userinfo request rejected");
        return Err(GoogleError::Rejected(response.status().as_u16()));
    }
    Ok(response.json().await?)
}
