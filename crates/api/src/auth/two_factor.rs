//! Second sign-in step: a short numeric code sent to the account's email.
//!
//! `POST /auth/login/init` checks the password, stores a challenge and
//! hands the client an opaque `twoFactorToken`; `POST /auth/2fa/verify`
//! trades token + code for the usual token pair. Only digests are stored:
//! the token like a refresh token, the code salted with its token.
//!
//! How the code reaches the user is behind [`CodeDelivery`]. The shipped
//! [`LogDelivery`] only writes it to the log.

use rand::Rng;
use rpm_db::models::user::User;

use super::jwt::sha256_hex;

const DEFAULT_CODE_TTL_MINS: i64 = 10;
const DEFAULT_MAX_ATTEMPTS: i32 = 5;

/// Digits in a sign-in code.
pub const CODE_DIGITS: usize = 6;

/// Bytes of randomness behind a `twoFactorToken`.
pub const TOKEN_BYTES: usize = 32;

#[derive(Debug, Clone)]
pub struct TwoFactorConfig {
    pub code_ttl_mins: i64,
    /// Wrong codes accepted before the challenge is burned.
    pub max_attempts: i32,
}

impl Default for TwoFactorConfig {
    fn default() -> Self {
        Self {
            code_ttl_mins: DEFAULT_CODE_TTL_MINS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl TwoFactorConfig {
    /// | Env Var                     | Default |
    /// |-----------------------------|---------|
    /// | `TWO_FACTOR_CODE_TTL_MINS`  | `10`    |
    /// | `TWO_FACTOR_MAX_ATTEMPTS`   | `5`     |
    pub fn from_env() -> Self {
        let code_ttl_mins: i64 = std::env::var("TWO_FACTOR_CODE_TTL_MINS")
            .unwrap_or_else(|_| DEFAULT_CODE_TTL_MINS.to_string())
            .parse()
            .expect("TWO_FACTOR_CODE_TTL_MINS must be a valid i64");

        let max_attempts: i32 = std::env::var("TWO_FACTOR_MAX_ATTEMPTS")
            .unwrap_or_else(|_| DEFAULT_MAX_ATTEMPTS.to_string())
            .parse()
            .expect("TWO_FACTOR_MAX_ATTEMPTS must be a valid i32");

        Self {
            code_ttl_mins,
            max_attempts,
        }
    }
}

/// A uniformly random code of [`CODE_DIGITS`] digits, leading zeros kept.
pub fn generate_code() -> String {
    let n: u32 = rand::rng().random_range(0..10u32.pow(CODE_DIGITS as u32));
    format!("{n:0width$}", width = CODE_DIGITS)
}

/// Digest stored for `code`, salted with the challenge's token so equal
/// codes of different challenges never share a digest.
pub fn hash_code(token: &str, code: &str) -> String {
    sha256_hex(format!("{token}:{}", code.trim()).as_bytes())
}

/// `ana.rojas@example.org` -> `a********@example.org`.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let mut chars = local.chars();
            let first = chars.next().unwrap_or('*');
            let hidden = chars.count().max(1);
            format!("{first}{}@{domain}", "*".repeat(hidden))
        }
        _ => "***".to_string(),
    }
}

/// Failure handing a code to its channel.
#[derive(Debug, thiserror::Error)]
#[error("Could not deliver sign-in code: {0}")]
pub struct DeliveryError(pub String);

/// Channel that carries sign-in codes to users.
pub trait CodeDelivery: Send + Sync {
    /// Name reported to the client as `deliveryChannel`.
    fn channel(&self) -> &'static str;

    /// Send `code` to `user`. Called once per challenge.
    fn deliver(&self, user: &User, code: &str) -> Result<(), DeliveryError>;
}

/// Writes codes to the log instead of sending them.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDelivery;

impl CodeDelivery for LogDelivery {
    fn channel(&self) -> &'static str {
        "email"
    }

    fn deliver(&self, user: &User, code: &str) -> Result<(), DeliveryError> {
        tracing::info!(
            user_id = user.id,
            destination = %mask_email(&user.email),
            "Sign-in code issued; no delivery channel configured"
        );
        tracing::debug!(user_id = user.id, code, "Sign-in code");
        Ok(())
    }
}
