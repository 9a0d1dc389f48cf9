//! Periodic purge of dead auth rows.
//!
//! Every login, refresh and Google sign-in adds a `user_sessions` row and
//! every two-factor start adds a challenge. Revoked, consumed and expired
//! rows are deleted here on a fixed `tokio::time::interval`.

use std::time::Duration;

use rpm_db::repositories::{SessionRepo, TwoFactorRepo};
use sqlx::PgPool;
use tokio_util::sync::CancellationToken;

/// How often the purge runs.
pub const CLEANUP_INTERVAL: Duration = Duration::from_secs(3600);

/// One purge pass. Returns `(sessions, challenges)` removed.
pub async fn purge(pool: &PgPool) -> Result<(u64, u64), sqlx::Error> {
    let sessions = SessionRepo::cleanup_expired(pool).await?;
    let challenges = TwoFactorRepo::cleanup_expired(pool).await?;
    Ok((sessions, challenges))
}

/// Run [`purge`] every `every` until `cancel` fires. The first pass runs
/// immediately.
pub async fn run(pool: PgPool, every: Duration, cancel: CancellationToken) {
    tracing::info!(interval_secs = every.as_secs(), "Auth cleanup job started");

    let mut interval = tokio::time::interval(every);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Auth cleanup job stopping");
                break;
            }
            _ = interval.tick() => {
                match purge(&pool).await {
                    Ok((0, 0)) => tracing::debug!("Auth cleanup: nothing to purge"),
                    Ok((sessions, challenges)) => {
                        tracing::info!(sessions, challenges, "Auth cleanup: purged dead rows");
                    }
                    Err(e) => tracing::error!(error = %e, "Auth cleanup failed"),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration as ChronoDuration, Utc};
    use rpm_core::roles::{DEFAULT_ROLE_ID, PROVIDER_LOCAL};
    use rpm_db::models::session::CreateSession;
    use rpm_db::models::user::CreateUser;
    use rpm_db::repositories::UserRepo;

    use super::*;

    #[sqlx::test(migrations = "../db/migrations")]
    async fn job_purges_then_stops_on_cancel(pool: PgPool) {
        let user = UserRepo::create(
            &pool,
            &CreateUser {
                first_name: "Eva".into(),
                last_name: "Paz".into(),
                email: "eva@example.org".into(),
                password_hash: "hash".into(),
                google_id: None,
                profile_picture_url: None,
                provider: PROVIDER_LOCAL.into(),
                role_id: DEFAULT_ROLE_ID,
            },
        )
        .await
        .unwrap();
        SessionRepo::create(
            &pool,
            &CreateSession {
                user_id: user.id,
                refresh_token_hash: "stale".into(),
                expires_at: Utc::now() - ChronoDuration::hours(1),
            },
        )
        .await
        .unwrap();

        let cancel = CancellationToken::new();
        let handle = tokio::spawn(run(pool.clone(), Duration::from_millis(20), cancel.clone()));

        let mut remaining: i64 = 1;
        for _ in 0..50 {
            remaining = sqlx::query_scalar("SELECT COUNT(*) FROM user_sessions")
                .fetch_one(&pool)
                .await
                .unwrap();
            if remaining == 0 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        assert_eq!(remaining, 0);

        cancel.cancel();
        tokio::time::timeout(Duration::from_secs(2), handle)
            .await
            .expect("job should stop after cancel")
            .unwrap();
    }
}
