//! Integration tests for refresh sessions and two-factor challenges,
//! including the periodic purge of dead rows.

use assert_matches::assert_matches;
use chrono::{Duration, Utc};
use rpm_core::roles::{DEFAULT_ROLE_ID, PROVIDER_LOCAL};
use rpm_core::types::DbId;
use rpm_db::models::session::CreateSession;
use rpm_db::models::two_factor::CreateTwoFactorChallenge;
use rpm_db::models::user::CreateUser;
use rpm_db::repositories::{SessionRepo, TwoFactorRepo, UserRepo};
use sqlx::PgPool;

async fn new_user(pool: &PgPool) -> DbId {
    UserRepo::create(
        pool,
        &CreateUser {
            first_name: "Luis".to_string(),
            last_name: "Mora".to_string(),
            email: "luis@example.org".to_string(),
            password_hash: "hash".to_string(),
            google_id: None,
            profile_picture_url: None,
            provider: PROVIDER_LOCAL.to_string(),
            role_id: DEFAULT_ROLE_ID,
        },
    )
    .await
    .unwrap()
    .id
}

async fn new_session(pool: &PgPool, user_id: DbId, hash: &str, ttl: Duration) -> DbId {
    SessionRepo::create(
        pool,
        &CreateSession {
            user_id,
            refresh_token_hash: hash.to_string(),
            expires_at: Utc::now() + ttl,
        },
    )
    .await
    .unwrap()
    .id
}

async fn session_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM user_sessions")
        .fetch_one(pool)
        .await
        .unwrap()
}

async fn new_challenge(pool: &PgPool, user_id: DbId, token_hash: &str, ttl: Duration) -> DbId {
    TwoFactorRepo::create(
        pool,
        &CreateTwoFactorChallenge {
            user_id,
            token_hash: token_hash.to_string(),
            code_hash: format!("code-of-{token_hash}"),
            expires_at: Utc::now() + ttl,
        },
    )
    .await
    .unwrap()
    .id
}

// ---------------------------------------------------------------------------
// Sessions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_cleanup_removes_expired_and_revoked_sessions(pool: PgPool) {
    let user = new_user(&pool).await;
    let live = new_session(&pool, user, "live", Duration::days(7)).await;
    new_session(&pool, user, "expired", Duration::minutes(-5)).await;
    let revoked = new_session(&pool, user, "revoked", Duration::days(7)).await;
    assert!(SessionRepo::revoke(&pool, revoked).await.unwrap());

    let removed = SessionRepo::cleanup_expired(&pool).await.unwrap();

    assert_eq!(removed, 2);
    assert_eq!(session_count(&pool).await, 1);
    let kept = SessionRepo::find_by_refresh_token_hash(&pool, "live")
        .await
        .unwrap()
        .expect("live session survives the purge");
    assert_eq!(kept.id, live);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_cleanup_with_nothing_to_remove(pool: PgPool) {
    let user = new_user(&pool).await;
    new_session(&pool, user, "live", Duration::days(7)).await;

    assert_eq!(SessionRepo::cleanup_expired(&pool).await.unwrap(), 0);
    assert_eq!(session_count(&pool).await, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_revoke_is_single_use(pool: PgPool) {
    let user = new_user(&pool).await;
    let id = new_session(&pool, user, "once", Duration::days(7)).await;

    assert!(SessionRepo::revoke(&pool, id).await.unwrap());
    assert!(!SessionRepo::revoke(&pool, id).await.unwrap());
    assert!(SessionRepo::find_by_refresh_token_hash(&pool, "once")
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Two-factor challenges
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_challenge_lifecycle(pool: PgPool) {
    let user = new_user(&pool).await;
    let id = new_challenge(&pool, user, "tok", Duration::minutes(10)).await;

    let found = TwoFactorRepo::find_active_by_token_hash(&pool, "tok")
        .await
        .unwrap()
        .expect("fresh challenge is active");
    assert_eq!(found.user_id, user);
    assert_eq!(found.attempts, 0);

    assert_eq!(TwoFactorRepo::record_failed_attempt(&pool, id).await.unwrap(), 1);
    assert_eq!(TwoFactorRepo::record_failed_attempt(&pool, id).await.unwrap(), 2);

    assert!(TwoFactorRepo::consume(&pool, id).await.unwrap());
    assert!(!TwoFactorRepo::consume(&pool, id).await.unwrap());
    assert!(TwoFactorRepo::find_active_by_token_hash(&pool, "tok")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_expired_challenge_is_not_active(pool: PgPool) {
    let user = new_user(&pool).await;
    new_challenge(&pool, user, "old", Duration::minutes(-1)).await;

    assert!(TwoFactorRepo::find_active_by_token_hash(&pool, "old")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_challenge_cleanup_keeps_pending(pool: PgPool) {
    let user = new_user(&pool).await;
    new_challenge(&pool, user, "pending", Duration::minutes(10)).await;
    new_challenge(&pool, user, "expired", Duration::minutes(-1)).await;
    let used = new_challenge(&pool, user, "used", Duration::minutes(10)).await;
    TwoFactorRepo::consume(&pool, used).await.unwrap();

    assert_eq!(TwoFactorRepo::cleanup_expired(&pool).await.unwrap(), 2);
    assert!(TwoFactorRepo::find_active_by_token_hash(&pool, "pending")
        .await
        .unwrap()
        .is_some());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_challenge_token_is_rejected(pool: PgPool) {
    let user = new_user(&pool).await;
    new_challenge(&pool, user, "dup", Duration::minutes(10)).await;

    let result = TwoFactorRepo::create(
        &pool,
        &CreateTwoFactorChallenge {
            user_id: user,
            token_hash: "dup".to_string(),
            code_hash: "x".to_string(),
            expires_at: Utc::now() + Duration::minutes(10),
        },
    )
    .await;
    assert_matches!(
        result,
        Err(sqlx::Error::Database(e)) if e.code().as_deref() == Some("23505")
    );
}
