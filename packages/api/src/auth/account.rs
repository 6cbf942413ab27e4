//! Registration and credential checks.

use sqlx::SqlitePool;
use tracing::info;

use super::password::{hash_password, verify_password};
use crate::error::AuthError;
use crate::models::User;

/// Create an account.
///
/// The username is trimmed, the password is taken as-is. Both must be non-empty.
pub async fn register(username: &str, password: &str, pool: &SqlitePool) -> Result<User, AuthError> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(AuthError::MissingCredentials);
    }

    if User::find_by_username(username, pool).await?.is_some() {
        return Err(AuthError::UsernameTaken);
    }

    let password_hash = hash_password(password)?;

    // A concurrent registration can still win the race; the UNIQUE index catches it.
    let user = match User::insert(username, &password_hash, pool).await {
        Ok(user) => user,
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            return Err(AuthError::UsernameTaken);
        }
        Err(e) => return Err(e.into()),
    };

    info!(user_id = user.id, "account created");
    Ok(user)
}

/// Check a username/password pair.
///
/// Unknown usernames and wrong passwords both yield [`AuthError::InvalidCredentials`].
pub async fn authenticate(username: &str, password: &str, pool: &SqlitePool) -> Result<User, AuthError> {
    let Some(user) = User::find_by_username(username.trim(), pool).await? else {
        return Err(AuthError::InvalidCredentials);
    };

    if !verify_password(password, &user.password_hash)? {
        return Err(AuthError::InvalidCredentials);
    }

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use sqlx::SqlitePool;

    async fn user_count(pool: &SqlitePool) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_register_then_authenticate() {
        let pool = db::memory().await.unwrap();

        let user = register("  alice ", "s3cret", &pool).await.unwrap();
        assert_eq!(user.username, "alice");
        assert_ne!(user.password_hash, "s3cret");

        let logged_in = authenticate("alice", "s3cret", &pool).await.unwrap();
        assert_eq!(logged_in.id, user.id);
    }

    #[tokio::test]
    async fn test_register_requires_both_fields() {
        let pool = db::memory().await.unwrap();

        assert!(matches!(
            register("   ", "pw", &pool).await,
            Err(AuthError::MissingCredentials)
        ));
        assert!(matches!(
            register("alice", "", &pool).await,
            Err(AuthError::MissingCredentials)
        ));
        assert_eq!(user_count(&pool).await, 0);
    }

    #[tokio::test]
    async fn test_duplicate_username_is_rejected() {
        let pool = db::memory().await.unwrap();
        register("alice", "one", &pool).await.unwrap();

        let second = register("alice", "two", &pool).await;
        assert!(matches!(second, Err(AuthError::UsernameTaken)));
        assert_eq!(second.unwrap_err().to_string(), "Username already exists");
        assert_eq!(user_count(&pool).await, 1);
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let pool = db::memory().await.unwrap();
        register("alice", "right", &pool).await.unwrap();

        let wrong_password = authenticate("alice", "wrong", &pool).await.unwrap_err();
        let unknown_user = authenticate("mallory", "right", &pool).await.unwrap_err();

        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert!(matches!(unknown_user, AuthError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    }
}
