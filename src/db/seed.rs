use sqlx::PgPool;

use crate::auth::password;
use crate::db;
use crate::error::AppError;
use crate::models::UserRole;

/// Accounts created by the initialization routine: (username, password, role).
pub const DEFAULT_USERS: &[(&str, &str, UserRole)] = &[
    ("admin", "admin123", UserRole::Admin),
    ("pm1", "manager123", UserRole::User),
    ("pm2", "manager123", UserRole::User),
    ("analyst1", "analyst123", UserRole::User),
    ("analyst2", "analyst123", UserRole::User),
    ("viewer1", "viewer123", UserRole::User),
    ("viewer2", "viewer123", UserRole::User),
];

pub const DEFAULT_EMAIL_DOMAIN: &str = "kart.com";

/// Insert the default accounts in one transaction. Accounts whose username or
/// email already exist are skipped, so running this twice is harmless.
/// Returns the number of accounts created.
pub async fn seed_default_users(pool: &PgPool) -> Result<u64, AppError> {
    let mut tx = pool.begin().await?;
    let mut created = 0;

    for (username, plain, role) in DEFAULT_USERS {
        let email = format!("{username}@{DEFAULT_EMAIL_DOMAIN}");
        let hash = password::hash(plain).map_err(AppError::Internal)?;
        if db::users::create_if_absent(&mut *tx, username, &email, &hash, *role).await? {
            tracing::info!(username, "Created default user");
            created += 1;
        }
    }

    tx.commit().await?;
    Ok(created)
}
