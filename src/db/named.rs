//! Access functions shared by the owner, cooperator and benefit tables.

use sqlx::PgPool;

use crate::models::{NamedEntity, NamedEntityUpdate, NewNamedEntity};

/// A table holding `NamedEntity` rows.
pub trait NamedKind: Send + Sync + 'static {
    const TABLE: &'static str;
    /// Singular, capitalized, used in client-facing messages.
    const LABEL: &'static str;
}

pub struct Owners;
pub struct Cooperators;
pub struct Benefits;

impl NamedKind for Owners {
    const TABLE: &'static str = "owners";
    const LABEL: &'static str = "Owner";
}

impl NamedKind for Cooperators {
    const TABLE: &'static str = "cooperators";
    const LABEL: &'static str = "Cooperator";
}

impl NamedKind for Benefits {
    const TABLE: &'static str = "benefits";
    const LABEL: &'static str = "Benefit";
}

pub async fn list<K: NamedKind>(
    pool: &PgPool,
    offset: i64,
    limit: i64,
) -> Result<Vec<NamedEntity>, sqlx::Error> {
    let sql = format!("SELECT * FROM {} ORDER BY id LIMIT $1 OFFSET $2", K::TABLE);
    sqlx::query_as::<_, NamedEntity>(&sql)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
}

pub async fn find_by_id<K: NamedKind>(
    pool: &PgPool,
    id: i64,
) -> Result<Option<NamedEntity>, sqlx::Error> {
    let sql = format!("SELECT * FROM {} WHERE id = $1", K::TABLE);
    sqlx::query_as::<_, NamedEntity>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create<K: NamedKind>(
    pool: &PgPool,
    new: &NewNamedEntity,
) -> Result<NamedEntity, sqlx::Error> {
    let sql = format!(
        "INSERT INTO {} (name, description) VALUES ($1, $2) RETURNING *",
        K::TABLE
    );
    sqlx::query_as::<_, NamedEntity>(&sql)
        .bind(&new.name)
        .bind(&new.description)
        .fetch_one(pool)
        .await
}

pub async fn update<K: NamedKind>(
    pool: &PgPool,
    id: i64,
    changes: NamedEntityUpdate,
) -> Result<Option<NamedEntity>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let select = format!("SELECT * FROM {} WHERE id = $1 FOR UPDATE", K::TABLE);
    let Some(mut entity) = sqlx::query_as::<_, NamedEntity>(&select)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
    else {
        return Ok(None);
    };

    changes.apply(&mut entity);

    let update = format!(
        "UPDATE {} SET name = $2, description = $3, updated_at = now()
         WHERE id = $1 RETURNING *",
        K::TABLE
    );
    let entity = sqlx::query_as::<_, NamedEntity>(&update)
        .bind(id)
        .bind(&entity.name)
        .bind(&entity.description)
        .fetch_one(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(Some(entity))
}

pub async fn delete<K: NamedKind>(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let sql = format!("DELETE FROM {} WHERE id = $1", K::TABLE);
    let result = sqlx::query(&sql).bind(id).execute(pool).await?;
    Ok(result.rows_affected() > 0)
}
