use sqlx::PgPool;

use crate::models::{Address, AddressUpdate, NewAddress};

pub async fn list(pool: &PgPool, offset: i64, limit: i64) -> Result<Vec<Address>, sqlx::Error> {
    sqlx::query_as::<_, Address>("SELECT * FROM addresses ORDER BY id LIMIT $1 OFFSET $2")
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Address>, sqlx::Error> {
    sqlx::query_as::<_, Address>("SELECT * FROM addresses WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(pool: &PgPool, new: &NewAddress) -> Result<Address, sqlx::Error> {
    sqlx::query_as::<_, Address>(
        "INSERT INTO addresses (city, county, postal_code) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(&new.city)
    .bind(&new.county)
    .bind(&new.postal_code)
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: i64,
    changes: AddressUpdate,
) -> Result<Option<Address>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let Some(mut address) =
        sqlx::query_as::<_, Address>("SELECT * FROM addresses WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
    else {
        return Ok(None);
    };

    changes.apply(&mut address);

    let address = sqlx::query_as::<_, Address>(
        "UPDATE addresses SET city = $2, county = $3, postal_code = $4, updated_at = now()
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(&address.city)
    .bind(&address.county)
    .bind(&address.postal_code)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(Some(address))
}

/// Fails with a foreign key violation while a location still points at the address.
pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM addresses WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
