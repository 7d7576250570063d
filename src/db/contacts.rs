use sqlx::PgPool;

use crate::models::{Contact, ContactUpdate, NewContact};

pub async fn list(pool: &PgPool, offset: i64, limit: i64) -> Result<Vec<Contact>, sqlx::Error> {
    sqlx::query_as::<_, Contact>("SELECT * FROM contacts ORDER BY id LIMIT $1 OFFSET $2")
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Contact>, sqlx::Error> {
    sqlx::query_as::<_, Contact>("SELECT * FROM contacts WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(pool: &PgPool, new: &NewContact) -> Result<Contact, sqlx::Error> {
    sqlx::query_as::<_, Contact>(
        "INSERT INTO contacts (name, email, phone) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(&new.name)
    .bind(&new.email)
    .bind(&new.phone)
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: i64,
    changes: ContactUpdate,
) -> Result<Option<Contact>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let Some(mut contact) =
        sqlx::query_as::<_, Contact>("SELECT * FROM contacts WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
    else {
        return Ok(None);
    };

    changes.apply(&mut contact);

    let contact = sqlx::query_as::<_, Contact>(
        "UPDATE contacts SET name = $2, email = $3, phone = $4, updated_at = now()
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(&contact.name)
    .bind(&contact.email)
    .bind(&contact.phone)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(Some(contact))
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
