use sqlx::{PgConnection, PgPool};

use crate::error::AppError;
use crate::models::{LinkChanges, NewProject, Project, ProjectDetail, ProjectUpdate};

/// Project columns plus the linked ids of every join table.
const DETAIL_SELECT: &str = "SELECT p.*,
    ARRAY(SELECT owner_id FROM project_owners WHERE project_id = p.id ORDER BY owner_id) AS owner_ids,
    ARRAY(SELECT cooperator_id FROM project_cooperators WHERE project_id = p.id ORDER BY cooperator_id) AS cooperator_ids,
    ARRAY(SELECT benefit_id FROM project_benefits WHERE project_id = p.id ORDER BY benefit_id) AS benefit_ids,
    ARRAY(SELECT contact_id FROM project_contacts WHERE project_id = p.id ORDER BY contact_id) AS contact_ids,
    ARRAY(SELECT location_id FROM project_locations WHERE project_id = p.id ORDER BY location_id) AS location_ids
    FROM projects p";

/// A many-to-many relation hanging off `projects`.
#[derive(Debug, Clone, Copy)]
enum Relation {
    Owners,
    Cooperators,
    Benefits,
    Contacts,
    Locations,
}

impl Relation {
    fn table(self) -> &'static str {
        match self {
            Relation::Owners => "project_owners",
            Relation::Cooperators => "project_cooperators",
            Relation::Benefits => "project_benefits",
            Relation::Contacts => "project_contacts",
            Relation::Locations => "project_locations",
        }
    }

    fn column(self) -> &'static str {
        match self {
            Relation::Owners => "owner_id",
            Relation::Cooperators => "cooperator_id",
            Relation::Benefits => "benefit_id",
            Relation::Contacts => "contact_id",
            Relation::Locations => "location_id",
        }
    }
}

pub async fn list(pool: &PgPool, offset: i64, limit: i64) -> Result<Vec<ProjectDetail>, sqlx::Error> {
    let sql = format!("{DETAIL_SELECT} ORDER BY p.id LIMIT $1 OFFSET $2");
    sqlx::query_as::<_, ProjectDetail>(&sql)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
}

pub async fn find_by_id<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    id: i64,
) -> Result<Option<ProjectDetail>, sqlx::Error> {
    let sql = format!("{DETAIL_SELECT} WHERE p.id = $1");
    sqlx::query_as::<_, ProjectDetail>(&sql)
        .bind(id)
        .fetch_optional(executor)
        .await
}

pub async fn create(pool: &PgPool, new: &NewProject) -> Result<ProjectDetail, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let project = sqlx::query_as::<_, Project>(
        "INSERT INTO projects
            (title, description, status, start_year, end_year, sector, management_level, link, notes)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *",
    )
    .bind(&new.title)
    .bind(&new.description)
    .bind(new.status)
    .bind(new.start_year)
    .bind(new.end_year)
    .bind(new.sector)
    .bind(new.management_level)
    .bind(&new.link)
    .bind(&new.notes)
    .fetch_one(&mut *tx)
    .await?;

    let links = new.links();
    add_links(&mut tx, project.id, Relation::Owners, &links.owner_ids).await?;
    add_links(&mut tx, project.id, Relation::Cooperators, &links.cooperator_ids).await?;
    add_links(&mut tx, project.id, Relation::Benefits, &links.benefit_ids).await?;
    add_links(&mut tx, project.id, Relation::Contacts, &links.contact_ids).await?;
    add_links(&mut tx, project.id, Relation::Locations, &links.location_ids).await?;

    let detail = find_by_id(&mut *tx, project.id)
        .await?
        .ok_or(sqlx::Error::RowNotFound)?;

    tx.commit().await?;
    Ok(detail)
}

/// Apply a partial update and replace every link set it carries.
/// Validation of the merged record surfaces as `AppError::Validation`.
pub async fn update(
    pool: &PgPool,
    id: i64,
    changes: ProjectUpdate,
) -> Result<Option<ProjectDetail>, AppError> {
    let write_err = |e: sqlx::Error| AppError::from_write(e, "Project");
    let mut tx = pool.begin().await?;

    let Some(mut project) =
        sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
    else {
        return Ok(None);
    };

    let link_changes = changes.apply(&mut project).map_err(AppError::Validation)?;

    sqlx::query(
        "UPDATE projects SET title = $2, description = $3, status = $4, start_year = $5,
            end_year = $6, sector = $7, management_level = $8, link = $9, notes = $10,
            updated_at = now()
         WHERE id = $1",
    )
    .bind(id)
    .bind(&project.title)
    .bind(&project.description)
    .bind(project.status)
    .bind(project.start_year)
    .bind(project.end_year)
    .bind(project.sector)
    .bind(project.management_level)
    .bind(&project.link)
    .bind(&project.notes)
    .execute(&mut *tx)
    .await
    .map_err(write_err)?;

    apply_link_changes(&mut tx, id, link_changes)
        .await
        .map_err(write_err)?;

    let detail = find_by_id(&mut *tx, id).await?;
    tx.commit().await?;
    Ok(detail)
}

/// Join rows go with the project through `ON DELETE CASCADE`.
pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

async fn apply_link_changes(
    conn: &mut PgConnection,
    project_id: i64,
    changes: LinkChanges,
) -> Result<(), sqlx::Error> {
    let relations = [
        (Relation::Owners, changes.owner_ids),
        (Relation::Cooperators, changes.cooperator_ids),
        (Relation::Benefits, changes.benefit_ids),
        (Relation::Contacts, changes.contact_ids),
        (Relation::Locations, changes.location_ids),
    ];

    for (relation, ids) in relations {
        if let Some(ids) = ids {
            replace_links(conn, project_id, relation, &ids).await?;
        }
    }
    Ok(())
}

async fn replace_links(
    conn: &mut PgConnection,
    project_id: i64,
    relation: Relation,
    ids: &[i64],
) -> Result<(), sqlx::Error> {
    let sql = format!("DELETE FROM {} WHERE project_id = $1", relation.table());
    sqlx::query(&sql).bind(project_id).execute(&mut *conn).await?;
    add_links(conn, project_id, relation, ids).await
}

/// Duplicate ids collapse onto the (project_id, other_id) primary key.
async fn add_links(
    conn: &mut PgConnection,
    project_id: i64,
    relation: Relation,
    ids: &[i64],
) -> Result<(), sqlx::Error> {
    if ids.is_empty() {
        return Ok(());
    }

    let sql = format!(
        "INSERT INTO {} (project_id, {}) SELECT $1, UNNEST($2::BIGINT[]) ON CONFLICT DO NOTHING",
        relation.table(),
        relation.column()
    );
    sqlx::query(&sql)
        .bind(project_id)
        .bind(ids)
        .execute(conn)
        .await?;
    Ok(())
}
