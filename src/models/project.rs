use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "project_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    #[default]
    Draft,
    InProgress,
    Completed,
    OnHold,
    Cancelled,
    Postponed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "project_sector", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sector {
    Education,
    Health,
    Infrastructure,
    Transport,
    Environment,
    Energy,
    Economy,
    Agriculture,
    Culture,
    Social,
    Digital,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "management_level", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ManagementLevel {
    National,
    Regional,
    Local,
}

/// A row of the `projects` table.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub sector: Option<Sector>,
    pub management_level: Option<ManagementLevel>,
    pub link: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Ids linked to a project through the join tables, each sorted ascending.
#[derive(Debug, Clone, Default, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
pub struct ProjectLinks {
    pub owner_ids: Vec<i64>,
    pub cooperator_ids: Vec<i64>,
    pub benefit_ids: Vec<i64>,
    pub contact_ids: Vec<i64>,
    pub location_ids: Vec<i64>,
}

/// A project as served over the API: its row plus its links.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
pub struct ProjectDetail {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub project: Project,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub links: ProjectLinks,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewProject {
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub status: ProjectStatus,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub sector: Option<Sector>,
    pub management_level: Option<ManagementLevel>,
    pub link: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub owner_ids: Vec<i64>,
    #[serde(default)]
    pub cooperator_ids: Vec<i64>,
    #[serde(default)]
    pub benefit_ids: Vec<i64>,
    #[serde(default)]
    pub contact_ids: Vec<i64>,
    #[serde(default)]
    pub location_ids: Vec<i64>,
}

impl NewProject {
    pub fn validate(&self) -> Result<(), String> {
        super::require_text("title", &self.title)?;
        check_years(self.start_year, self.end_year)
    }

    pub fn links(&self) -> ProjectLinks {
        ProjectLinks {
            owner_ids: self.owner_ids.clone(),
            cooperator_ids: self.cooperator_ids.clone(),
            benefit_ids: self.benefit_ids.clone(),
            contact_ids: self.contact_ids.clone(),
            location_ids: self.location_ids.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub sector: Option<Sector>,
    pub management_level: Option<ManagementLevel>,
    pub link: Option<String>,
    pub notes: Option<String>,
    pub owner_ids: Option<Vec<i64>>,
    pub cooperator_ids: Option<Vec<i64>>,
    pub benefit_ids: Option<Vec<i64>>,
    pub contact_ids: Option<Vec<i64>>,
    pub location_ids: Option<Vec<i64>>,
}

/// Link lists carried by a partial update; `None` leaves that relation alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkChanges {
    pub owner_ids: Option<Vec<i64>>,
    pub cooperator_ids: Option<Vec<i64>>,
    pub benefit_ids: Option<Vec<i64>>,
    pub contact_ids: Option<Vec<i64>>,
    pub location_ids: Option<Vec<i64>>,
}

impl ProjectUpdate {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(title) = &self.title {
            super::require_text("title", title)?;
        }
        Ok(())
    }

    /// Copy every present field onto `project` and hand back the link changes.
    /// The year ordering is checked against the merged result.
    pub fn apply(self, project: &mut Project) -> Result<LinkChanges, String> {
        if let Some(title) = self.title {
            project.title = title;
        }
        if let Some(description) = self.description {
            project.description = Some(description);
        }
        if let Some(status) = self.status {
            project.status = status;
        }
        if let Some(start_year) = self.start_year {
            project.start_year = Some(start_year);
        }
        if let Some(end_year) = self.end_year {
            project.end_year = Some(end_year);
        }
        if let Some(sector) = self.sector {
            project.sector = Some(sector);
        }
        if let Some(level) = self.management_level {
            project.management_level = Some(level);
        }
        if let Some(link) = self.link {
            project.link = Some(link);
        }
        if let Some(notes) = self.notes {
            project.notes = Some(notes);
        }
        check_years(project.start_year, project.end_year)?;

        Ok(LinkChanges {
            owner_ids: self.owner_ids,
            cooperator_ids: self.cooperator_ids,
            benefit_ids: self.benefit_ids,
            contact_ids: self.contact_ids,
            location_ids: self.location_ids,
        })
    }
}

fn check_years(start: Option<i32>, end: Option<i32>) -> Result<(), String> {
    match (start, end) {
        (Some(start), Some(end)) if end < start => {
            Err("end_year must not be before start_year".to_string())
        }
        _ => Ok(()),
    }
}
