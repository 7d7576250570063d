//! Owners, cooperators and benefits share one shape: a name plus an
//! optional description. Each lives in its own table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
pub struct NamedEntity {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewNamedEntity {
    pub name: String,
    pub description: Option<String>,
}

impl NewNamedEntity {
    pub fn validate(&self) -> Result<(), String> {
        super::require_text("name", &self.name)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamedEntityUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl NamedEntityUpdate {
    pub fn validate(&self) -> Result<(), String> {
        match &self.name {
            Some(name) => super::require_text("name", name),
            None => Ok(()),
        }
    }

    pub fn apply(self, entity: &mut NamedEntity) {
        if let Some(name) = self.name {
            entity.name = name;
        }
        if let Some(description) = self.description {
            entity.description = Some(description);
        }
    }
}
