use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub address_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewLocation {
    pub name: String,
    pub description: Option<String>,
    pub address_id: i64,
}

impl NewLocation {
    pub fn validate(&self) -> Result<(), String> {
        super::require_text("name", &self.name)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub address_id: Option<i64>,
}

impl LocationUpdate {
    pub fn validate(&self) -> Result<(), String> {
        match &self.name {
            Some(name) => super::require_text("name", name),
            None => Ok(()),
        }
    }

    pub fn apply(self, location: &mut Location) {
        if let Some(name) = self.name {
            location.name = name;
        }
        if let Some(description) = self.description {
            location.description = Some(description);
        }
        if let Some(address_id) = self.address_id {
            location.address_id = address_id;
        }
    }
}
