use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewContact {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl NewContact {
    pub fn validate(&self) -> Result<(), String> {
        super::require_text("name", &self.name)?;
        super::check_email(self.email.as_deref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ContactUpdate {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.name {
            super::require_text("name", name)?;
        }
        super::check_email(self.email.as_deref())
    }

    pub fn apply(self, contact: &mut Contact) {
        if let Some(name) = self.name {
            contact.name = name;
        }
        if let Some(email) = self.email {
            contact.email = Some(email);
        }
        if let Some(phone) = self.phone {
            contact.phone = Some(phone);
        }
    }
}
