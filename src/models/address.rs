use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
pub struct Address {
    pub id: i64,
    pub city: String,
    pub county: Option<String>,
    pub postal_code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewAddress {
    pub city: String,
    pub county: Option<String>,
    pub postal_code: Option<String>,
}

impl NewAddress {
    pub fn validate(&self) -> Result<(), String> {
        super::require_text("city", &self.city)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddressUpdate {
    pub city: Option<String>,
    pub county: Option<String>,
    pub postal_code: Option<String>,
}

impl AddressUpdate {
    pub fn validate(&self) -> Result<(), String> {
        match &self.city {
            Some(city) => super::require_text("city", city),
            None => Ok(()),
        }
    }

    pub fn apply(self, address: &mut Address) {
        if let Some(city) = self.city {
            address.city = city;
        }
        if let Some(county) = self.county {
            address.county = Some(county);
        }
        if let Some(postal_code) = self.postal_code {
            address.postal_code = Some(postal_code);
        }
    }
}
