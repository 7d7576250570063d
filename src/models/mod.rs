pub mod address;
pub mod contact;
pub mod location;
pub mod named;
pub mod project;
pub mod user;

pub use address::{Address, AddressUpdate, NewAddress};
pub use contact::{Contact, ContactUpdate, NewContact};
pub use location::{Location, LocationUpdate, NewLocation};
pub use named::{NamedEntity, NamedEntityUpdate, NewNamedEntity};
pub use project::{
    LinkChanges, ManagementLevel, NewProject, Project, ProjectDetail, ProjectLinks,
    ProjectStatus, ProjectUpdate, Sector,
};
pub use user::{NewUser, User, UserRole};

/// Reject blank values for a required text field.
pub(crate) fn require_text(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} must not be empty"));
    }
    Ok(())
}

/// Loose address shape check: `local@domain.tld` with no whitespace.
pub(crate) fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// Check an optional email field when it is present.
pub(crate) fn check_email(email: Option<&str>) -> Result<(), String> {
    match email {
        Some(email) if !looks_like_email(email) => {
            Err("email must be a valid email address".to_string())
        }
        _ => Ok(()),
    }
}
