pub mod addresses;
pub mod contacts;
pub mod locations;
pub mod named;
pub mod projects;
pub mod seed;
pub mod users;
