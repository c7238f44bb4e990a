pub mod profile;
pub mod query;
pub mod settings;
