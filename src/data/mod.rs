pub mod filter;
pub mod models;
pub mod store;

pub use filter::{CategoryFilter, ALL_CATEGORIES};
pub use models::{Category, Organization, Project, SocialLink};
pub use store::{DataError, DataSource, DataStore, DirectorySource, HttpSource};
