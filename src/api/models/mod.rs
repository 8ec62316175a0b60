//! API request/response models, grouped by resource.

pub mod auth;
pub mod mentions;
pub mod organizations;
pub mod pagination;
pub mod posts;
pub mod projects;
pub mod taxonomy;
pub mod users;
