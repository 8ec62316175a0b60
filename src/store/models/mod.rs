//! Fixture record structures.
//!
//! Plain records with foreign-key style id fields. There is no integrity
//! engine: a record can reference an id that was never inserted, exactly like
//! the fixture database this mock reproduces.

pub mod mentions;
pub mod organizations;
pub mod posts;
pub mod projects;
pub mod taxonomy;
pub mod users;
