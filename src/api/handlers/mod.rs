//! HTTP request handlers for all API endpoints.
//!
//! This module contains Axum route handlers organized by resource type.
//! Each handler is responsible for:
//! - Request validation and deserialization
//! - Fixture store reads/writes
//! - Derived-field rules (markdown rendering, mention scanning, numbering)
//! - Response serialization
//!
//! # Handler Modules
//!
//! - [`auth`]: Mock OAuth password-grant token endpoint
//! - [`mentions`]: Mention regeneration and retrieval for comments, posts, and previews
//! - [`organizations`]: Organizations, memberships, and slugged routes
//! - [`posts`]: Post, comment, and preview creation and updates
//! - [`projects`]: Project retrieval, updates, and paginated post listings
//! - [`slugs`]: Root-level organization/project slug resolution
//! - [`taxonomy`]: Categories, skills, roles, and per-user join records
//! - [`users`]: Current-user bootstrap, lookups, availability checks, profile updates
//!
//! # Error Handling
//!
//! Handlers return [`crate::errors::Error`] which automatically converts to
//! appropriate HTTP status codes and JSON error responses.

pub mod auth;
pub mod mentions;
pub mod organizations;
pub mod posts;
pub mod projects;
pub mod slugs;
pub mod taxonomy;
pub mod users;
