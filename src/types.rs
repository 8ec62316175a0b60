//! Common type definitions for fixture record identifiers.
//!
//! Every fixture collection hands out auto-incrementing integer ids starting
//! at 1, matching the behavior of the backend this mock stands in for. The
//! aliases below exist purely for readability at call sites; there is no
//! integrity engine behind them.

/// Identifier assigned by a fixture collection.
pub type RecordId = i64;

pub type UserId = RecordId;
pub type OrganizationId = RecordId;
pub type OrganizationMembershipId = RecordId;
pub type ProjectId = RecordId;
pub type PostId = RecordId;
pub type CommentId = RecordId;
pub type PreviewId = RecordId;
pub type CategoryId = RecordId;
pub type SkillId = RecordId;
pub type RoleId = RecordId;
pub type SluggedRouteId = RecordId;
