//! In-memory fixture store backing the mock API.
//!
//! This is the moral equivalent of a database layer, collapsed to what a mock
//! backend actually needs: one [`Fixtures`] value holding a typed [`Table`]
//! per entity, behind a single lock.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  (API request handlers)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │    Store    │  (lock acquisition)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │  Fixtures   │  (typed tables + lookup helpers)
//! └─────────────┘
//! ```
//!
//! The intended usage is one logical caller at a time (a test runner driving
//! a browser), so a plain `RwLock` around the whole store is sufficient and
//! keeps multi-table operations trivially consistent.
//!
//! # Ids
//!
//! Each table hands out auto-incrementing ids starting at 1. Removing a
//! record never reuses or compacts ids, mirroring the backend's sequences.

pub mod models;
pub mod seed;

use crate::types::{PostId, ProjectId, RecordId};
use models::mentions::{CommentUserMention, PostUserMention, PreviewUserMention};
use models::organizations::{Organization, OrganizationMembership, SluggedRoute};
use models::posts::{Comment, Post, Preview};
use models::projects::Project;
use models::taxonomy::{Category, Role, Skill, UserCategory, UserRole, UserSkill};
use models::users::User;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A fixture record that knows its own id.
pub trait Record {
    fn id(&self) -> RecordId;
}

/// A typed, ordered fixture collection with auto-incrementing ids.
#[derive(Debug)]
pub struct Table<T> {
    next_id: RecordId,
    rows: Vec<T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self { next_id: 1, rows: Vec::new() }
    }
}

impl<T: Record + Clone> Table<T> {
    /// Insert a record built from the next id, returning a copy of it.
    pub fn insert(&mut self, build: impl FnOnce(RecordId) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.push(row.clone());
        row
    }

    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.rows.iter().find(|r| r.id() == id)
    }

    pub fn get_mut(&mut self, id: RecordId) -> Option<&mut T> {
        self.rows.iter_mut().find(|r| r.id() == id)
    }

    /// Remove the record with the given id. Returns whether anything was removed.
    pub fn remove(&mut self, id: RecordId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|r| r.id() != id);
        self.rows.len() != before
    }

    /// Drop every record failing the predicate.
    pub fn retain(&mut self, keep: impl FnMut(&T) -> bool) {
        self.rows.retain(keep);
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.iter()
    }

    pub fn first(&self) -> Option<&T> {
        self.rows.first()
    }

    /// Clone out the whole collection in insertion order.
    pub fn all(&self) -> Vec<T> {
        self.rows.clone()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// All fixture collections for one mock session.
#[derive(Debug, Default)]
pub struct Fixtures {
    pub users: Table<User>,
    pub organizations: Table<Organization>,
    pub organization_memberships: Table<OrganizationMembership>,
    pub slugged_routes: Table<SluggedRoute>,
    pub projects: Table<Project>,
    pub posts: Table<Post>,
    pub comments: Table<Comment>,
    pub previews: Table<Preview>,
    pub categories: Table<Category>,
    pub skills: Table<Skill>,
    pub roles: Table<Role>,
    pub user_categories: Table<UserCategory>,
    pub user_roles: Table<UserRole>,
    pub user_skills: Table<UserSkill>,
    pub comment_user_mentions: Table<CommentUserMention>,
    pub post_user_mentions: Table<PostUserMention>,
    pub preview_user_mentions: Table<PreviewUserMention>,
}

impl Fixtures {
    pub fn user_by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    pub fn organization_by_slug(&self, slug: &str) -> Option<&Organization> {
        self.organizations.iter().find(|o| o.slug == slug)
    }

    pub fn slugged_route_by_slug(&self, slug: &str) -> Option<&SluggedRoute> {
        self.slugged_routes.iter().find(|r| r.slug == slug)
    }

    /// Posts belonging to a project, in insertion order.
    pub fn posts_for_project(&self, project_id: ProjectId) -> Vec<Post> {
        self.posts.iter().filter(|p| p.project_id == project_id).cloned().collect()
    }

    /// Look up a post by its project-scoped display number.
    pub fn post_by_number(&self, project_id: ProjectId, number: i64) -> Option<&Post> {
        self.posts.iter().find(|p| p.project_id == project_id && p.number == number)
    }

    pub fn comments_for_post(&self, post_id: PostId) -> Vec<Comment> {
        self.comments.iter().filter(|c| c.post_id == post_id).cloned().collect()
    }

    /// Display number for the next post created in a project: current post
    /// count plus one. Deleted posts still shrink the count, so numbers can
    /// repeat after deletions; the backend being mocked has the same quirk.
    pub fn next_post_number(&self, project_id: ProjectId) -> i64 {
        self.posts.iter().filter(|p| p.project_id == project_id).count() as i64 + 1
    }
}

/// Shared handle to the fixture store.
#[derive(Debug, Default)]
pub struct Store {
    inner: RwLock<Fixtures>,
}

impl Store {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the demo fixture set.
    pub fn seeded() -> Self {
        let mut fixtures = Fixtures::default();
        seed::demo(&mut fixtures);
        Self {
            inner: RwLock::new(fixtures),
        }
    }

    /// Acquire the store for reading. Recovers from poisoning: a panicking
    /// handler must not wedge every subsequent request in a dev session.
    pub fn read(&self) -> RwLockReadGuard<'_, Fixtures> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    /// Acquire the store for writing. See [`Store::read`] on poisoning.
    pub fn write(&self) -> RwLockWriteGuard<'_, Fixtures> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_ids_start_at_one_and_never_reuse() {
        let mut table: Table<User> = Table::default();
        let first = table.insert(User::placeholder);
        let second = table.insert(User::placeholder);
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        assert!(table.remove(second.id));
        let third = table.insert(User::placeholder);
        assert_eq!(third.id, 3);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_table_remove_missing_is_noop() {
        let mut table: Table<User> = Table::default();
        table.insert(User::placeholder);
        assert!(!table.remove(99));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_next_post_number_is_scoped_to_project() {
        let store = Store::seeded();
        let fixtures = store.read();
        let project = fixtures.projects.first().expect("seed has a project");
        let count = fixtures.posts_for_project(project.id).len() as i64;
        assert_eq!(fixtures.next_post_number(project.id), count + 1);
        // A project with no posts starts numbering at 1
        assert_eq!(fixtures.next_post_number(9999), 1);
    }

    #[test]
    fn test_seeded_store_cross_references() {
        let store = Store::seeded();
        let fixtures = store.read();
        assert!(!fixtures.users.is_empty());

        // Every slugged route points at a real organization
        for route in fixtures.slugged_routes.iter() {
            assert!(fixtures.organizations.get(route.organization_id).is_some());
        }
        // Every post points at a real project
        for post in fixtures.posts.iter() {
            assert!(fixtures.projects.get(post.project_id).is_some());
        }
    }
}
