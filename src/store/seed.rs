//! Demo fixture set for interactive development.
//!
//! Seeding is optional (see `seed_demo_data` in [`crate::config`]); automated
//! callers usually start from an empty store and create exactly the records
//! a scenario needs.

use super::Fixtures;
use super::models::organizations::{Organization, OrganizationMembership, SluggedRoute};
use super::models::posts::{Comment, Post};
use super::models::projects::Project;
use super::models::taxonomy::{Category, Role, Skill};
use super::models::users::User;
use crate::markdown;
use chrono::Utc;

/// Populate `fixtures` with a small, internally consistent demo data set.
pub fn demo(fixtures: &mut Fixtures) {
    let now = Utc::now();

    let josh = fixtures.users.insert(|id| User {
        id,
        username: "joshsmith".to_string(),
        email: "josh@coderly.com".to_string(),
        first_name: Some("Josh".to_string()),
        last_name: Some("Smith".to_string()),
        state: "signed_up".to_string(),
    });
    let begona = fixtures.users.insert(|id| User {
        id,
        username: "begona".to_string(),
        email: "begona@example.com".to_string(),
        first_name: Some("Begoña".to_string()),
        last_name: None,
        state: "signed_up".to_string(),
    });

    let org = fixtures.organizations.insert(|id| Organization {
        id,
        name: "Code Corps".to_string(),
        slug: "code-corps".to_string(),
        description: Some("Open source software for social good".to_string()),
    });
    fixtures.slugged_routes.insert(|id| SluggedRoute {
        id,
        slug: org.slug.clone(),
        organization_id: org.id,
    });
    fixtures.organization_memberships.insert(|id| OrganizationMembership {
        id,
        organization_id: org.id,
        member_id: josh.id,
        role: "owner".to_string(),
    });

    let long_markdown = "A *donation engine* for open source projects.";
    let project = fixtures.projects.insert(|id| Project {
        id,
        organization_id: org.id,
        slug: "code-corps-ember".to_string(),
        title: "Code Corps Ember".to_string(),
        description: Some("The Code Corps web app".to_string()),
        long_description_markdown: Some(long_markdown.to_string()),
        long_description_body: Some(markdown::render(long_markdown)),
        inserted_at: now,
        updated_at: now,
    });

    for (number, (title, post_type, body)) in [
        ("Add markdown previews", "task", "We should render drafts before saving."),
        ("Mention detection misses offsets", "issue", "Repeated tokens like @joshsmith and @joshsmith report stale positions."),
        ("Idea: project activity feed", "idea", "Surface recent posts and comments per project."),
    ]
    .into_iter()
    .enumerate()
    {
        let post = fixtures.posts.insert(|id| Post {
            id,
            project_id: project.id,
            user_id: josh.id,
            number: number as i64 + 1,
            title: title.to_string(),
            post_type: post_type.to_string(),
            status: "open".to_string(),
            markdown: body.to_string(),
            body: markdown::render(body),
            inserted_at: now,
            updated_at: now,
        });
        let reply = format!("Thanks @{} , taking a look.", josh.username);
        fixtures.comments.insert(|id| Comment {
            id,
            post_id: post.id,
            user_id: Some(begona.id),
            markdown: reply.clone(),
            body: markdown::render(&reply),
            inserted_at: now,
            updated_at: now,
        });
    }

    for (name, description) in [
        ("Arts", Some("You want to improve the arts.")),
        ("Education", Some("You want to improve education.")),
        ("Technology", None),
    ] {
        fixtures.categories.insert(|id| Category {
            id,
            name: name.to_string(),
            description: description.map(str::to_string),
        });
    }

    for title in ["Ember.js", "Elixir", "Rails", "Design"] {
        fixtures.skills.insert(|id| Skill {
            id,
            title: title.to_string(),
            description: None,
        });
    }

    for (name, ability, kind) in [
        ("Backend Developer", "Backend Development", "technology"),
        ("Front End Developer", "Front End Development", "technology"),
        ("Designer", "Design", "creative"),
        ("Donor", "Donations", "support"),
    ] {
        fixtures.roles.insert(|id| Role {
            id,
            name: name.to_string(),
            ability: ability.to_string(),
            kind: kind.to_string(),
        });
    }
}
