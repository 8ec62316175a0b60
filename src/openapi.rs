//! OpenAPI documentation for the mock API, served at `/docs`.

use crate::api::handlers;
use crate::api::models::{auth, mentions, organizations, pagination, posts, projects, taxonomy, users};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "backdrop",
        description = "In-memory mock of the Code Corps API for frontend development and acceptance testing."
    ),
    paths(
        handlers::auth::create_token,
        handlers::users::current_user,
        handlers::users::get_user,
        handlers::users::email_available,
        handlers::users::username_available,
        handlers::users::update_current_user,
        handlers::organizations::list_organizations,
        handlers::organizations::get_organization,
        handlers::organizations::list_memberships,
        handlers::organizations::create_membership,
        handlers::organizations::get_membership,
        handlers::organizations::update_membership,
        handlers::organizations::delete_membership,
        handlers::projects::list_projects,
        handlers::projects::get_project,
        handlers::projects::update_project,
        handlers::projects::list_project_posts,
        handlers::projects::get_project_post,
        handlers::posts::create_post,
        handlers::posts::update_post,
        handlers::posts::list_post_comments,
        handlers::posts::create_comment,
        handlers::posts::update_comment,
        handlers::posts::create_preview,
        handlers::mentions::list_comment_mentions,
        handlers::mentions::list_post_mentions,
        handlers::mentions::list_preview_mentions,
        handlers::taxonomy::list_categories,
        handlers::taxonomy::list_skills,
        handlers::taxonomy::get_skill,
        handlers::taxonomy::list_roles,
        handlers::taxonomy::list_user_categories,
        handlers::taxonomy::create_user_category,
        handlers::taxonomy::get_user_category,
        handlers::taxonomy::delete_user_category,
        handlers::taxonomy::create_user_role,
        handlers::taxonomy::delete_user_role,
        handlers::taxonomy::list_user_skills,
        handlers::taxonomy::create_user_skill,
        handlers::taxonomy::delete_user_skill,
        handlers::slugs::get_slugged_route,
        handlers::slugs::list_organization_projects,
        handlers::slugs::get_organization_project,
    ),
    components(schemas(
        auth::TokenRequest,
        auth::TokenResponse,
        users::UserResponse,
        users::UserUpdate,
        users::AvailabilityResponse,
        organizations::OrganizationResponse,
        organizations::OrganizationMembershipResponse,
        organizations::OrganizationMembershipCreate,
        organizations::OrganizationMembershipUpdate,
        organizations::SluggedRouteResponse,
        projects::ProjectResponse,
        projects::ProjectUpdate,
        posts::PostResponse,
        posts::PostCreate,
        posts::PostUpdate,
        posts::CommentResponse,
        posts::CommentCreate,
        posts::CommentUpdate,
        posts::PreviewResponse,
        posts::PreviewCreate,
        mentions::CommentUserMentionResponse,
        mentions::PostUserMentionResponse,
        mentions::PreviewUserMentionResponse,
        taxonomy::CategoryResponse,
        taxonomy::SkillResponse,
        taxonomy::RoleResponse,
        taxonomy::UserCategoryResponse,
        taxonomy::UserCategoryCreate,
        taxonomy::UserRoleResponse,
        taxonomy::UserRoleCreate,
        taxonomy::UserSkillResponse,
        taxonomy::UserSkillCreate,
        pagination::PageMeta,
    )),
    tags(
        (name = "auth", description = "Mock OAuth token endpoint"),
        (name = "users", description = "Users and onboarding"),
        (name = "organizations", description = "Organizations and memberships"),
        (name = "projects", description = "Projects and their posts"),
        (name = "posts", description = "Posts, comments, and previews"),
        (name = "mentions", description = "Mention annotations"),
        (name = "taxonomy", description = "Categories, skills, and roles"),
        (name = "slugs", description = "Slug resolution")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::OpenApi;

    #[test]
    fn test_openapi_spec_builds() {
        let spec = ApiDoc::openapi();
        let json = spec.to_json().expect("spec serializes");
        assert!(json.contains("/oauth/token"));
        assert!(json.contains("/comment_user_mentions"));
    }
}
