//! # backdrop: In-Memory Mock of the Code Corps API
//!
//! `backdrop` is a stand-in HTTP backend for the Code Corps frontend. It
//! serves the slice of the real API the client exercises during development
//! and acceptance testing, backed entirely by an in-memory fixture store --
//! no database, no external services, instant startup, and a clean slate on
//! every restart.
//!
//! ## Overview
//!
//! The server mimics the observable behavior of the production backend
//! rather than its implementation: markdown fields are "rendered" by a
//! trivial paragraph wrapper, post numbers auto-increment within their
//! project, `@username` mentions are scanned out of bodies and returned as
//! annotation records with character offsets, and the OAuth token endpoint
//! accepts exactly one configured credential pair. Anything the frontend
//! can observe is faithful; everything else is as simple as possible.
//!
//! ## Architecture
//!
//! The application is built on [Axum](https://github.com/tokio-rs/axum) for
//! the HTTP layer. All state lives in [`store::Store`], a single
//! lock-protected collection of typed fixture tables. Handlers in
//! [`api::handlers`] apply the derived-field rules inline; there is no
//! background machinery.
//!
//! ## Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use backdrop::{Application, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let args = backdrop::config::Args::parse();
//!     let config = Config::load(&args)?;
//!
//!     backdrop::telemetry::init_telemetry()?;
//!
//!     let app = Application::new(config)?;
//!     app.serve(async {
//!         tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
//!     })
//!     .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! See the [`config`] module for configuration options.

pub mod api;
pub mod config;
pub mod errors;
pub mod markdown;
pub mod mentions;
mod openapi;
pub mod store;
pub mod telemetry;
mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

use crate::config::CorsOrigin;
use crate::openapi::ApiDoc;
use axum::http::HeaderValue;
use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use bon::Builder;
pub use config::Config;
use std::sync::Arc;
use store::Store;
use tokio::net::TcpListener;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{Level, debug, info, instrument};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

pub use types::{
    CategoryId, CommentId, OrganizationId, OrganizationMembershipId, PostId, PreviewId, ProjectId, RecordId, RoleId, SkillId,
    SluggedRouteId, UserId,
};

/// Application state shared across all request handlers.
#[derive(Clone, Builder)]
pub struct AppState {
    pub store: Arc<Store>,
    pub config: Config,
}

/// Create CORS layer from configuration
fn create_cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let mut origins = Vec::new();
    for origin in &config.cors.allowed_origins {
        let header_value = match origin {
            CorsOrigin::Wildcard => "*".parse::<HeaderValue>()?,
            CorsOrigin::Url(url) => url.as_str().parse::<HeaderValue>()?,
        };
        origins.push(header_value);
    }

    let mut cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(config.cors.allow_credentials);

    if let Some(max_age) = config.cors.max_age {
        cors = cors.max_age(std::time::Duration::from_secs(max_age));
    }

    Ok(cors)
}

/// Build the application router with all endpoints and middleware.
///
/// Fixed resource routes are registered before the root-level slug captures;
/// axum prefers static segments, so `/projects` and friends never fall
/// through to slug resolution.
#[instrument(skip_all)]
pub fn build_router(state: &AppState) -> anyhow::Result<Router> {
    use api::handlers::{auth, mentions, organizations, posts, projects, slugs, taxonomy, users};

    let router = Router::new()
        .route("/oauth/token", post(auth::create_token))
        .route("/user", get(users::current_user))
        .route("/users/email_available", get(users::email_available))
        .route("/users/username_available", get(users::username_available))
        .route("/users/me", patch(users::update_current_user))
        .route("/users/{user_id}", get(users::get_user))
        .route("/organizations", get(organizations::list_organizations))
        .route("/organizations/{organization_id}", get(organizations::get_organization))
        .route(
            "/organization_memberships",
            get(organizations::list_memberships).post(organizations::create_membership),
        )
        .route(
            "/organization_memberships/{membership_id}",
            get(organizations::get_membership)
                .patch(organizations::update_membership)
                .delete(organizations::delete_membership),
        )
        .route("/projects", get(projects::list_projects))
        .route(
            "/projects/{project_id}",
            get(projects::get_project).patch(projects::update_project),
        )
        .route("/projects/{project_id}/posts", get(projects::list_project_posts))
        .route("/projects/{project_id}/posts/{number}", get(projects::get_project_post))
        .route("/posts", post(posts::create_post))
        .route("/posts/{post_id}", patch(posts::update_post))
        .route("/posts/{post_id}/comments", get(posts::list_post_comments))
        .route("/comments", post(posts::create_comment))
        .route("/comments/{comment_id}", patch(posts::update_comment))
        .route("/previews", post(posts::create_preview))
        .route("/comment_user_mentions", get(mentions::list_comment_mentions))
        .route("/post_user_mentions", get(mentions::list_post_mentions))
        .route("/preview_user_mentions", get(mentions::list_preview_mentions))
        .route("/categories", get(taxonomy::list_categories))
        .route("/skills", get(taxonomy::list_skills))
        .route("/skills/{skill_id}", get(taxonomy::get_skill))
        .route("/roles", get(taxonomy::list_roles))
        .route(
            "/user_categories",
            get(taxonomy::list_user_categories).post(taxonomy::create_user_category),
        )
        .route(
            "/user_categories/{id}",
            get(taxonomy::get_user_category).delete(taxonomy::delete_user_category),
        )
        .route("/user_roles", post(taxonomy::create_user_role))
        .route("/user_roles/{id}", delete(taxonomy::delete_user_role))
        .route("/user_skills", get(taxonomy::list_user_skills).post(taxonomy::create_user_skill))
        .route("/user_skills/{id}", delete(taxonomy::delete_user_skill))
        .route("/healthz", get(|| async { "OK" }))
        .route("/api-docs/openapi.json", get(|| async { axum::Json(ApiDoc::openapi()) }))
        // Root-level slug fallbacks, matched only when nothing above does
        .route("/{slug}", get(slugs::get_slugged_route))
        .route("/{slug}/projects", get(slugs::list_organization_projects))
        .route("/{slug}/{project_slug}", get(slugs::get_organization_project))
        .with_state(state.clone())
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()));

    let cors_layer = create_cors_layer(&state.config)?;

    let router = router.layer(cors_layer).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    );

    Ok(router)
}

/// The assembled application, ready to serve.
pub struct Application {
    router: Router,
    config: Config,
}

impl Application {
    /// Create a new application instance with the store initialized.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        debug!("Starting mock API with configuration: {:#?}", config);

        let store = if config.seed_demo_data { Store::seeded() } else { Store::new() };
        let state = AppState::builder().store(Arc::new(store)).config(config.clone()).build();
        let router = build_router(&state)?;

        Ok(Self { router, config })
    }

    /// Start serving the application
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!("Mock API listening on http://{bind_addr}");

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::test_utils::*;

    #[test_log::test(tokio::test)]
    async fn test_healthz() {
        let (server, _state) = create_test_app(false).await;
        let response = server.get("/healthz").await;
        response.assert_status_ok();
        response.assert_text("OK");
    }

    #[test_log::test(tokio::test)]
    async fn test_docs_served() {
        let (server, _state) = create_test_app(false).await;
        server.get("/docs").await.assert_status_ok();
        server.get("/api-docs/openapi.json").await.assert_status_ok();
    }
}
