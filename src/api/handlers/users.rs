//! User endpoints: current-user bootstrap, lookups, availability checks,
//! and profile updates with onboarding state transitions.

use crate::AppState;
use crate::api::models::users::{AvailabilityResponse, UserResponse, UserUpdate};
use crate::errors::{Error, Result};
use crate::store::models::users::{self, User};
use crate::types::UserId;
use axum::{
    Json,
    extract::{Path, State},
};

#[utoipa::path(
    get,
    path = "/user",
    tag = "users",
    summary = "Get the current user",
    responses(
        (status = 200, description = "Current user", body = UserResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn current_user(State(state): State<AppState>) -> Result<Json<UserResponse>> {
    let mut fixtures = state.store.write();

    // A session always has a current user; materialize one on first contact
    let user = match fixtures.users.first() {
        Some(user) => user.clone(),
        None => fixtures.users.insert(User::placeholder),
    };

    Ok(Json(UserResponse::from(user)))
}

#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = "users",
    summary = "Get user",
    responses(
        (status = 200, description = "User details", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_user(State(state): State<AppState>, Path(user_id): Path<UserId>) -> Result<Json<UserResponse>> {
    let fixtures = state.store.read();
    let user = fixtures.users.get(user_id).ok_or(Error::not_found("user", user_id))?;
    Ok(Json(UserResponse::from(user.clone())))
}

#[utoipa::path(
    get,
    path = "/users/email_available",
    tag = "users",
    summary = "Check email availability",
    responses(
        (status = 200, description = "Availability result", body = AvailabilityResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn email_available() -> Json<AvailabilityResponse> {
    Json(AvailabilityResponse {
        available: true,
        valid: true,
    })
}

#[utoipa::path(
    get,
    path = "/users/username_available",
    tag = "users",
    summary = "Check username availability",
    responses(
        (status = 200, description = "Availability result", body = AvailabilityResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn username_available() -> Json<AvailabilityResponse> {
    Json(AvailabilityResponse {
        available: true,
        valid: true,
    })
}

#[utoipa::path(
    patch,
    path = "/users/me",
    tag = "users",
    summary = "Update the current user",
    request_body = UserUpdate,
    responses(
        (status = 200, description = "Updated user", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_current_user(State(state): State<AppState>, Json(update): Json<UserUpdate>) -> Result<Json<UserResponse>> {
    let mut fixtures = state.store.write();
    let user = fixtures.users.get_mut(update.id).ok_or(Error::not_found("user", update.id))?;

    if let Some(first_name) = update.first_name {
        user.first_name = Some(first_name);
    }
    if let Some(last_name) = update.last_name {
        user.last_name = Some(last_name);
    }
    if let Some(email) = update.email {
        user.email = email;
    }

    if let Some(transition) = update.state_transition {
        match users::transition_target(&transition) {
            Some(next_state) => user.state = next_state.to_string(),
            None => tracing::error!("Unknown state transition '{transition}'"),
        }
    }

    Ok(Json(UserResponse::from(user.clone())))
}

#[cfg(test)]
mod tests {
    use crate::test_utils::*;
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    #[test_log::test(tokio::test)]
    async fn test_current_user_created_when_store_is_empty() {
        let (server, state) = create_test_app(false).await;
        assert!(state.store.read().users.is_empty());

        let response = server.get("/user").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["id"], 1);
        assert_eq!(body["state"], "signed_up");

        assert_eq!(state.store.read().users.len(), 1);

        // Subsequent requests reuse the same user
        let again: Value = server.get("/user").await.json();
        assert_eq!(again["id"], 1);
        assert_eq!(state.store.read().users.len(), 1);
    }

    #[test_log::test(tokio::test)]
    async fn test_get_user_not_found() {
        let (server, _state) = create_test_app(true).await;
        let response = server.get("/users/999").await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[test_log::test(tokio::test)]
    async fn test_availability_checks_always_pass() {
        let (server, _state) = create_test_app(false).await;
        for path in ["/users/email_available", "/users/username_available"] {
            let body: Value = server.get(path).await.json();
            assert_eq!(body["available"], true);
            assert_eq!(body["valid"], true);
        }
    }

    #[test_log::test(tokio::test)]
    async fn test_update_current_user_fields() {
        let (server, _state) = create_test_app(true).await;

        let response = server
            .patch("/users/me")
            .json(&json!({
                "id": 1,
                "first_name": "New",
                "email": "new@example.com",
            }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["first_name"], "New");
        assert_eq!(body["email"], "new@example.com");
        // Untouched field survives
        assert_eq!(body["last_name"], "Smith");
    }

    #[test_log::test(tokio::test)]
    async fn test_state_transitions() {
        let (server, _state) = create_test_app(true).await;

        for (transition, expected) in [
            ("edit_profile", "edited_profile"),
            ("select_categories", "selected_categories"),
            ("select_roles", "selected_roles"),
            ("select_skills", "selected_skills"),
        ] {
            let body: Value = server
                .patch("/users/me")
                .json(&json!({ "id": 1, "state_transition": transition }))
                .await
                .json();
            assert_eq!(body["state"], expected);
        }
    }

    #[test_log::test(tokio::test)]
    async fn test_unknown_transition_leaves_state_alone() {
        let (server, _state) = create_test_app(true).await;

        let before: Value = server.get("/users/1").await.json();
        let body: Value = server
            .patch("/users/me")
            .json(&json!({ "id": 1, "state_transition": "warp_drive" }))
            .await
            .json();
        assert_eq!(body["state"], before["state"]);
    }
}
