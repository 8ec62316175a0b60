//! Mock OAuth password-grant token endpoint.

use crate::AppState;
use crate::api::models::auth::{TokenRequest, TokenResponse};
use crate::errors::{Error, Result};
use axum::{Form, Json, extract::State};

#[utoipa::path(
    post,
    path = "/oauth/token",
    tag = "auth",
    summary = "Exchange credentials for an access token",
    request_body(content = TokenRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 400, description = "Invalid grant")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_token(State(state): State<AppState>, Form(request): Form<TokenRequest>) -> Result<Json<TokenResponse>> {
    let oauth = &state.config.oauth;
    if request.grant_type != "password" || request.username != oauth.username || request.password != oauth.password {
        return Err(Error::InvalidGrant);
    }

    // The token belongs to whichever user the store considers current
    let user_id = state.store.read().users.first().map(|u| u.id).unwrap_or(1);

    Ok(Json(TokenResponse {
        access_token: oauth.access_token.clone(),
        user_id,
        token_type: "bearer".to_string(),
        expires_in: oauth.token_expires_in,
    }))
}

#[cfg(test)]
mod tests {
    use crate::errors::INVALID_GRANT_DETAIL;
    use crate::test_utils::*;
    use axum::http::StatusCode;
    use serde_json::Value;

    #[test_log::test(tokio::test)]
    async fn test_token_success() {
        let (server, state) = create_test_app(true).await;

        let response = server
            .post("/oauth/token")
            .form(&[
                ("grant_type", "password"),
                ("username", "josh@coderly.com"),
                ("password", "password"),
            ])
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["access_token"], state.config.oauth.access_token);
        assert_eq!(body["token_type"], "bearer");
        assert_eq!(body["expires_in"], 7200);
        assert_eq!(body["user_id"], 1);
    }

    #[test_log::test(tokio::test)]
    async fn test_token_wrong_password_is_invalid_grant() {
        let (server, _state) = create_test_app(true).await;

        let response = server
            .post("/oauth/token")
            .form(&[
                ("grant_type", "password"),
                ("username", "josh@coderly.com"),
                ("password", "nope"),
            ])
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["errors"][0]["id"], "INVALID_GRANT");
        assert_eq!(body["errors"][0]["status"], 401);
        assert_eq!(body["errors"][0]["detail"], INVALID_GRANT_DETAIL);
    }

    #[test_log::test(tokio::test)]
    async fn test_token_requires_password_grant_type() {
        let (server, _state) = create_test_app(true).await;

        let response = server
            .post("/oauth/token")
            .form(&[
                ("grant_type", "client_credentials"),
                ("username", "josh@coderly.com"),
                ("password", "password"),
            ])
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
