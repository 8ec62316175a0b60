//! Test utilities for integration testing (available with `test-utils` feature).

use crate::config::Config;
use crate::store::Store;
use crate::{AppState, build_router};
use axum_test::TestServer;
use std::sync::Arc;

/// Configuration suitable for tests: no demo seed unless the test asks for it.
pub fn create_test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        ..Config::default()
    }
}

/// Build an in-process test server plus the state backing it.
///
/// `seed` controls whether the store starts with the demo fixture set or
/// empty.
pub async fn create_test_app(seed: bool) -> (TestServer, AppState) {
    let config = create_test_config();
    let store = if seed { Store::seeded() } else { Store::new() };

    let state = AppState::builder().store(Arc::new(store)).config(config).build();
    let router = build_router(&state).expect("Failed to build router");
    let server = TestServer::new(router).expect("Failed to create test server");

    (server, state)
}
