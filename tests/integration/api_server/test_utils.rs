//! Test utilities for API server integration tests

use axum_test::TestServer;
use folio::core::http::{create_router, AppState, HealthStatus};
use folio::services::FixtureMarketDataProvider;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

/// Test helper for API server integration tests
pub struct TestApiServer {
    pub server: TestServer,
}

impl TestApiServer {
    pub fn new() -> Self {
        let state = AppState {
            health: Arc::new(RwLock::new(HealthStatus::default())),
            start_time: Arc::new(Instant::now()),
            provider: Arc::new(FixtureMarketDataProvider::new()),
        };

        let app = create_router(state);
        let server = TestServer::new(app).expect("start test server");

        Self { server }
    }
}
