//! Test utilities shared by the integration tests.

use crate::{Application, Config};
use axum_test::TestServer;

pub fn create_test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        seed_data: false,
    }
}

/// Test server over an empty collection.
pub fn create_test_app() -> TestServer {
    let app = Application::new(create_test_config()).expect("Failed to create application");
    app.into_test_server()
}

/// Test server pre-loaded with the fixed sample listings.
pub fn create_seeded_test_app() -> TestServer {
    let config = Config {
        seed_data: true,
        ..create_test_config()
    };
    let app = Application::new(config).expect("Failed to create application");
    app.into_test_server()
}
