//! Integration tests for oasis-sitegen
//!
//! These tests use wiremock to stand in for the restaurant backend and the
//! notification service, and tempfile for the generated artifact.

mod api_tests;
mod generate_tests;

use oasis_sitegen::api::ApiClient;
use wiremock::MockServer;

/// Creates a client pointing both endpoints at the mock server
pub fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::with_client(reqwest::Client::new(), &server.uri(), &server.uri(), "store-42")
}
