//! Integration test helpers for the Sky Bet API client.
//!
//! Tests run the request chain against a local [`httpmock`] server, so no
//! network access or API account is needed.

use httpmock::MockServer;
use skybet_client::{ClientConfig, QueryParams, RequestBuilder};

/// API user sent by test builders.
pub const TEST_API_USER: &str = "test";

/// Creates a root builder pointed at the mock server.
///
/// # Errors
/// Returns error if builder creation fails.
pub fn create_test_builder(server: &MockServer) -> Result<RequestBuilder, skybet_client::Error> {
    create_builder_with_params(server, QueryParams::from([("api_user", TEST_API_USER)]))
}

/// Creates a root builder pointed at the mock server with custom parameters.
///
/// # Errors
/// Returns error if builder creation fails.
pub fn create_builder_with_params(
    server: &MockServer,
    params: QueryParams,
) -> Result<RequestBuilder, skybet_client::Error> {
    RequestBuilder::create(ClientConfig::new(server.base_url()), params, None)
}
