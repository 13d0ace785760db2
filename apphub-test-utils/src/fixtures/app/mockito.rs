//! Mock endpoints for image hosts and the sync API.

use mockito::{Matcher, Mock};

use crate::{constant::TEST_IMAGE_BYTES, fixtures::app::AppFixtures};

impl<'a> AppFixtures<'a> {
    /// Create a mock image endpoint serving [`TEST_IMAGE_BYTES`] at `path`.
    ///
    /// # Arguments
    /// - `path` - Path of the image on the mock server, starting with `/`
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_image_endpoint(&mut self, path: &str, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", path)
            .with_status(200)
            .with_header("content-type", "image/jpeg")
            .with_body(TEST_IMAGE_BYTES)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock image endpoint answering `status` with an empty body.
    pub fn create_failing_image_endpoint(
        &mut self,
        path: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", path)
            .with_status(status)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock sync API endpoint for `apk_name`.
    ///
    /// Sets up `GET /?apk_name=<apk_name>` answering `status` with `body` as JSON.
    ///
    /// # Arguments
    /// - `apk_name` - Package name the request must carry
    /// - `status` - HTTP status to answer with
    /// - `body` - Response body
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_sync_endpoint(
        &mut self,
        apk_name: &str,
        status: usize,
        body: serde_json::Value,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", "/")
            .match_query(Matcher::UrlEncoded(
                "apk_name".to_string(),
                apk_name.to_string(),
            ))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }
}
