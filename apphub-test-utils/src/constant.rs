//! Standard values shared by fixtures and tests.

/// User agent of the HTTP client handed to tests.
pub static TEST_USER_AGENT: &str = "apphub-test/1.0 (+https://example.com/apphub)";

/// Version stored on mock app records.
pub static TEST_APP_VERSION: &str = "1.0.0";

/// Bytes served by successful mock image endpoints.
pub static TEST_IMAGE_BYTES: &[u8] = b"\xff\xd8\xff\xe0mock-jpeg";
