//! Test context returned by [`TestBuilder`](crate::TestBuilder).
//!
//! The context owns an in-memory SQLite database, a mock HTTP server standing in for both
//! image hosts and the sync API, and an HTTP client for pipeline services under test.

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection,
};

use crate::{constant::TEST_USER_AGENT, error::TestError};

/// Test environment for one test.
///
/// ```ignore
/// let mut test = TestBuilder::new().with_app_tables().build().await?;
///
/// let sync = SyncClient::new(test.http.clone(), test.server_url());
/// test.app().insert_mock_app("com.example.app", "1.0.0").await?;
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// HTTP client for services that talk to the mock server
    pub http: reqwest::Client,

    /// Mock HTTP server for image and sync API endpoints
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Create a new test context with an empty database
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DbErr)` - Database connection failed
    /// - `Err(TestError::HttpError)` - HTTP client construction failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        let http = reqwest::Client::builder()
            .user_agent(TEST_USER_AGENT)
            .build()?;

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            http,
            server,
            mocks: Vec::new(),
        })
    }

    /// Base URL of the mock server, without trailing slash
    pub fn server_url(&self) -> String {
        self.server.url()
    }

    /// Absolute URL of `path` on the mock server
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.server.url(), path)
    }

    /// Create database tables and their extra indexes.
    ///
    /// Indexes are created after every table exists.
    pub(crate) async fn with_tables(
        &self,
        tables: Vec<TableCreateStatement>,
        indexes: Vec<IndexCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in tables {
            self.db.execute(&stmt).await?;
        }

        for stmt in indexes {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
