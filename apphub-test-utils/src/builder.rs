//! Declarative test builder.
//!
//! All configuration is queued on the [`TestBuilder`] and executed by the final
//! [`TestBuilder::build`] call.

use mockito::Mock;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Chain table, fixture and endpoint methods, then finalize with `build()`.
pub struct TestBuilder {
    // Tables and indexes to create
    tables: Vec<TableCreateStatement>,
    indexes: Vec<IndexCreateStatement>,
    include_app_tables: bool,

    // Database fixtures to insert
    identifications: Vec<(String, Option<String>)>, // (apk_name, top_type)
    apps: Vec<(String, String)>,                    // (apk_name, last_version)

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    image_endpoints: Vec<(String, usize)>, // (path, expected_requests)
    failing_image_endpoints: Vec<(String, usize, usize)>, // (path, status, expected_requests)
    sync_endpoints: Vec<(String, usize, serde_json::Value, usize)>, // (apk_name, status, body, expected_requests)
}

impl TestBuilder {
    /// Create a new TestBuilder with nothing configured
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
            include_app_tables: false,
            identifications: Vec::new(),
            apps: Vec::new(),
            mock_builders: Vec::new(),
            image_endpoints: Vec::new(),
            failing_image_endpoints: Vec::new(),
            sync_endpoints: Vec::new(),
        }
    }

    /// Add every table the pipelines write to, with their composite unique indexes.
    pub fn with_app_tables(mut self) -> Self {
        self.include_app_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use apphub_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), apphub_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Permission)
    ///     .with_table(Tag)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock identification into the database.
    pub fn with_mock_identification(mut self, apk_name: &str, top_type: Option<&str>) -> Self {
        self.identifications
            .push((apk_name.to_string(), top_type.map(str::to_string)));
        self
    }

    /// Insert a mock app record, and its identification if not queued already.
    pub fn with_mock_app(mut self, apk_name: &str, last_version: &str) -> Self {
        self.apps
            .push((apk_name.to_string(), last_version.to_string()));
        self
    }

    /// Add a mock image endpoint at `path` serving image bytes.
    pub fn with_image_endpoint(mut self, path: &str, expected_requests: usize) -> Self {
        self.image_endpoints
            .push((path.to_string(), expected_requests));
        self
    }

    /// Add a mock image endpoint at `path` failing with `status`.
    pub fn with_failing_image_endpoint(
        mut self,
        path: &str,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.failing_image_endpoints
            .push((path.to_string(), status, expected_requests));
        self
    }

    /// Add a mock sync API endpoint for `apk_name`.
    ///
    /// # Arguments
    /// - `apk_name` - Package name the request must carry
    /// - `status` - HTTP status to answer with
    /// - `body` - JSON response body
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_sync_endpoint(
        mut self,
        apk_name: &str,
        status: usize,
        body: serde_json::Value,
        expected_requests: usize,
    ) -> Self {
        self.sync_endpoints
            .push((apk_name.to_string(), status, body, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test setup by creating all configured tables, fixtures, and mock endpoints.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables and indexes
    /// 2. Inserts database fixtures (identifications, then apps)
    /// 3. Creates mock HTTP endpoints (custom endpoints first)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    /// - `Err(TestError::HttpError)` - HTTP client construction failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();
        let mut all_indexes = Vec::new();

        if self.include_app_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::AppIdentification),
                schema.create_table_from_entity(entity::prelude::Category),
                schema.create_table_from_entity(entity::prelude::Permission),
                schema.create_table_from_entity(entity::prelude::Tag),
                schema.create_table_from_entity(entity::prelude::App),
                schema.create_table_from_entity(entity::prelude::Screenshot),
                schema.create_table_from_entity(entity::prelude::AppPermission),
                schema.create_table_from_entity(entity::prelude::AppTag),
                schema.create_table_from_entity(entity::prelude::CategoryTag),
            ]);
            all_indexes.extend(app_table_indexes());
        }

        all_tables.extend(self.tables);
        all_indexes.extend(self.indexes);
        setup.with_tables(all_tables, all_indexes).await?;

        // 2. Insert database fixtures
        for (apk_name, top_type) in self.identifications {
            setup
                .app()
                .insert_mock_identification(&apk_name, top_type.as_deref())
                .await?;
        }

        for (apk_name, last_version) in self.apps {
            setup.app().insert_mock_app(&apk_name, &last_version).await?;
        }

        // 3. Create mock endpoints
        // Custom endpoints are created first so tests can queue several mocks for one path
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (path, expected) in self.image_endpoints {
            mocks.push(setup.app().create_image_endpoint(&path, expected));
        }

        for (path, status, expected) in self.failing_image_endpoints {
            mocks.push(
                setup
                    .app()
                    .create_failing_image_endpoint(&path, status, expected),
            );
        }

        for (apk_name, status, body, expected) in self.sync_endpoints {
            mocks.push(
                setup
                    .app()
                    .create_sync_endpoint(&apk_name, status, body, expected),
            );
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Composite unique indexes `create_table_from_entity` cannot express.
fn app_table_indexes() -> Vec<IndexCreateStatement> {
    vec![
        Index::create()
            .name("idx-category-name-top_type")
            .table(entity::prelude::Category)
            .col(entity::category::Column::Name)
            .col(entity::category::Column::TopType)
            .unique()
            .to_owned(),
        Index::create()
            .name("idx-screenshot-app_id-origin_url")
            .table(entity::prelude::Screenshot)
            .col(entity::screenshot::Column::AppId)
            .col(entity::screenshot::Column::OriginUrl)
            .unique()
            .to_owned(),
    ]
}
