//! Fixtures for test data and mock HTTP endpoints.
//!
//! - `app` - identification and app records, image host and sync API endpoints

pub mod app;
