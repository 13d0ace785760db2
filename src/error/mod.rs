//! Error types for the apphub item pipelines.
//!
//! Stage failures fall into a small taxonomy. Drops are not errors at all (see
//! [`crate::model::outcome`]); per-image fetch failures are carried inside image results
//! as [`ImageError`] and never abort an item; sync API transport failures are logged and
//! swallowed by the store stage. Everything that reaches this [`Error`] type is unexpected
//! and propagates to the host crawler.

pub mod config;
pub mod image;
pub mod item;

use thiserror::Error;

use crate::error::{config::ConfigError, image::ImageError, item::ItemError};

/// Main error type for the apphub pipelines.
///
/// Aggregates domain-specific errors and external library errors into a single type so
/// stages can use `?` freely.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Item is malformed or references a record that does not exist.
    #[error(transparent)]
    ItemError(#[from] ItemError),
    /// Image store could not be prepared.
    #[error(transparent)]
    ImageError(#[from] ImageError),
    /// Internal error indicating a bug in apphub's code.
    #[error("Internal error in apphub, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// HTTP client error (client construction).
    #[error(transparent)]
    HttpError(#[from] reqwest::Error),
}
