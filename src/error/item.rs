use thiserror::Error;

/// Errors caused by the content of an item rather than by infrastructure.
#[derive(Error, Debug, PartialEq)]
pub enum ItemError {
    /// A detail item points at an app identification ID with no database row.
    ///
    /// Detail items are only produced for apps that were discovered earlier, so this
    /// means the crawler and the database disagree.
    #[error("Detail item references app identification ID {0} which does not exist")]
    AppNotFound(i32),
}
