use std::num::ParseIntError;
use thiserror::Error;

/// Broken assumptions about stored data; seeing one of these means a bug or a
/// hand-edited database.
#[derive(Error, Debug)]
pub enum InternalError {
    /// A Discord ID column held something other than a decimal snowflake.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// Stored column value
        value: String,
        #[source]
        source: ParseIntError,
    },
}
