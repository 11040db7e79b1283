use thiserror::Error;

use crate::model::status::UnknownVariant;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored role or status string doesn't name a known variant.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error(transparent)]
    UnknownVariant(#[from] UnknownVariant),

    /// Password hashing failed.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),

    /// A configured OAuth endpoint URL could not be parsed.
    #[error("Invalid OAuth endpoint URL '{url}': {reason}")]
    InvalidOAuthUrl { url: String, reason: String },

    /// The HTTP listener could not be bound or failed while serving.
    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}
