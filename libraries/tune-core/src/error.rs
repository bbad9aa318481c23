/// Core error types for the Tune catalog
use thiserror::Error;

/// Result type alias using `CatalogError`
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Core error type for the Tune catalog
///
/// Every variant is a returned outcome: the registry stays usable after any
/// of them, and the operation that produced it performed no mutation.
/// `Display` output is the status message shown to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Username already registered (any role)
    #[error("The username {0} is already taken.")]
    UsernameTaken(String),

    /// No user with the requested username
    #[error("User not found.")]
    UserNotFound,

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Song does not match the album it was offered to
    #[error("Song {song} does not belong to album {album}")]
    DoesNotBelong { song: String, album: String },

    /// Duplicate entry
    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Settings could not be loaded or are invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CatalogError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Create a duplicate entry error
    pub fn duplicate(msg: impl Into<String>) -> Self {
        Self::Duplicate(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Whether this error signals a broken caller contract rather than a
    /// normal simulation outcome
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::DoesNotBelong { .. })
    }
}
