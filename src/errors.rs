use thiserror::Error;

/// Main error type for the Pokedex catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The requested identifier does not exist upstream (HTTP 404)
    #[error("Not found: {0}")]
    NotFound(String),
    /// Network failure, timeout, or a non-success status other than 404
    #[error("Upstream error: {0}")]
    Upstream(String),
    /// The upstream document is missing a field the catalog relies on
    #[error("Malformed upstream data: {0}")]
    MalformedData(String),
    /// The operation was cancelled before it completed
    #[error("Operation cancelled")]
    Cancelled,
    /// The identifier cannot name a Pokemon (empty, zero, ...)
    #[error("Invalid identifier: {0:?}")]
    InvalidIdentifier(String),
    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to loading the catalog configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("could not read {path}: {reason}")]
    Unreadable { path: String, reason: String },
    /// The config file is not valid RON for `CatalogConfig`
    #[error("could not parse {path}: {reason}")]
    Parse { path: String, reason: String },
    /// A field holds a value outside its allowed range
    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl CatalogError {
    /// True when the error means "this thing does not exist" rather than a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound(_))
    }
}

/// Type alias for Results using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Type alias for Results using ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
