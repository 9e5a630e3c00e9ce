//! crates/bookbites_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the
//! core to be independent of the concrete storage mechanism and of the
//! embedding host that supplies the ambient identity.

use async_trait::async_trait;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Unauthorized")]
    Unauthorized,
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// Durable key/value persistence. One independently-keyed record per
/// collection, each JSON-encoded by the caller.
#[async_trait]
pub trait StorageService: Send + Sync {
    /// Returns the raw stored value, or `None` when the key has never been
    /// written.
    async fn load_raw(&self, key: &str) -> PortResult<Option<String>>;

    async fn save_raw(&self, key: &str, value: &str) -> PortResult<()>;

    /// Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> PortResult<()>;
}

/// Read-only identity snapshot supplied by the embedding host at load time.
#[derive(Debug, Clone)]
pub struct AmbientUser {
    pub external_id: String,
    pub display_name: Option<String>,
}

/// The embedding host, reduced to the one thing this layer reads from it.
pub trait AmbientIdentityService: Send + Sync {
    fn current_user(&self) -> Option<AmbientUser>;
}

/// Injected administrative credential check. The domain layer never holds
/// the credential pair itself.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, login: &str, password: &str) -> bool;
}
