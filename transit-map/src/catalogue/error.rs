//! Catalogue error types.

/// Errors raised while building or querying the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogueError {
    /// A stop name that was never added
    #[error("unknown stop: {0}")]
    UnknownStop(String),

    /// A bus references a stop that was never added
    #[error("bus {bus} references unknown stop {stop}")]
    UnknownStopOnRoute { bus: String, stop: String },
}
