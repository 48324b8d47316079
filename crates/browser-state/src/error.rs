use thiserror::Error;

/// Errors surfaced by the store plumbing (never by reducers)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The dispatch worker is gone, the action was not (or not fully) processed
    #[error("store is closed")]
    Closed,
}
