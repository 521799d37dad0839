// Failures reported by the song storage port.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    // Backing store is not initialized or cannot be reached.
    #[error("song storage is unavailable")]
    Unavailable,
    #[error("storage error: {0}")]
    Backend(String),
}
