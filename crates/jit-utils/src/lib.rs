pub mod error;
pub mod lockfile;

// Re-export core types at crate root for convenience
pub use error::LockError;
pub use lockfile::{LockFile, LockState, LOCK_SUFFIX};

pub type Result<T> = std::result::Result<T, LockError>;
