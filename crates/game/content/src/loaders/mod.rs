//! Content loaders for reading game data from embedded RON files.

pub mod attacks;
pub mod demons;

pub use attacks::AttackRegistry;
pub use demons::DemonRegistry;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;
