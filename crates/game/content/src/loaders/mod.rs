//! Content loaders for reading fighter data from files.
//!
//! RON holds the structured content (fighters, items); TOML holds flat
//! configuration.

pub mod config;
pub mod factory;
pub mod fighters;
pub mod item;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use fighters::{FighterLoader, FighterSpec, FrameSpec, StatOverrides};
pub use item::ItemLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
