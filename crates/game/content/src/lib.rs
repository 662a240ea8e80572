//! Data-driven fighter content and loaders.
//!
//! This crate houses the built-in fighter roster and provides loaders for
//! RON/TOML data files:
//! - Fighter presets (statically registered constructors)
//! - Fighter definitions (data-driven via RON)
//! - Weapon and armour catalogs (data-driven via RON)
//! - Match configuration (data-driven via TOML)
//!
//! Content is resolved into plain [`fight_core::FighterProfile`] values before
//! a match starts and never appears in match state.

pub mod catalog;
pub mod error;
pub mod registry;
pub mod repository;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::ItemCatalog;
pub use error::ContentError;
pub use registry::{FighterConstructor, FighterRegistry};
pub use repository::FighterRepository;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, FighterLoader, FighterSpec, FrameSpec, ItemLoader, LoadResult,
    StatOverrides,
};
