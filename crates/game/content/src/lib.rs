//! Data-driven content definitions and loaders.
//!
//! This crate houses the built-in game content and provides loaders for RON/TOML data files:
//! - Archetype catalogs (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Content is immutable once loaded and never appears in actor state except as
//! shared `Arc<ActorArchetype>` handles.
//!
//! All loaders use arena-core types directly with serde for RON/TOML deserialization.

#[cfg(feature = "loaders")]
pub mod builtin;

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ArchetypeLoader, ConfigLoader, ContentFactory, LoadResult};
