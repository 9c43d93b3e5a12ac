//! Domino tile and tile-group primitives.
//!
//! Provides the validated [`Tile`] value type (two pip halves, 0-6 each,
//! orientation-insensitive equality) and the [`DominoGroup`] container
//! (random and full-set generation, removal by value/index/random choice,
//! pip-sum sorting, partitioning), plus the whitespace text format and
//! pip-dot ASCII art rendering.
//!
//! All randomized operations take an explicit `&mut impl Rng`, so callers
//! control seeding; tests inject a seeded `ChaCha8Rng` for determinism.

pub mod errors;
pub mod group;
pub mod parser;
pub mod render;
pub mod tile;

pub use errors::{DominoError, DominoResult};
pub use group::DominoGroup;
pub use tile::Tile;
