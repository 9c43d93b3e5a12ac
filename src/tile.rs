//! The domino tile value type.
//!
//! A tile holds two pip halves in 0..=6. Construction and the setters
//! validate the range; equality is orientation-insensitive, so a tile is
//! equal to its own flip.

use crate::errors::{DominoError, DominoResult};
use crate::parser::Tokens;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Highest pip count on one half of a tile.
pub const PIP_MAX: u8 = 6;

/// Distinct tiles in a full double-six set: unordered pairs over 0..=6.
pub const FULL_SET_SIZE: usize = 28;

// ---------------------------------------------------------------------------
// Tile
// ---------------------------------------------------------------------------

/// One domino tile. Both halves are always in 0..=6.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tile {
    left: u8,
    right: u8,
}

impl Tile {
    /// Creates a tile if both halves are in 0..=6.
    pub fn new(left: u8, right: u8) -> DominoResult<Self> {
        if left > PIP_MAX || right > PIP_MAX {
            return Err(DominoError::OutOfRange {
                message: format!("pips ({}, {}) outside 0..={}", left, right, PIP_MAX),
            });
        }
        Ok(Tile { left, right })
    }

    /// Constructor for pips already known to be in range (full-set
    /// enumeration over 0..=6).
    pub(crate) const fn from_valid(left: u8, right: u8) -> Self {
        Tile { left, right }
    }

    /// A tile with both halves drawn independently and uniformly from 0..=6.
    pub fn random(rng: &mut impl Rng) -> Self {
        Tile {
            left: rng.random_range(0..=PIP_MAX),
            right: rng.random_range(0..=PIP_MAX),
        }
    }

    #[inline]
    pub const fn left(&self) -> u8 {
        self.left
    }

    #[inline]
    pub const fn right(&self) -> u8 {
        self.right
    }

    /// Replaces the left half. Fails without mutating if `value > 6`.
    pub fn set_left(&mut self, value: u8) -> DominoResult<()> {
        if value > PIP_MAX {
            return Err(DominoError::OutOfRange {
                message: format!("left pip {} outside 0..={}", value, PIP_MAX),
            });
        }
        self.left = value;
        Ok(())
    }

    /// Replaces the right half. Fails without mutating if `value > 6`.
    pub fn set_right(&mut self, value: u8) -> DominoResult<()> {
        if value > PIP_MAX {
            return Err(DominoError::OutOfRange {
                message: format!("right pip {} outside 0..={}", value, PIP_MAX),
            });
        }
        self.right = value;
        Ok(())
    }

    /// A new tile with the halves swapped; the source is unchanged.
    #[inline]
    pub const fn flipped(&self) -> Self {
        Tile {
            left: self.right,
            right: self.left,
        }
    }

    /// Unordered-pair comparison: `(l,r)` matches both `(l,r)` and `(r,l)`.
    #[inline]
    pub const fn matches(&self, other: &Tile) -> bool {
        (self.left == other.left && self.right == other.right)
            || (self.left == other.right && self.right == other.left)
    }

    /// True if either half shows `value`.
    #[inline]
    pub const fn has_pip(&self, value: u8) -> bool {
        self.left == value || self.right == value
    }

    /// Sum of both halves, the sort key for groups.
    #[inline]
    pub const fn pip_sum(&self) -> u8 {
        self.left + self.right
    }

    /// Reads a tile from the cursor: left pip then right pip.
    pub fn read_from(tokens: &mut Tokens<'_>) -> DominoResult<Self> {
        let left = tokens.next_pip()?;
        let right = tokens.next_pip()?;
        Ok(Tile { left, right })
    }
}

// Equality ignores orientation, so Hash is deliberately not derived.
impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.matches(other)
    }
}

impl Eq for Tile {}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}|{})", self.left, self.right)
    }
}

impl FromStr for Tile {
    type Err = DominoError;

    fn from_str(s: &str) -> DominoResult<Self> {
        let mut tokens = Tokens::new(s);
        let tile = Tile::read_from(&mut tokens)?;
        tokens.finish()?;
        Ok(tile)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
