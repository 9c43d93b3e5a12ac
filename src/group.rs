//! The domino group container.
//!
//! An insertion-ordered sequence of [`Tile`]s (duplicates permitted) with
//! random and full-set factories, order-preserving removals, pip-sum
//! sorting, and partitioning by pip value. Randomized operations take an
//! explicit `&mut impl Rng`; the container holds no RNG state of its own.

use crate::errors::{DominoError, DominoResult};
use crate::parser::Tokens;
use crate::tile::{Tile, FULL_SET_SIZE, PIP_MAX};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DominoGroup {
    tiles: Vec<Tile>,
}

impl DominoGroup {
    /// An empty group.
    pub fn new() -> Self {
        Self { tiles: Vec::new() }
    }

    /// A group of exactly `n` random tiles.
    pub fn random(n: usize, rng: &mut impl Rng) -> Self {
        let tiles = (0..n).map(|_| Tile::random(rng)).collect();
        Self { tiles }
    }

    /// The full double-six set: every unordered pair `(i, j)` with
    /// `0 <= i <= j <= 6`, repeated `repeat` times each, enumerated in
    /// ascending `i` then `j` order with repeat blocks contiguous.
    /// 28 distinct tiles for `repeat == 1`.
    pub fn full_set(repeat: usize) -> Self {
        let mut tiles = Vec::with_capacity(FULL_SET_SIZE * repeat);
        for i in 0..=PIP_MAX {
            for j in i..=PIP_MAX {
                for _ in 0..repeat {
                    tiles.push(Tile::from_valid(i, j));
                }
            }
        }
        Self { tiles }
    }

    /// Appends a tile to the end.
    pub fn push(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    /// Appends a freshly generated random tile.
    pub fn push_random(&mut self, rng: &mut impl Rng) {
        self.tiles.push(Tile::random(rng));
    }

    /// Removes and returns a uniformly chosen tile, shifting later tiles
    /// left so the survivors keep their relative order.
    pub fn remove_random(&mut self, rng: &mut impl Rng) -> DominoResult<Tile> {
        if self.tiles.is_empty() {
            return Err(DominoError::EmptyGroup);
        }
        let index = rng.random_range(0..self.tiles.len());
        Ok(self.tiles.remove(index))
    }

    /// Removes and returns the first tile whose unordered pip pair equals
    /// `(left, right)`, scanning from index 0.
    pub fn remove_matching(&mut self, left: u8, right: u8) -> DominoResult<Tile> {
        let index = self.tiles.iter().position(|t| {
            (t.left() == left && t.right() == right)
                || (t.left() == right && t.right() == left)
        });
        match index {
            Some(i) => Ok(self.tiles.remove(i)),
            None => Err(DominoError::NotFound { left, right }),
        }
    }

    /// Shared access to the tile at `index`.
    pub fn get(&self, index: usize) -> DominoResult<&Tile> {
        let len = self.tiles.len();
        self.tiles
            .get(index)
            .ok_or_else(|| index_error(index, len))
    }

    /// Mutable access to the tile at `index`, allowing in-place edits of
    /// that slot.
    pub fn get_mut(&mut self, index: usize) -> DominoResult<&mut Tile> {
        let len = self.tiles.len();
        self.tiles
            .get_mut(index)
            .ok_or_else(|| index_error(index, len))
    }

    /// Removes and returns the tile at `index`, shifting later tiles left.
    pub fn remove_at(&mut self, index: usize) -> DominoResult<Tile> {
        if index >= self.tiles.len() {
            return Err(index_error(index, self.tiles.len()));
        }
        Ok(self.tiles.remove(index))
    }

    /// Sorts ascending by pip sum. The sort is unstable: relative order
    /// among equal-sum tiles is unspecified.
    pub fn sort(&mut self) {
        self.tiles.sort_unstable_by_key(Tile::pip_sum);
    }

    /// Moves every tile showing `value` on either half into a new group.
    /// Both the returned group and the survivors keep their original
    /// relative order.
    pub fn extract_with_pip(&mut self, value: u8) -> DominoGroup {
        let (matched, kept): (Vec<Tile>, Vec<Tile>) =
            self.tiles.drain(..).partition(|t| t.has_pip(value));
        self.tiles = kept;
        DominoGroup { tiles: matched }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }

    pub fn as_slice(&self) -> &[Tile] {
        &self.tiles
    }

    /// Replaces the contents from the cursor: a count `n`, then `n` tiles.
    /// On any failure the group is left cleared, never partially filled.
    pub fn read_from(&mut self, tokens: &mut Tokens<'_>) -> DominoResult<()> {
        self.tiles.clear();
        let n = tokens.next_count()?;
        // Cap the reservation so a bogus count cannot force a huge alloc
        let mut tiles = Vec::with_capacity(n.min(1024));
        for _ in 0..n {
            tiles.push(Tile::read_from(tokens)?);
        }
        self.tiles = tiles;
        Ok(())
    }
}

fn index_error(index: usize, len: usize) -> DominoError {
    DominoError::OutOfRange {
        message: format!("index {} outside 0..{}", index, len),
    }
}

impl From<Vec<Tile>> for DominoGroup {
    fn from(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }
}

impl<'a> IntoIterator for &'a DominoGroup {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

impl fmt::Display for DominoGroup {
    /// Each tile followed by a single space, including after the last one.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in &self.tiles {
            write!(f, "{} ", tile)?;
        }
        Ok(())
    }
}

impl FromStr for DominoGroup {
    type Err = DominoError;

    fn from_str(s: &str) -> DominoResult<Self> {
        let mut tokens = Tokens::new(s);
        let mut group = DominoGroup::new();
        group.read_from(&mut tokens)?;
        tokens.finish()?;
        Ok(group)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
