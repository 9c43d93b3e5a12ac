//! Whitespace token cursor for the textual wire format.
//!
//! Both `Tile` and `DominoGroup` read themselves from a [`Tokens`] cursor,
//! so a group parse can hand the same cursor to each tile in turn. Errors
//! carry the original input for context.

use crate::errors::{DominoError, DominoResult};
use crate::tile::PIP_MAX;
use std::str::SplitWhitespace;

pub struct Tokens<'a> {
    source: &'a str,
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            source: input,
            inner: input.split_whitespace(),
        }
    }

    fn next_token(&mut self) -> DominoResult<&'a str> {
        self.inner.next().ok_or_else(|| DominoError::Parse {
            input: self.source.to_string(),
            message: "unexpected end of input".to_string(),
        })
    }

    /// Next token as a pip value. Non-numeric tokens are parse errors;
    /// numeric values outside 0..=6 (including negatives) are range errors.
    pub fn next_pip(&mut self) -> DominoResult<u8> {
        let token = self.next_token()?;
        let value: i64 = token.parse().map_err(|_| DominoError::Parse {
            input: self.source.to_string(),
            message: format!("expected a pip value, got '{}'", token),
        })?;
        if !(0..=PIP_MAX as i64).contains(&value) {
            return Err(DominoError::OutOfRange {
                message: format!("pip value {} outside 0..={}", value, PIP_MAX),
            });
        }
        Ok(value as u8)
    }

    /// Next token as a tile count for a group header.
    pub fn next_count(&mut self) -> DominoResult<usize> {
        let token = self.next_token()?;
        token.parse().map_err(|_| DominoError::Parse {
            input: self.source.to_string(),
            message: format!("expected a tile count, got '{}'", token),
        })
    }

    /// Fails if any tokens remain. The `FromStr` impls use this to parse a
    /// complete string rather than a prefix of a stream.
    pub fn finish(mut self) -> DominoResult<()> {
        match self.inner.next() {
            None => Ok(()),
            Some(token) => Err(DominoError::Parse {
                input: self.source.to_string(),
                message: format!("trailing input starting at '{}'", token),
            }),
        }
    }
}
