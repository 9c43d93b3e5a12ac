//! Pip-dot ASCII art for tiles and groups.
//!
//! A tile renders as two stacked halves of three 9-column lines each,
//! separated by a divider, with one blank line after the tile:
//!
//! ```text
//! | o   o |
//! |   o   |
//! | o   o |
//! |-------|
//! |       |
//! |   o   |
//! |       |
//! ```
//!
//! Pure string producers; callers decide where the output goes.

use crate::group::DominoGroup;
use crate::tile::Tile;

/// Dot patterns per pip count, three 5-column lines each.
const PIP_LINES: [[&str; 3]; 7] = [
    ["     ", "     ", "     "],
    ["     ", "  o  ", "     "],
    ["  o  ", "     ", "  o  "],
    ["o    ", "  o  ", "    o"],
    ["o   o", "     ", "o   o"],
    ["o   o", "  o  ", "o   o"],
    ["o   o", "o   o", "o   o"],
];

const DIVIDER: &str = "|-------|";

fn half_lines(value: u8) -> [&'static str; 3] {
    // Tile's invariant keeps values in 0..=6; fall back to blanks rather
    // than panic if that ever changes.
    PIP_LINES
        .get(value as usize)
        .copied()
        .unwrap_or(["?????", "?????", "?????"])
}

fn push_half(out: &mut String, value: u8) {
    for line in half_lines(value) {
        out.push_str("| ");
        out.push_str(line);
        out.push_str(" |\n");
    }
}

/// Renders one tile: three lines per half, divider between, blank line
/// after.
pub fn tile_art(tile: &Tile) -> String {
    let mut out = String::new();
    push_half(&mut out, tile.left());
    out.push_str(DIVIDER);
    out.push('\n');
    push_half(&mut out, tile.right());
    out.push('\n');
    out
}

/// Renders every tile in order, with one extra blank line after the group.
pub fn group_art(group: &DominoGroup) -> String {
    let mut out = String::new();
    for tile in group {
        out.push_str(&tile_art(tile));
    }
    out.push('\n');
    out
}
