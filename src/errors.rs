use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DominoError {
    /// Pip value outside 0..=6, or group index outside the valid range.
    OutOfRange { message: String },
    /// Removal requested from a group with no tiles.
    EmptyGroup,
    /// No tile in the group matches the requested pip pair.
    NotFound { left: u8, right: u8 },
    /// Malformed or truncated textual input.
    Parse { input: String, message: String },
}

impl fmt::Display for DominoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DominoError::OutOfRange { message } => {
                write!(f, "Out of range: {}", message)
            }
            DominoError::EmptyGroup => {
                write!(f, "Group is empty")
            }
            DominoError::NotFound { left, right } => {
                write!(f, "No tile ({}|{}) in group", left, right)
            }
            DominoError::Parse { input, message } => {
                write!(f, "Parse error on '{}': {}", input, message)
            }
        }
    }
}

impl std::error::Error for DominoError {}

pub type DominoResult<T> = Result<T, DominoError>;
