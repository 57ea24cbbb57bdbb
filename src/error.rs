//! Error types and handling

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Character has no entry in the Codabar symbol table
    #[error("unsupported character {0:?}")]
    UnsupportedCharacter(char),

    /// Start or stop character is not one of A, B, C, D, E, N, T
    #[error("{0:?} is not a start/stop character")]
    InvalidSentinel(char),

    /// Serial number needs more than 8 decimal digits
    #[error("serial number {0} exceeds 8 digits")]
    SerialNumberTooLong(u64),

    #[error("invalid digit {0:?}")]
    InvalidDigit(char),

    #[error("type digit must be 0-9, got {0}")]
    InvalidTypeDigit(u8),

    #[error("library id must be 4 decimal digits, got {0:?}")]
    InvalidLibraryId(String),

    #[error("identifier must be 14 digits, got {0}")]
    InvalidLength(usize),

    #[error("check digit mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: u8, actual: u8 },

    /// Canvas could not be created or ran out of palette entries
    #[error("canvas allocation failed: {0}")]
    CanvasAllocation(String),

    /// Canvas width leaves no room between the two quiet zones
    #[error("canvas width {width} leaves no room for bars")]
    CanvasTooNarrow { width: u32 },

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
