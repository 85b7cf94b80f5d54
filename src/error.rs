//! Error types for the flato library.

use std::fmt;

/// Result type alias for flato operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding a zlib stream.
///
/// All errors are fatal to the current operation; no partial output is
/// returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The input ended before a complete stream could be decoded.
    ShortInput,
    /// The two-byte zlib header failed validation (method, window size,
    /// preset-dictionary flag, or check bits).
    BadHeader,
    /// A block used the reserved block type 3.
    BadBlockType,
    /// A stored block's LEN and one's-complement NLEN fields disagree.
    BadStoredBlock,
    /// A bit pattern matched no code in the current Huffman table.
    BadHuffmanCode,
    /// A literal/length symbol outside the valid range 0..=285.
    BadLengthSymbol(u16),
    /// A back-reference distance that is invalid or reaches before the
    /// start of the output produced so far.
    BadDistance {
        /// The decoded distance (0 for an invalid distance symbol).
        distance: usize,
        /// Number of output bytes produced when the reference was decoded.
        available: usize,
    },
    /// A code length above 15 appeared in a dynamic block header.
    TooManyBits,
    /// The run-length-encoded code lengths of a dynamic header are
    /// malformed (repeat with no previous length, or a run overflowing
    /// the declared count).
    BadCodeLengths,
    /// The Adler-32 of the inflated data does not match the stream trailer.
    ChecksumMismatch {
        /// Checksum stored in the trailer.
        expected: u32,
        /// Checksum computed over the inflated output.
        computed: u32,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ShortInput => write!(f, "unexpected end of input"),
            Error::BadHeader => write!(f, "invalid zlib header"),
            Error::BadBlockType => write!(f, "reserved block type"),
            Error::BadStoredBlock => write!(f, "stored block LEN/NLEN mismatch"),
            Error::BadHuffmanCode => write!(f, "invalid Huffman code"),
            Error::BadLengthSymbol(sym) => {
                write!(f, "invalid literal/length symbol {}", sym)
            }
            Error::BadDistance {
                distance,
                available,
            } => {
                write!(
                    f,
                    "invalid back-reference distance {} with {} bytes produced",
                    distance, available
                )
            }
            Error::TooManyBits => write!(f, "code length exceeds 15 bits"),
            Error::BadCodeLengths => write!(f, "malformed code length data"),
            Error::ChecksumMismatch { expected, computed } => {
                write!(
                    f,
                    "Adler-32 mismatch: expected {:08X}, got {:08X}",
                    expected, computed
                )
            }
        }
    }
}

impl std::error::Error for Error {}
