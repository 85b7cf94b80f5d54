//! # flato
//!
//! A self-contained zlib (RFC 1950) and DEFLATE (RFC 1951) codec with a
//! hand-implemented LZ77 match finder, canonical Huffman coding, and a
//! table-driven inflate state machine.
//!
//! ## Features
//!
//! - **Zero runtime dependencies**
//! - **Bit-exact wire format**: output decodes with any conforming zlib
//!   implementation, and streams from conforming encoders decode here
//! - Whole-buffer operation: one call in, one buffer out
//!
//! ## Example
//!
//! ```rust
//! let data = b"an example buffer, an example buffer";
//!
//! let stream = flato::compress(data);
//! let restored = flato::decompress(&stream).unwrap();
//! assert_eq!(restored, data);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod adler32;
pub mod bits;
pub mod deflate;
pub mod error;
pub mod huffman;
pub mod inflate;
pub mod lz77;
pub mod zlib;

pub use error::{Error, Result};
pub use zlib::{compress, decompress};
