//! ZLIB container format (RFC 1950).
//!
//! A zlib stream is a two-byte header, a DEFLATE payload, and a four-byte
//! big-endian Adler-32 trailer over the uncompressed data.

use crate::adler32::adler32;
use crate::deflate;
use crate::error::{Error, Result};
use crate::inflate;

/// Compression method: DEFLATE.
const CM_DEFLATE: u8 = 8;

/// Window size field for the 32 KiB window.
const CINFO_32K: u8 = 7;

/// FLEVEL advertised in the header (default compression).
const FLEVEL_DEFAULT: u8 = 2;

/// Compress `data` into a complete zlib stream.
///
/// The stream holds a single final dynamic-Huffman DEFLATE block and the
/// Adler-32 of the input.
///
/// # Example
/// ```
/// let stream = flato::compress(b"Hello World");
/// assert_eq!(stream[0], 0x78);
/// assert_eq!(flato::decompress(&stream).unwrap(), b"Hello World");
/// ```
pub fn compress(data: &[u8]) -> Vec<u8> {
    let payload = deflate::deflate(data);

    let cmf = (CINFO_32K << 4) | CM_DEFLATE;
    let flg_base = FLEVEL_DEFAULT << 6;
    // FCHECK makes the header a multiple of 31.
    let rem = (u16::from(cmf) * 256 + u16::from(flg_base)) % 31;
    let flg = flg_base | if rem == 0 { 0 } else { (31 - rem) as u8 };

    let mut out = Vec::with_capacity(payload.len() + 6);
    out.push(cmf);
    out.push(flg);
    out.extend_from_slice(&payload);
    out.extend_from_slice(&adler32(data).to_be_bytes());
    out
}

/// Decompress a complete zlib stream into its original bytes.
///
/// Validates the header (method, window size, no preset dictionary, check
/// bits) and the Adler-32 trailer.
///
/// # Example
/// ```
/// let stream = flato::compress(b"round trip");
/// assert_eq!(flato::decompress(&stream).unwrap(), b"round trip");
/// ```
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    // Header, trailer, and at least the empty deflate body.
    if data.len() < 6 {
        return Err(Error::ShortInput);
    }

    let cmf = data[0];
    let flg = data[1];
    if cmf & 0x0F != CM_DEFLATE || cmf >> 4 > CINFO_32K {
        return Err(Error::BadHeader);
    }
    if (u16::from(cmf) * 256 + u16::from(flg)) % 31 != 0 {
        return Err(Error::BadHeader);
    }
    if flg & 0x20 != 0 {
        // Preset dictionaries are not supported.
        return Err(Error::BadHeader);
    }

    let payload = &data[2..data.len() - 4];
    let output = inflate::inflate(payload)?;

    let tail = data.len() - 4;
    let expected = u32::from_be_bytes([data[tail], data[tail + 1], data[tail + 2], data[tail + 3]]);
    let computed = adler32(&output);
    if expected != computed {
        return Err(Error::ChecksumMismatch { expected, computed });
    }

    Ok(output)
}
