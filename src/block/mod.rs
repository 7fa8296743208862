//! LZF block format.
//!
//! A compressed block is a bare sequence of records with no header or
//! trailer. Every record starts with a control byte:
//!
//! - `0..=31`: literal run. The control byte is followed by `ctrl + 1` bytes
//!   that are copied to the output verbatim.
//! - `32..=255`: back-reference. The top 3 bits are a length field, the low
//!   5 bits are the high half of a 13 bit distance. A length field of 7 is
//!   followed by one extension byte that is added to it. One distance low
//!   byte follows in either case. The record copies `length + 2` bytes from
//!   `distance = ((hi << 8) | lo) + 1` positions back in the produced
//!   output, where source and destination may overlap.

pub(crate) mod compress;
pub(crate) mod decompress;
pub(crate) mod hashtable;

pub use compress::{compress, compress_into, compress_into_with_table, get_maximum_output_size};
pub use decompress::{decompress, decompress_into};
pub use hashtable::HashTable;

use core::fmt;

/// Longest literal run a single control byte can describe.
pub(crate) const MAX_LIT: usize = 1 << 5;

/// Exclusive upper bound for the distance of a back-reference (13 bit field).
pub(crate) const MAX_OFF: usize = 1 << 13;

/// Longest match a single back-reference can describe (7 + 255 + 2).
pub(crate) const MAX_REF: usize = (1 << 8) + (1 << 3);

/// Errors that can happen during compression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CompressError {
    /// The provided output is too small to hold the compressed block.
    /// On return the output contents are unspecified.
    OutputTooSmall,
}

impl fmt::Display for CompressError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CompressError::OutputTooSmall => {
                f.write_str("output buffer too small for the compressed block")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CompressError {}

/// Errors that can happen during decompression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecompressError {
    /// The provided output is too small to hold the decompressed payload.
    OutputTooSmall,
    /// The input is not a valid LZF block: a truncated record, or a
    /// back-reference that points before the start of the output.
    Corrupted,
}

impl fmt::Display for DecompressError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DecompressError::OutputTooSmall => {
                f.write_str("output buffer too small for the decompressed data")
            }
            DecompressError::Corrupted => f.write_str("invalid compressed data"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecompressError {}
