//! Pure Rust implementation of LZF block compression.
//!
//! LZF is a Lempel-Ziv variant tuned for very high throughput at modest
//! compression ratios. It operates on self-contained blocks: one call
//! compresses one input block into one compressed block, and no state is
//! carried between blocks. That makes it a good fit for caches, RPC
//! payloads and on-disk record formats that compress at record granularity.
//!
//! # Overview
//!
//! The compressed block format is the LZF "type-1" block framing as used by
//! liblzf, without liblzf's optional stream header. Any conformant LZF
//! decompressor accepts the output of [`compress`], and [`decompress`]
//! accepts the output of any conformant LZF compressor.
//!
//! The slice based entry points [`compress_into`] and [`decompress_into`]
//! write into caller provided buffers and never allocate, apart from the
//! compressor's 64 KiB scratch table, which can itself be supplied by the
//! caller via [`compress_into_with_table`](block::compress_into_with_table)
//! and reused across calls.
//!
//! # Example: block roundtrip
//! ```
//! let input: &[u8] = b"Hello people, what's up?";
//! let compressed = lzf_flex::compress(input);
//! let decompressed = lzf_flex::decompress(&compressed, input.len()).unwrap();
//! assert_eq!(input, decompressed);
//! ```
//!
//! ## Feature Flags
//!
//! - `std` adds `std::error::Error` impls for the error types. _enabled by
//!   default_
//!
//! Without `std` the crate is `no_std` and only depends on `alloc` for the
//! `Vec` convenience functions.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod block;

pub use block::{compress, compress_into, get_maximum_output_size};

pub use block::{decompress, decompress_into};

pub use block::{CompressError, DecompressError, HashTable};
