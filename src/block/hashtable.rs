//! The hash table used by the compressor to find back-references.
//!
//! Three byte groups are hashed into a fixed table mapping each slot to the
//! most recent input position the fingerprint was seen at. Collisions and
//! stale entries are fine: the compressor re-checks the actual bytes before
//! it emits a back-reference.

use alloc::vec::Vec;

/// log2 of the number of slots.
pub(crate) const HASH_LOG: u32 = 14;

/// Number of slots in the table.
pub(crate) const HASH_TABLE_SIZE: usize = 1 << HASH_LOG;

/// Scratch table for [`compress_into_with_table`](super::compress_into_with_table).
///
/// Allocating the table is the only heap work a compression call does, so
/// callers compressing many blocks can create one table and reuse it.
/// Entries left over from a previous input are verified against the current
/// input before use. They may change which matches are picked, and with
/// that the exact compressed bytes, but never what the block decompresses
/// to. Call [`clear`](HashTable::clear) between inputs when reproducible
/// output matters.
///
/// A table must not be shared by two compression calls running at the same
/// time; different tables can be used in parallel freely.
#[derive(Debug, Clone)]
#[repr(align(64))]
pub struct HashTable {
    dict: Vec<u32>,
}

impl HashTable {
    #[inline]
    pub fn new() -> Self {
        Self {
            dict: alloc::vec![0; HASH_TABLE_SIZE],
        }
    }

    /// Resets all slots to the never-written state.
    #[inline]
    pub fn clear(&mut self) {
        self.dict.fill(0);
    }

    #[inline]
    pub(crate) fn get_at(&self, slot: usize) -> u32 {
        self.dict[slot]
    }

    #[inline]
    pub(crate) fn put_at(&mut self, slot: usize, pos: u32) {
        self.dict[slot] = pos;
    }
}

impl Default for HashTable {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Slot for a rolling fingerprint: move the top [`HASH_LOG`] bits down, mix
/// with `5 * hval`, mask to table size. Changing this changes which matches
/// are found, and with that the compressed output, so it must stay
/// bit-identical to liblzf's.
#[inline]
pub(crate) fn hash_slot(hval: u32) -> usize {
    (((hval >> (3 * 8 - HASH_LOG)).wrapping_sub(hval.wrapping_mul(5)))
        & (HASH_TABLE_SIZE as u32 - 1)) as usize
}
