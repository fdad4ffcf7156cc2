//! Amortized translation from code unit offsets to byte offsets.
//!
//! Token streams are scanned in roughly increasing offset order, so each
//! lookup resumes the scalar walk from the nearest previously cached offset
//! below the query instead of from the start of the text. Both coordinates
//! grow monotonically, which makes any cached predecessor a valid anchor.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::fmt;
use text_size::TextSize;
use tracing::trace;

/// Texts of at most this many code units bypass the cache and count directly
/// from the start of the text.
///
/// Cache bookkeeping costs more than it saves on short texts, and short text
/// instances rarely live long enough to amortize it. Tuned against typical
/// editor payloads; adjust here rather than at call sites.
pub const CACHE_THRESHOLD: u32 = 50;

/// Counters describing how much work a cache has performed.
///
/// `scanned_units` grows by the anchor-to-query distance of every populating
/// lookup; a repeated lookup leaves it unchanged.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cached offset pairs.
    pub entries: usize,
    /// Total code units walked while populating entries.
    pub scanned_units: u64,
}

#[derive(Default)]
struct CacheInner {
    /// Exact-hit map: code unit offset to byte offset of the same boundary.
    entries: FxHashMap<u32, TextSize>,
    /// Cached code unit offsets, kept sorted for predecessor lookup.
    sorted: Vec<u32>,
    /// Cumulative anchor-to-query scan distance.
    scanned_units: u64,
}

/// Cache of code unit offset to byte offset pairs for one text.
///
/// Owned by exactly one `SourceText`; entries are only ever added for the
/// lifetime of the text. Population is a read-modify-write, so the interior
/// is lock-guarded even though the reference usage is single-threaded.
#[derive(Default)]
pub(crate) struct ByteOffsetCache {
    inner: RwLock<CacheInner>,
}

impl ByteOffsetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Byte offset of the scalar boundary `unit_offset` code units into
    /// `text`.
    ///
    /// Returns `None` when the offset splits a surrogate pair or lies past
    /// the end of the text; nothing is cached for failed lookups.
    pub fn byte_offset(&self, text: &str, unit_offset: u32) -> Option<TextSize> {
        // Fast path: exact hit (read lock)
        {
            let inner = self.inner.read();
            if let Some(&byte) = inner.entries.get(&unit_offset) {
                return Some(byte);
            }
        }

        // Slow path: walk from the nearest cached predecessor (write lock)
        let mut inner = self.inner.write();

        // Double-check after acquiring write lock
        if let Some(&byte) = inner.entries.get(&unit_offset) {
            return Some(byte);
        }

        let idx = inner.sorted.partition_point(|&cached| cached < unit_offset);
        let (anchor_unit, anchor_byte) = if idx == 0 {
            (0, TextSize::new(0))
        } else {
            let cached = inner.sorted[idx - 1];
            (cached, inner.entries[&cached])
        };

        let byte = advance_code_units(text, anchor_byte, unit_offset - anchor_unit)?;
        inner.entries.insert(unit_offset, byte);
        inner.sorted.insert(idx, unit_offset);
        inner.scanned_units += u64::from(unit_offset - anchor_unit);
        trace!(unit_offset, byte_offset = u32::from(byte), "cached offset pair");

        Some(byte)
    }

    pub fn stats(&self) -> CacheStats {
        let inner = self.inner.read();
        CacheStats {
            entries: inner.entries.len(),
            scanned_units: inner.scanned_units,
        }
    }
}

impl fmt::Debug for ByteOffsetCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("ByteOffsetCache")
            .field("entries", &inner.entries.len())
            .finish()
    }
}

/// Advance `units` code units forward from the scalar boundary `from`,
/// returning the byte offset of the boundary reached.
///
/// `from` must lie on a char boundary of `text`. Returns `None` when the
/// requested distance ends inside a surrogate pair or runs past the end of
/// the text.
pub(crate) fn advance_code_units(text: &str, from: TextSize, units: u32) -> Option<TextSize> {
    let mut remaining = units;
    let mut byte = usize::from(from);
    for c in text[byte..].chars() {
        if remaining == 0 {
            break;
        }
        let width = c.len_utf16() as u32;
        if width > remaining {
            // the boundary would split a surrogate pair
            return None;
        }
        remaining -= width;
        byte += c.len_utf8();
    }
    (remaining == 0).then(|| TextSize::new(byte as u32))
}
