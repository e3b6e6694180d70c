use std::collections::BTreeMap;
use std::time::SystemTime;

use parking_lot::Mutex;

/// Thread-safe store of formatted Error-level entries awaiting delivery.
///
/// Entries are keyed by a [`CacheKey`] pairing the instant the entry was
/// produced with a per-cache sequence number. The sequence makes every key
/// handed out by [`ErrorCache::add`] unique even when the clock does not
/// advance between two inserts, and orders the cache oldest-first.
///
/// # Thread Safety
///
/// A single mutex guards the backing map. It is held for one insert, one
/// swap, or one length check at a time and never across formatting, printing
/// or sending.
///
/// # Examples
///
/// ```
/// # use tintlog::ErrorCache;
/// # use std::time::SystemTime;
/// let cache = ErrorCache::new();
/// cache.add(SystemTime::now(), "first".to_string());
/// cache.add(SystemTime::now(), "second".to_string());
///
/// assert_eq!(cache.drain_all(), vec!["first", "second"]);
/// assert!(cache.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct ErrorCache {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    entries: BTreeMap<CacheKey, String>,
    next_seq: u64,
}

/// Unique, ordered key of a cache entry.
///
/// Ordering is by sequence first, so iteration follows insertion order even
/// if the wall clock steps backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub seq: u64,
    pub at: SystemTime,
}

impl Ord for CacheKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.seq.cmp(&other.seq).then(self.at.cmp(&other.at))
    }
}

impl PartialOrd for CacheKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl ErrorCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `content` under a fresh key stamped with `at`.
    ///
    /// Returns the key that was assigned. Once the sequence reaches
    /// `u64::MAX` it stays there and keys are told apart by `at` alone.
    pub fn add(&self, at: SystemTime, content: String) -> CacheKey {
        let mut inner = self.inner.lock();
        let key = CacheKey {
            seq: inner.next_seq,
            at,
        };
        inner.next_seq = inner.next_seq.saturating_add(1);
        inner.entries.insert(key, content);
        key
    }

    /// Stores `content` under an explicit key, replacing any previous value.
    ///
    /// Identical keys are last-writer-wins. Keys obtained from [`add`](Self::add)
    /// never collide, so this is only reached by callers that build keys
    /// themselves, e.g. when restoring a failed delivery.
    pub fn insert(&self, key: CacheKey, content: String) -> Option<String> {
        let mut inner = self.inner.lock();
        if key.seq >= inner.next_seq {
            inner.next_seq = key.seq.saturating_add(1);
        }
        inner.entries.insert(key, content)
    }

    /// Takes every entry out of the cache, oldest first.
    ///
    /// The backing map is swapped for an empty one under the lock, so a
    /// concurrent [`add`](Self::add) lands either in the returned batch or in
    /// the cache afterwards, never in both and never in neither.
    pub fn drain_all(&self) -> Vec<String> {
        self.drain_entries().into_values().collect()
    }

    /// Like [`drain_all`](Self::drain_all) but keeps the keys.
    pub fn drain_entries(&self) -> BTreeMap<CacheKey, String> {
        let mut inner = self.inner.lock();
        std::mem::take(&mut inner.entries)
    }

    /// Puts previously drained entries back, keeping their original order
    /// relative to anything added in the meantime.
    pub fn restore(&self, entries: BTreeMap<CacheKey, String>) {
        if entries.is_empty() {
            return;
        }
        let mut inner = self.inner.lock();
        for (key, content) in entries {
            // an entry written after the drain wins over the restored copy
            inner.entries.entry(key).or_insert(content);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }
}
