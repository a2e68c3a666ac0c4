//! Sorted reference list with binary-search membership tests.
//!
//! Used for the stop-word and stop-language lists. Building distributes the
//! items into buckets by leading byte, insertion-sorts each bucket, then
//! concatenates the buckets into one ascending sequence.
//!
//! ## Buckets
//! - `low`: first byte sorts before `a` (digits, punctuation, upper-case
//!   ASCII, the empty string)
//! - `a` ..= `z`: one bucket per lower-case ASCII letter
//! - `high`: first byte sorts after `z` (`{`, `~`, every non-ASCII lead byte)
//!
//! Concatenating `low, a..z, high` keeps the whole sequence in byte order, so
//! words like `"&"` or `"élan"` are routed instead of indexing past the
//! alphabet.

use tracing::debug;

const LETTERS: usize = 26;
const LOW: usize = 0;
const HIGH: usize = LETTERS + 1;

/// Immutable, sorted, duplicate-free set of strings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MembershipIndex {
    sorted: Vec<String>,
    overflow: usize,
}

impl MembershipIndex {
    /// Build the index from any list of strings.
    ///
    /// Matching is case-sensitive; lower-case the items (and the queries)
    /// beforehand when case should not matter.
    pub fn build<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut buckets: Vec<Vec<String>> = vec![Vec::new(); LETTERS + 2];
        let mut overflow = 0;

        for item in items {
            let item = item.into();
            let slot = bucket_for(&item);
            if slot == LOW || slot == HIGH {
                overflow += 1;
            }
            insert_sorted(&mut buckets[slot], item);
        }

        let sorted: Vec<String> = buckets.into_iter().flatten().collect();
        debug!(
            "Built membership index with {} entries ({} outside a-z)",
            sorted.len(),
            overflow
        );

        Self { sorted, overflow }
    }

    /// Binary search for `target`
    pub fn contains(&self, target: &str) -> bool {
        self.sorted
            .binary_search_by(|probe| probe.as_str().cmp(target))
            .is_ok()
    }

    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// The backing sequence, ascending
    pub fn as_slice(&self) -> &[String] {
        &self.sorted
    }

    /// How many inserted items landed in the `low`/`high` buckets
    pub fn overflow_count(&self) -> usize {
        self.overflow
    }
}

fn bucket_for(item: &str) -> usize {
    match item.as_bytes().first() {
        None => LOW,
        Some(&b) if b < b'a' => LOW,
        Some(&b) if b > b'z' => HIGH,
        Some(&b) => 1 + (b - b'a') as usize,
    }
}

/// Insert at the first position whose element is not smaller; skip duplicates
fn insert_sorted(bucket: &mut Vec<String>, item: String) {
    let mut pos = 0;
    while pos < bucket.len() && bucket[pos] < item {
        pos += 1;
    }
    if bucket.get(pos) != Some(&item) {
        bucket.insert(pos, item);
    }
}
