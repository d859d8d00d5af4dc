//! Incremental dominance check over accepted frequency vectors.
//!
//! Vector `A` dominates `B` when `A != B` and `A[i] >= B[i]` for every
//! letter. Instead of comparing each candidate against every accepted
//! vector, the index keeps one bit-set per `(letter, required-count)` pair
//! holding the accepted indices whose count at that letter is at least the
//! required count. A candidate is dominated exactly when the intersection
//! of its per-letter rows is non-empty.

use crate::bitset::BitMask;
use crate::freq::{FreqVector, ALPHABET};

/// Bit-indexed set of accepted vectors.
///
/// Built fresh per filtering call; nothing is shared across calls.
#[derive(Debug, Default)]
pub struct DominanceIndex {
    /// Accepted vectors in acceptance order. Bit `i` of every row refers to
    /// `accepted[i]`.
    accepted: Vec<FreqVector>,
    /// `rows[letter][c - 1]` holds the accepted indices with count >= `c`
    /// at `letter`. Rows grow on demand from the counts actually inserted,
    /// so per-letter counts carry no fixed ceiling. Row `c` is always a
    /// superset of row `c + 1`.
    rows: [Vec<BitMask>; ALPHABET],
}

impl DominanceIndex {
    pub fn new() -> Self {
        Self {
            accepted: Vec::new(),
            rows: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Number of vectors accepted so far.
    pub fn len(&self) -> usize {
        self.accepted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }

    /// Decide whether `vector` is dominated by an accepted vector and, if
    /// not, register it. Returns `true` on acceptance.
    ///
    /// Callers must offer candidates in descending order of component sum
    /// and pairwise distinct. Under that ordering every dominator of
    /// `vector` has already been offered, and checking accepted vectors
    /// alone suffices: a rejected dominator was itself dominated by an
    /// accepted vector, which by transitivity dominates `vector` too.
    pub fn query_and_accept(&mut self, vector: &FreqVector) -> bool {
        if self.is_dominated(vector) {
            false
        } else {
            self.insert(vector);
            true
        }
    }

    fn is_dominated(&self, vector: &FreqVector) -> bool {
        if self.accepted.is_empty() {
            return false;
        }
        // Start from every accepted index and knock out those falling
        // short on some letter the candidate needs.
        let mut mask = BitMask::all_below(self.accepted.len());
        for letter in 0..ALPHABET {
            let need = vector[letter] as usize;
            if need == 0 {
                continue;
            }
            // A missing row means no accepted vector reaches `need` at
            // this letter, so nothing can dominate the candidate.
            let Some(row) = self.rows[letter].get(need - 1) else {
                return false;
            };
            mask.intersect(row);
            if mask.is_empty() {
                return false;
            }
        }
        // Some accepted index met every positive requirement. Vectors are
        // pairwise distinct post-dedup, so that index is strictly greater
        // on at least one letter.
        true
    }

    fn insert(&mut self, vector: &FreqVector) {
        let idx = self.accepted.len();
        for letter in 0..ALPHABET {
            let count = vector[letter] as usize;
            let rows = &mut self.rows[letter];
            if rows.len() < count {
                rows.resize_with(count, BitMask::new);
            }
            // This vector satisfies every >=c requirement up to its own
            // count at this letter.
            for row in rows.iter_mut().take(count) {
                row.set(idx);
            }
        }
        self.accepted.push(*vector);
    }
}
