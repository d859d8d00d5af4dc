use crate::dedup::UniqueEntry;
use crate::dominance::DominanceIndex;
use crate::freq::vector_sum;

/// Feed deduplicated entries to a fresh [`DominanceIndex`] in descending
/// order of component sum and collect the survivors' words.
///
/// The ordering is a correctness precondition of the index: a dominator has
/// a strictly larger component sum than anything it dominates, so every
/// true dominator is decided before its victims. The sort is stable, so
/// equal sums keep their first-occurrence order. Words come back in
/// acceptance order; callers wanting input order must re-sort.
pub fn maximal_words(mut entries: Vec<UniqueEntry>) -> Vec<String> {
    entries.sort_by(|a, b| vector_sum(&b.vector).cmp(&vector_sum(&a.vector)));

    let mut index = DominanceIndex::new();
    let mut survivors = Vec::new();
    for entry in entries {
        if index.query_and_accept(&entry.vector) {
            survivors.push(entry.word);
        }
    }
    survivors
}
