//! Maximal-vector word filtering.
//!
//! Removes every word that is letter-content redundant: a word is dropped
//! when another input word is an exact anagram of it, or when its letters
//! form a sub-multiset of another word's letters. The survivors are the
//! words whose letter-frequency vectors are maximal under componentwise
//! `>=`, after exact-anagram groups have been eliminated in full.
//!
//! Pipeline: words -> frequency vectors ([`freq`]) -> anagram collapse
//! ([`dedup`]) -> descending-sum dominance scan ([`maximal`] over
//! [`dominance`]). Each call builds its own state; nothing persists
//! between calls and nothing is shared across threads.

pub mod bitset;
pub mod dedup;
pub mod dominance;
pub mod error;
pub mod freq;
pub mod maximal;
pub mod stats;

pub use dedup::{dedup_anagrams, UniqueEntry};
pub use dominance::DominanceIndex;
pub use error::LexmaxError;
pub use freq::{frequency_vector, vector_sum, FreqVector, ALPHABET};
pub use maximal::maximal_words;
pub use stats::FilterStats;

/// Filter `words` down to the maximal, anagram-free subset.
///
/// Survivors are returned in acceptance order (descending letter count,
/// ties in first-occurrence order); callers needing the original input
/// order must re-sort. Fails with [`LexmaxError::InvalidSymbol`] if any
/// word contains a character outside `a..=z`.
pub fn filter_redundant<S: AsRef<str>>(words: &[S]) -> Result<Vec<String>, LexmaxError> {
    Ok(maximal_words(dedup_anagrams(words)?))
}

/// Like [`filter_redundant`], additionally reporting run counters.
pub fn filter_redundant_with_stats<S: AsRef<str>>(
    words: &[S],
) -> Result<(Vec<String>, FilterStats), LexmaxError> {
    let entries = dedup_anagrams(words)?;
    let unique = entries.len();
    let survivors = maximal_words(entries);
    let stats = FilterStats {
        input_words: words.len(),
        anagram_dropped: words.len() - unique,
        dominated: unique - survivors.len(),
        survivors: survivors.len(),
    };
    Ok((survivors, stats))
}
