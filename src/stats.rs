use serde::Serialize;

/// Counters describing one filtering run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterStats {
    /// Words in the input, duplicates included.
    pub input_words: usize,
    /// Words removed because another input word was an exact anagram.
    pub anagram_dropped: usize,
    /// Unique vectors rejected as dominated by an accepted vector.
    pub dominated: usize,
    /// Words surviving the full filter.
    pub survivors: usize,
}
