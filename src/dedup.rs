use std::collections::HashMap;

use crate::freq::{frequency_vector, FreqVector};
use crate::LexmaxError;

/// A frequency vector that occurred exactly once in the input, paired with
/// the word that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueEntry {
    pub vector: FreqVector,
    pub word: String,
}

/// Collapse exact anagrams.
///
/// Words sharing a frequency vector eliminate each other outright, whether
/// or not that vector would have been maximal, so only vectors seen exactly
/// once survive. Output follows the first-occurrence order of each distinct
/// vector in the input.
pub fn dedup_anagrams<S: AsRef<str>>(words: &[S]) -> Result<Vec<UniqueEntry>, LexmaxError> {
    let mut first_seen: Vec<(FreqVector, String)> = Vec::new();
    let mut occurrences: HashMap<FreqVector, usize> = HashMap::new();

    for word in words {
        let word = word.as_ref();
        let freq = frequency_vector(word)?;
        let seen = occurrences.entry(freq).or_insert(0);
        if *seen == 0 {
            first_seen.push((freq, word.to_string()));
        }
        *seen += 1;
    }

    Ok(first_seen
        .into_iter()
        .filter(|(freq, _)| occurrences[freq] == 1)
        .map(|(vector, word)| UniqueEntry { vector, word })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(entries: &[UniqueEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.word.as_str()).collect()
    }

    #[test]
    fn empty_input() {
        let out = dedup_anagrams::<&str>(&[]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn anagram_groups_drop_entirely() {
        let out = dedup_anagrams(&["eat", "tea", "dog", "ate"]).unwrap();
        assert_eq!(words(&out), ["dog"]);
    }

    #[test]
    fn repeated_word_is_its_own_anagram() {
        let out = dedup_anagrams(&["cat", "cat"]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn preserves_first_occurrence_order() {
        let out = dedup_anagrams(&["bc", "ab", "cd"]).unwrap();
        assert_eq!(words(&out), ["bc", "ab", "cd"]);
    }

    #[test]
    fn invalid_symbol_fails_whole_call() {
        assert!(dedup_anagrams(&["ok", "bad!"]).is_err());
    }
}
