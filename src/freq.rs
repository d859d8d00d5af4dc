use crate::LexmaxError;

/// Number of symbols in the fixed lowercase alphabet.
pub const ALPHABET: usize = 26;

/// Per-letter occurrence counts for a single word. Two words are exact
/// anagrams iff their vectors are equal.
pub type FreqVector = [u32; ALPHABET];

/// Count letter occurrences in `word`.
///
/// Any character outside `a..=z` fails the call with
/// [`LexmaxError::InvalidSymbol`]; the filter never silently ignores or
/// remaps foreign symbols.
pub fn frequency_vector(word: &str) -> Result<FreqVector, LexmaxError> {
    let mut freq = [0u32; ALPHABET];
    for ch in word.chars() {
        if !ch.is_ascii_lowercase() {
            return Err(LexmaxError::InvalidSymbol {
                word: word.to_string(),
                symbol: ch,
            });
        }
        freq[(ch as u8 - b'a') as usize] += 1;
    }
    Ok(freq)
}

/// Total letter count of a vector.
pub fn vector_sum(freq: &FreqVector) -> u32 {
    freq.iter().sum()
}
