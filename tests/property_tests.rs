use std::collections::BTreeSet;

use lexmax::filter_redundant;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn freq(word: &str) -> [u32; 26] {
    let mut f = [0u32; 26];
    for b in word.bytes() {
        f[(b - b'a') as usize] += 1;
    }
    f
}

/// O(n²) pairwise reference: a word survives iff no other word is an exact
/// anagram of it and no other word's vector dominates it.
fn pairwise_reference(words: &[String]) -> BTreeSet<String> {
    let vecs: Vec<[u32; 26]> = words.iter().map(|w| freq(w)).collect();

    let mut out = BTreeSet::new();
    'candidates: for (i, word) in words.iter().enumerate() {
        for j in 0..words.len() {
            if i == j {
                continue;
            }
            if vecs[j] == vecs[i] {
                continue 'candidates; // exact anagram
            }
            if (0..26).all(|k| vecs[j][k] >= vecs[i][k]) {
                continue 'candidates; // dominated
            }
        }
        out.insert(word.clone());
    }
    out
}

fn result_set(words: &[String]) -> BTreeSet<String> {
    filter_redundant(words)
        .expect("filtering")
        .into_iter()
        .collect()
}

// Small alphabet and short words to force anagram and dominance collisions.
fn words_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-d]{1,7}", 0..50)
}

proptest! {
    #[test]
    fn matches_pairwise_reference(words in words_strategy()) {
        prop_assert_eq!(result_set(&words), pairwise_reference(&words));
    }

    #[test]
    fn wider_alphabet_matches_reference(
        words in proptest::collection::vec("[a-z]{1,10}", 0..30)
    ) {
        prop_assert_eq!(result_set(&words), pairwise_reference(&words));
    }

    #[test]
    fn idempotent(words in words_strategy()) {
        let once = filter_redundant(&words).unwrap();
        let twice = filter_redundant(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn result_set_independent_of_input_order(
        words in words_strategy(),
        seed in any::<u64>(),
    ) {
        let mut shuffled = words.clone();
        shuffled.shuffle(&mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(result_set(&words), result_set(&shuffled));
    }

    #[test]
    fn survivors_are_maximal_and_anagram_free(words in words_strategy()) {
        let survivors = result_set(&words);
        for survivor in &survivors {
            let sv = freq(survivor);
            let same_vector = words.iter().filter(|w| freq(w) == sv).count();
            prop_assert_eq!(same_vector, 1, "{} has an exact anagram", survivor);
            for other in &words {
                let ov = freq(other);
                if ov != sv {
                    prop_assert!(
                        !(0..26).all(|k| ov[k] >= sv[k]),
                        "{} dominated by {}",
                        survivor,
                        other
                    );
                }
            }
        }
    }
}
