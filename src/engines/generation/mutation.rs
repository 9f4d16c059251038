use crate::engines::generation::alphabet::random_letter;
use crate::engines::generation::sampling::{sample_until_vowel, DEFAULT_MAX_ATTEMPTS};
use crate::error::Result;
use rand::Rng;

/// Letter-level mutation: substitution, deletion and trailing growth.
#[derive(Debug, Clone)]
pub struct MutationEngine {
    max_attempts: usize,
}

impl MutationEngine {
    pub fn new(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    pub fn mutate<R: Rng>(
        &self,
        word: &str,
        mutation_rate: f64,
        min_len: usize,
        max_len: usize,
        rng: &mut R,
    ) -> Result<String> {
        sample_until_vowel(rng, "mutation", self.max_attempts, |rng| {
            mutate_once(word, mutation_rate, min_len, max_len, rng)
        })
    }
}

impl Default for MutationEngine {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

/// One mutation pass over `word`.
///
/// Each letter mutates with probability `mutation_rate`. A mutated letter is
/// replaced by a random one when the original word is within `max_len` and
/// either at most `min_len` long or a coin flip says so; otherwise it is
/// dropped. All length checks in the scan use the original word. Afterwards
/// random letters are appended, each with probability `mutation_rate`, until
/// a draw fails or the result reaches `max_len`.
fn mutate_once<R: Rng>(
    word: &str,
    mutation_rate: f64,
    min_len: usize,
    max_len: usize,
    rng: &mut R,
) -> String {
    let original_len = word.chars().count();
    let mut result = String::with_capacity(original_len + 1);

    for letter in word.chars() {
        if rng.gen::<f64>() < mutation_rate {
            if original_len <= max_len && (original_len <= min_len || rng.gen::<bool>()) {
                result.push(random_letter(rng));
            }
        } else {
            result.push(letter);
        }
    }

    let mut result_len = result.chars().count();
    while result_len < max_len && rng.gen::<f64>() < mutation_rate {
        result.push(random_letter(rng));
        result_len += 1;
    }

    result
}
