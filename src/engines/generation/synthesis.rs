use crate::engines::generation::alphabet::{is_vowel, random_letter, random_vowel};
use crate::engines::generation::sampling::{sample_until_vowel, DEFAULT_MAX_ATTEMPTS};
use crate::error::Result;
use rand::Rng;

pub const DEFAULT_MAX_CONSONANT_RUN: usize = 3;

/// Builds random pronounceable-ish words from scratch.
#[derive(Debug, Clone)]
pub struct WordSynthesizer {
    max_consonant_run: usize,
    max_attempts: usize,
}

impl WordSynthesizer {
    pub fn new(max_consonant_run: usize, max_attempts: usize) -> Self {
        Self {
            max_consonant_run,
            max_attempts,
        }
    }

    /// Random word with length in `min_len..=max_len`.
    ///
    /// Letters are uniform over the alphabet, except that once the running
    /// consonant count exceeds `max_consonant_run` the next letter is a
    /// forced vowel. Words that still end up vowel-free are redrawn.
    pub fn synthesize<R: Rng>(
        &self,
        min_len: usize,
        max_len: usize,
        rng: &mut R,
    ) -> Result<String> {
        sample_until_vowel(rng, "synthesis", self.max_attempts, |rng| {
            self.draw_word(min_len, max_len, rng)
        })
    }

    fn draw_word<R: Rng>(&self, min_len: usize, max_len: usize, rng: &mut R) -> String {
        let length = rng.gen_range(min_len..=max_len);
        let mut word = String::new();
        let mut consonant_run = 0;

        for _ in 0..length {
            if consonant_run > self.max_consonant_run {
                word.push(random_vowel(rng));
                consonant_run = 0;
            } else {
                let letter = random_letter(rng);
                word.push(letter);
                if is_vowel(letter) {
                    consonant_run = 0;
                } else {
                    consonant_run += 1;
                }
            }
        }

        word
    }
}

impl Default for WordSynthesizer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CONSONANT_RUN, DEFAULT_MAX_ATTEMPTS)
    }
}
