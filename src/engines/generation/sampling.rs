use crate::engines::generation::alphabet::contains_vowel;
use crate::error::{NameGenError, Result};
use rand::Rng;

/// Default cap on rejection-sampling retries.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Rejection sampling: run `attempt` until it yields a word with a vowel,
/// giving up after `max_attempts` tries.
pub fn sample_until_vowel<R, F>(
    rng: &mut R,
    operation: &'static str,
    max_attempts: usize,
    mut attempt: F,
) -> Result<String>
where
    R: Rng,
    F: FnMut(&mut R) -> String,
{
    for tries in 1..=max_attempts {
        let word = attempt(rng);
        if contains_vowel(&word) {
            if tries > 1 {
                log::debug!("{} accepted \"{}\" after {} attempts", operation, word, tries);
            }
            return Ok(word);
        }
    }

    log::warn!("{} found no word with a vowel in {} attempts", operation, max_attempts);
    Err(NameGenError::GenerationExhausted {
        operation,
        attempts: max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_returns_first_word_with_vowel() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut candidates = vec!["xyz", "brr", "bra"].into_iter();
        let word = sample_until_vowel(&mut rng, "test", 10, |_| {
            candidates.next().unwrap_or("zzz").to_string()
        })
        .unwrap();
        assert_eq!(word, "bra");
    }

    #[test]
    fn test_gives_up_after_cap() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut calls = 0;
        let result = sample_until_vowel(&mut rng, "test", 25, |_| {
            calls += 1;
            "psst".to_string()
        });
        assert_eq!(calls, 25);
        assert!(matches!(
            result,
            Err(NameGenError::GenerationExhausted { operation: "test", attempts: 25 })
        ));
    }
}
