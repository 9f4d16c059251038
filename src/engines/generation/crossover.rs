use crate::engines::generation::sampling::{sample_until_vowel, DEFAULT_MAX_ATTEMPTS};
use crate::error::{NameGenError, Result};
use rand::Rng;

/// Random choices behind one crossover attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossoverPlan {
    pub target_len: usize,
    /// The first parent supplies the prefix when true.
    pub prefix_from_first: bool,
    pub splice: usize,
}

impl CrossoverPlan {
    /// Both parents must already be known to have at least 2 characters.
    pub fn draw<R: Rng>(
        first_len: usize,
        second_len: usize,
        min_len: usize,
        max_len: usize,
        rng: &mut R,
    ) -> Self {
        let upper = max_len.min(first_len + second_len).max(min_len);
        let target_len = rng.gen_range(min_len..=upper);
        let prefix_from_first = rng.gen::<bool>();
        let prefix_len = if prefix_from_first { first_len } else { second_len };
        let splice = rng.gen_range(1..prefix_len);

        Self {
            target_len,
            prefix_from_first,
            splice,
        }
    }

    /// Splices the parents and trims an oversized child to a random window.
    pub fn apply<R: Rng>(&self, first: &str, second: &str, rng: &mut R) -> String {
        let (prefix, suffix) = if self.prefix_from_first {
            (first, second)
        } else {
            (second, first)
        };

        let child = splice_parents(prefix, suffix, self.splice, self.target_len);
        let child_len = child.chars().count();
        if child_len > self.target_len {
            let start = rng.gen_range(0..=child_len - self.target_len);
            trim_to_window(&child, start, self.target_len)
        } else {
            child
        }
    }
}

/// `prefix[..splice] + suffix[splice..target_len - splice + 1]`.
///
/// A negative end counts back from the end of `suffix`, so a long suffix can
/// still contribute letters when `splice` passes `target_len + 1`. Bounds are
/// clamped to `suffix` and an end before the start gives an empty slice. The
/// result can be longer than `target_len`; `CrossoverPlan::apply` trims it.
pub fn splice_parents(prefix: &str, suffix: &str, splice: usize, target_len: usize) -> String {
    let suffix: Vec<char> = suffix.chars().collect();
    let start = splice.min(suffix.len());
    let end = if splice > target_len + 1 {
        suffix.len().saturating_sub(splice - target_len - 1)
    } else {
        target_len + 1 - splice
    };
    let end = end.min(suffix.len()).max(start);

    prefix
        .chars()
        .take(splice)
        .chain(suffix[start..end].iter().copied())
        .collect()
}

/// `child[start..start + target_len - 1]`: the window is one character short
/// of `target_len`.
pub fn trim_to_window(child: &str, start: usize, target_len: usize) -> String {
    let end = (start + target_len).saturating_sub(1).max(start);
    child.chars().skip(start).take(end - start).collect()
}

/// Single-point string crossover.
#[derive(Debug, Clone)]
pub struct CrossoverEngine {
    max_attempts: usize,
}

impl CrossoverEngine {
    pub fn new(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    pub fn crossover<R: Rng>(
        &self,
        first: &str,
        second: &str,
        min_len: usize,
        max_len: usize,
        rng: &mut R,
    ) -> Result<String> {
        let first_len = first.chars().count();
        let second_len = second.chars().count();
        if first_len < 2 {
            return Err(NameGenError::InvalidParent(first.to_string()));
        }
        if second_len < 2 {
            return Err(NameGenError::InvalidParent(second.to_string()));
        }

        sample_until_vowel(rng, "crossover", self.max_attempts, |rng| {
            let plan = CrossoverPlan::draw(first_len, second_len, min_len, max_len, rng);
            plan.apply(first, second, rng)
        })
    }
}

impl Default for CrossoverEngine {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::generation::alphabet::contains_vowel;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_forced_plan_gives_pinned_child() {
        let plan = CrossoverPlan {
            target_len: 6,
            prefix_from_first: true,
            splice: 2,
        };
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(plan.apply("hello", "world", &mut rng), "herld");

        let swapped = CrossoverPlan {
            prefix_from_first: false,
            ..plan
        };
        assert_eq!(swapped.apply("hello", "world", &mut rng), "wollo");
    }

    #[test]
    fn test_splice_keeps_off_by_one_end() {
        // end = target - splice + 1
        assert_eq!(splice_parents("hello", "world", 2, 6), "herld");
        assert_eq!(splice_parents("hello", "world", 2, 3), "he");
        assert_eq!(splice_parents("hello", "world", 1, 4), "horl");
    }

    #[test]
    fn test_splice_with_end_before_start_is_prefix_only() {
        assert_eq!(splice_parents("abcdefgh", "xy", 6, 3), "abcdef");
        assert_eq!(splice_parents("abcdefgh", "wxyz", 5, 3), "abcde");
    }

    #[test]
    fn test_splice_negative_end_counts_from_back_of_suffix() {
        // end = 3 - 6 + 1 = -2, i.e. suffix[6..14] of a 16-letter suffix.
        assert_eq!(
            splice_parents("abcdefgh", "ponmlkjihgfedcba", 6, 3),
            "abcdefjihgfedc"
        );
    }

    #[test]
    fn test_trim_window_is_one_short_of_target() {
        assert_eq!(trim_to_window("abcdef", 1, 3), "bc");
        assert_eq!(trim_to_window("abcdef", 0, 4), "abc");
        assert_eq!(trim_to_window("abcdef", 2, 1), "");
    }

    #[test]
    fn test_oversized_child_is_trimmed() {
        let plan = CrossoverPlan {
            target_len: 3,
            prefix_from_first: true,
            splice: 6,
        };
        let mut rng = StdRng::seed_from_u64(9);
        let child = plan.apply("abcdefgh", "xy", &mut rng);
        assert_eq!(child.len(), 2);
        assert!("abcdef".contains(&child));
    }

    #[test]
    fn test_short_parent_is_rejected() {
        let engine = CrossoverEngine::default();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            engine.crossover("a", "xyz", 1, 3, &mut rng),
            Err(NameGenError::InvalidParent(parent)) if parent == "a"
        ));
        assert!(matches!(
            engine.crossover("xyz", "b", 1, 3, &mut rng),
            Err(NameGenError::InvalidParent(parent)) if parent == "b"
        ));
    }

    #[test]
    fn test_children_fit_bounds() {
        let engine = CrossoverEngine::default();
        let mut rng = StdRng::seed_from_u64(42);
        let parents = [
            ("hello", "world"),
            ("banana", "kiwi"),
            ("ox", "strength"),
            ("aria", "bo"),
        ];

        for _ in 0..100 {
            for (a, b) in parents {
                let child = engine.crossover(a, b, 3, 6, &mut rng).unwrap();
                assert!(child.len() <= 6, "{} + {} -> {}", a, b, child);
                assert!(contains_vowel(&child));
            }
        }
    }

    #[test]
    fn test_vowel_free_parents_exhaust_retries() {
        let engine = CrossoverEngine::new(50);
        let mut rng = StdRng::seed_from_u64(2);
        assert!(matches!(
            engine.crossover("bcd", "fgh", 2, 5, &mut rng),
            Err(NameGenError::GenerationExhausted { operation: "crossover", attempts: 50 })
        ));
    }
}
