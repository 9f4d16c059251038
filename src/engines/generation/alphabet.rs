/// Letters every candidate word is built from.
///
/// Words are plain `String`s of lowercase ASCII. The engines work on
/// `Vec<char>` while building and only hand out finished `String`s, so
/// slicing never has to think about byte boundaries.
///
/// The one hard rule every engine enforces is the vowel invariant: a word
/// without at least one of `a e i o u` is never placed into a population.
use rand::Rng;

pub const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

pub const CONSONANTS: [char; 21] = [
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't', 'v', 'w', 'x',
    'y', 'z',
];

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

pub fn contains_vowel(word: &str) -> bool {
    word.chars().any(is_vowel)
}

/// Uniform over `a..=z`.
pub fn random_letter<R: Rng>(rng: &mut R) -> char {
    rng.gen_range(b'a'..=b'z') as char
}

pub fn random_vowel<R: Rng>(rng: &mut R) -> char {
    VOWELS[rng.gen_range(0..VOWELS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_alphabet_covers_all_letters_once() {
        let mut letters: Vec<char> = VOWELS.iter().chain(CONSONANTS.iter()).copied().collect();
        letters.sort_unstable();
        letters.dedup();
        assert_eq!(letters.len(), 26);
        assert!(letters.iter().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_contains_vowel() {
        assert!(!contains_vowel("rhythm"));
        assert!(contains_vowel("brick"));
        assert!(!contains_vowel(""));
    }

    #[test]
    fn test_random_letters_are_lowercase() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            assert!(random_letter(&mut rng).is_ascii_lowercase());
            assert!(is_vowel(random_vowel(&mut rng)));
        }
    }
}
