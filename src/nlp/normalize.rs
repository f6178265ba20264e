//! Token normalization
//!
//! The default normalizer lowercases and strips a handful of common English
//! inflections. It is deliberately light; plug in a real stemmer through
//! [`Normalizer`] when accuracy matters.

use crate::traits::Normalizer;

/// Lowercase + light English suffix stripping
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicStemmer;

impl BasicStemmer {
    /// Create a new stemmer
    pub fn new() -> Self {
        Self
    }

    /// Stem a single word
    pub fn stem(&self, word: &str) -> String {
        let lower = word.to_lowercase();

        if lower.ends_with("ies") && lower.len() > 4 {
            return format!("{}y", &lower[..lower.len() - 3]);
        }
        if lower.ends_with("es") && lower.len() > 3 {
            let stem = &lower[..lower.len() - 2];
            if stem.ends_with("ss")
                || stem.ends_with("sh")
                || stem.ends_with("ch")
                || stem.ends_with('x')
                || stem.ends_with('o')
            {
                return stem.to_string();
            }
        }
        if lower.ends_with('s') && lower.len() > 2 && !lower.ends_with("ss") {
            return lower[..lower.len() - 1].to_string();
        }
        if lower.ends_with("ing") && lower.len() > 5 {
            return undouble(&lower[..lower.len() - 3]);
        }
        if lower.ends_with("ied") && lower.len() > 4 {
            return format!("{}y", &lower[..lower.len() - 3]);
        }
        if lower.ends_with("ed") && lower.len() > 4 {
            return undouble(&lower[..lower.len() - 2]);
        }

        lower
    }
}

impl Normalizer for BasicStemmer {
    fn normalize(&self, text: &str) -> String {
        self.stem(text)
    }
}

/// Drop a doubled final consonant (`runn` -> `run`), keeping `ll`, `ss`, `zz`.
fn undouble(stem: &str) -> String {
    let mut chars = stem.char_indices().rev();
    if let (Some((last_idx, last)), Some((_, prev))) = (chars.next(), chars.next()) {
        let keep = matches!(last, 'a' | 'e' | 'i' | 'o' | 'u' | 'l' | 's' | 'z');
        if last == prev && last.is_alphabetic() && !keep {
            return stem[..last_idx].to_string();
        }
    }
    stem.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_stemming() {
        let stemmer = BasicStemmer::new();

        assert_eq!(stemmer.stem("running"), "run");
        assert_eq!(stemmer.stem("Cats"), "cat");
        assert_eq!(stemmer.stem("studies"), "study");
        assert_eq!(stemmer.stem("boxes"), "box");
        assert_eq!(stemmer.stem("studied"), "study");
        assert_eq!(stemmer.stem("stopped"), "stop");
        assert_eq!(stemmer.stem("learning"), "learn");
    }

    #[test]
    fn test_keeps_double_l_and_s() {
        let stemmer = BasicStemmer::new();

        assert_eq!(stemmer.stem("falling"), "fall");
        assert_eq!(stemmer.stem("glass"), "glass");
        assert_eq!(stemmer.stem("missed"), "miss");
    }

    #[test]
    fn test_short_words_untouched() {
        let stemmer = BasicStemmer::new();

        assert_eq!(stemmer.stem("is"), "is");
        assert_eq!(stemmer.stem("red"), "red");
        assert_eq!(stemmer.stem("sing"), "sing");
    }

    #[test]
    fn test_non_ascii() {
        let stemmer = BasicStemmer::new();

        assert_eq!(stemmer.stem("Café"), "café");
        assert_eq!(stemmer.stem("naïveties"), "naïvety");
    }

    #[test]
    fn test_as_normalizer() {
        let normalizer: &dyn Normalizer = &BasicStemmer;
        assert_eq!(normalizer.normalize("Networks"), "network");
    }
}
