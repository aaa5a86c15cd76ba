#![allow(dead_code)]
//! Word oracle backing move validation and the automated player's search
//!
//! Embeds a wordlist at build time (one word per line) and exposes O(1)
//! case-insensitive lookup plus the full word list in a stable order,
//! which the move search relies on for deterministic tie-breaking.
//! Alternative word sets can be injected, so tests control the oracle.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Embedded wordlist: lowercase, alphabetic only, one per line.
static WORDS_DATA: &str = include_str!("../../data/words.txt");

/// Embedded words, uppercased, in file order.
static EMBEDDED_WORDS: Lazy<Vec<String>> = Lazy::new(|| {
    WORDS_DATA
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_uppercase)
        .collect()
});

/// A fixed set of legal words. Lookup is case-insensitive; iteration
/// order is the order words were supplied in.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<String>,
    index: HashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from any word list. Words are uppercased;
    /// empties and duplicates are dropped, first occurrence wins.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ordered = Vec::new();
        let mut index = HashSet::new();
        for word in words {
            let word = word.as_ref().trim().to_uppercase();
            if !word.is_empty() && index.insert(word.clone()) {
                ordered.push(word);
            }
        }
        Self {
            words: ordered,
            index,
        }
    }

    /// The dictionary built from the embedded wordlist.
    pub fn embedded() -> Self {
        Self::from_words(EMBEDDED_WORDS.iter())
    }

    /// Check whether a word is legal. Case-insensitive.
    pub fn is_valid_word(&self, word: &str) -> bool {
        let word = word.trim().to_uppercase();
        !word.is_empty() && self.index.contains(&word)
    }

    /// Every legal word, uppercased, in insertion order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words in the dictionary.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let dict = Dictionary::from_words(["cat", "DOG"]);
        assert!(dict.is_valid_word("CAT"));
        assert!(dict.is_valid_word("cat"));
        assert!(dict.is_valid_word("Dog"));
        assert!(!dict.is_valid_word("bird"));
    }

    #[test]
    fn test_blank_and_whitespace_words_rejected() {
        let dict = Dictionary::from_words(["cat"]);
        assert!(!dict.is_valid_word(""));
        assert!(!dict.is_valid_word("   "));
        assert!(dict.is_valid_word(" cat "));
    }

    #[test]
    fn test_word_order_is_preserved_and_deduped() {
        let dict = Dictionary::from_words(["zoo", "cat", "ZOO", "ant"]);
        assert_eq!(dict.words(), ["ZOO", "CAT", "ANT"]);
        assert_eq!(dict.len(), 3);
    }

    #[test]
    fn test_embedded_wordlist_loads() {
        let dict = Dictionary::embedded();
        assert!(!dict.is_empty());
        assert!(dict.is_valid_word("cat"));
        assert!(dict.is_valid_word("dog"));
    }
}
