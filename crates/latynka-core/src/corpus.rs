// Corpus: the membership oracle used to resolve ambiguous rewrites.

use hashbrown::HashSet;

use crate::character::is_corpus_word_char;

/// A set of lowercase attested words.
///
/// The engine uses this purely as a membership oracle: a candidate rewrite
/// of a whole word is accepted when it is in the corpus. Entries are stored
/// as supplied; no normalization happens at lookup time, so suppliers must
/// make sure case and Unicode form already match what the rewriter
/// produces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    words: HashSet<String>,
}

impl Corpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a corpus from raw text: the text is lowercased and split into
    /// runs of word characters, one corpus entry per run.
    pub fn from_text(text: &str) -> Self {
        let mut corpus = Self::new();
        let lowered = text.to_lowercase();
        let mut word = String::new();
        for c in lowered.chars() {
            if is_corpus_word_char(c) {
                word.push(c);
            } else if !word.is_empty() {
                corpus.words.insert(std::mem::take(&mut word));
            }
        }
        if !word.is_empty() {
            corpus.words.insert(word);
        }
        corpus
    }

    /// Add one word as-is.
    pub fn insert(&mut self, word: impl Into<String>) {
        self.words.insert(word.into());
    }

    /// Membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the corpus holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Corpus {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}
