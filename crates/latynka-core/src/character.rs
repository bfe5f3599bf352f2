// Character classification for word spans and corpus words.

/// Check whether a character belongs to a word span.
///
/// Word spans are the maximal alphabetic runs the disambiguator expands an
/// ambiguous match into. Digits, punctuation, and whitespace all terminate
/// a span.
pub fn is_word_char(c: char) -> bool {
    c.is_alphabetic()
}

/// Check whether a character belongs to a corpus word.
///
/// Corpus extraction is slightly wider than word spans: attested word lists
/// commonly carry digits and underscores inside entries, so those are kept
/// when splitting raw corpus text into words.
pub fn is_corpus_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
