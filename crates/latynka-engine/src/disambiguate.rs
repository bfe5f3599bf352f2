// Corpus-disambiguating rewriter.
//
// Same longest-match scan as the plain rewriter, but a multi-target match
// is resolved against the corpus before falling back to the default
// candidate: the enclosing alphabetic word is rewritten under each
// candidate in priority order, and the first candidate whose rewritten
// word is attested wins.

use latynka_core::character::is_word_char;
use latynka_core::chunk::Chunk;
use latynka_core::corpus::Corpus;
use latynka_core::rules::RuleTable;

use crate::lookup::SortedRules;

/// Rewrite `text` by longest-match against `rules`, resolving ambiguous
/// matches through `corpus`.
///
/// Single-target matches and unmatched characters behave exactly as in
/// [`crate::rewrite`]. For a multi-target match the candidates are tried
/// in list order; the first one whose whole-word rewrite is in the corpus
/// is emitted unflagged. When no candidate's rewrite is attested (always
/// the case for an empty corpus) the default candidate is emitted flagged
/// ambiguous, so the emitted text matches the plain rewriter's choice.
///
/// Callers that have no corpus should call [`crate::rewrite`] instead.
pub fn rewrite_with_corpus(text: &str, rules: &RuleTable, corpus: &Corpus) -> Vec<Chunk> {
    let chars: Vec<char> = text.chars().collect();
    let sorted = SortedRules::new(rules);

    let mut chunks = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let Some((key_len, target)) = sorted.match_at(&chars, i) else {
            chunks.push(Chunk::resolved(chars[i].to_string()));
            i += 1;
            continue;
        };
        let end = i + key_len;
        match target.candidates() {
            None => chunks.push(Chunk::resolved(target.default_text())),
            Some(candidates) => {
                chunks.push(resolve(&chars, i, end, candidates, &sorted, corpus));
            }
        }
        i = end;
    }
    chunks
}

/// Resolve one ambiguous match at `text[start..end]`.
///
/// The word span is the maximal run of alphabetic characters around the
/// match; spaces, punctuation, and digits terminate it, and a match at the
/// very start or end of the text yields a correspondingly short span. Each
/// candidate is spliced into the span at the match's position and the
/// spliced word is rewritten in full (default candidates, text only). An
/// empty candidate string is accepted like any other if its rewrite is
/// attested.
fn resolve(
    text: &[char],
    start: usize,
    end: usize,
    candidates: &[String],
    rules: &SortedRules<'_>,
    corpus: &Corpus,
) -> Chunk {
    let mut word_start = start;
    while word_start > 0 && is_word_char(text[word_start - 1]) {
        word_start -= 1;
    }
    let mut word_end = end;
    while word_end < text.len() && is_word_char(text[word_end]) {
        word_end += 1;
    }

    for candidate in candidates {
        let mut replaced: Vec<char> =
            Vec::with_capacity(word_end - word_start + candidate.len());
        replaced.extend(&text[word_start..start]);
        replaced.extend(candidate.chars());
        replaced.extend(&text[end..word_end]);

        if corpus.contains(&rules.rewrite_text(&replaced)) {
            return Chunk::resolved(candidate.clone());
        }
    }
    Chunk::ambiguous(candidates[0].clone())
}
