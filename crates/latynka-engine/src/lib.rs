// latynka-engine: rule-driven rewriting with corpus disambiguation.
//
// Two entry points, both pure and total over their inputs:
//
// - `rewrite` performs greedy longest-match tokenization of the input
//   against the rule table and emits the default target for each match,
//   flagging multi-target matches as ambiguous.
// - `rewrite_with_corpus` wraps the same scan; for multi-target matches it
//   expands the enclosing alphabetic word under each candidate, rewrites
//   that whole word, and accepts the first candidate whose rewritten word
//   is attested in the corpus.
//
// The engine holds no state between calls and never mutates its inputs, so
// concurrent calls over shared tables and corpora are safe under ordinary
// read-sharing.

mod disambiguate;
mod lookup;
mod rewriter;

pub use disambiguate::rewrite_with_corpus;
pub use rewriter::rewrite;
