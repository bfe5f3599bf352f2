// Plain rule-based rewriter: longest match, default candidate.

use latynka_core::chunk::Chunk;
use latynka_core::rules::RuleTable;

/// Rewrite `text` by greedy longest-match against `rules`.
///
/// The input is scanned left to right. At each position the longest
/// matching rule key wins; ties between equal-length keys follow the
/// table's insertion order. A single-target match emits its target, a
/// multi-target match emits the first (default) candidate flagged
/// ambiguous, and an unmatched character passes through literally,
/// unflagged. Every input character is consumed exactly once, so the chunk
/// texts concatenate to a complete rewrite.
///
/// Total and deterministic for any input string and any well-formed table
/// (an empty table passes the whole input through).
pub fn rewrite(text: &str, rules: &RuleTable) -> Vec<Chunk> {
    let chars: Vec<char> = text.chars().collect();
    let sorted = crate::lookup::SortedRules::new(rules);

    let mut chunks = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        match sorted.match_at(&chars, i) {
            Some((key_len, target)) => {
                let chunk = if target.is_ambiguous() {
                    Chunk::ambiguous(target.default_text())
                } else {
                    Chunk::resolved(target.default_text())
                };
                chunks.push(chunk);
                i += key_len;
            }
            None => {
                chunks.push(Chunk::resolved(chars[i].to_string()));
                i += 1;
            }
        }
    }
    chunks
}
