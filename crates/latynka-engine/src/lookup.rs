// Longest-match rule lookup shared by both rewriters.

use latynka_core::rules::{RuleTable, RuleTarget};

/// A view of a rule table ordered for longest-match scanning.
///
/// Entries are sorted by descending key length with a stable sort, so keys
/// of equal length keep the table's insertion order. That tie order is a
/// committed behavior, not an accident of the backing map.
///
/// Built once per rewrite call (O(R log R)) and reused for every position
/// and for the nested word rewrites of disambiguation.
pub(crate) struct SortedRules<'a> {
    entries: Vec<Entry<'a>>,
}

struct Entry<'a> {
    key: Vec<char>,
    target: &'a RuleTarget,
}

impl<'a> SortedRules<'a> {
    pub(crate) fn new(table: &'a RuleTable) -> Self {
        let mut entries: Vec<Entry<'a>> = table
            .iter()
            .map(|rule| Entry {
                key: rule.key().chars().collect(),
                target: rule.target(),
            })
            .collect();
        entries.sort_by(|a, b| b.key.len().cmp(&a.key.len()));
        Self { entries }
    }

    /// Find the rule matching `text` at `pos`. Returns the matched key
    /// length in characters and the rule's target, or `None` when no key
    /// matches. The longest matching key wins.
    pub(crate) fn match_at(&self, text: &[char], pos: usize) -> Option<(usize, &'a RuleTarget)> {
        let rest = &text[pos..];
        for entry in &self.entries {
            if rest.len() >= entry.key.len() && rest[..entry.key.len()] == entry.key[..] {
                return Some((entry.key.len(), entry.target));
            }
        }
        None
    }

    /// Rewrite `text` in full, concatenating only the emitted texts and
    /// taking the default candidate for every multi-target match. This is
    /// the word-level re-evaluation used by corpus disambiguation.
    pub(crate) fn rewrite_text(&self, text: &[char]) -> String {
        let mut out = String::new();
        let mut i = 0;
        while i < text.len() {
            match self.match_at(text, i) {
                Some((key_len, target)) => {
                    out.push_str(target.default_text());
                    i += key_len;
                }
                None => {
                    out.push(text[i]);
                    i += 1;
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn longer_keys_sort_first() {
        let table = RuleTable::from_pairs([
            ("a", RuleTarget::single("1")),
            ("abc", RuleTarget::single("2")),
            ("ab", RuleTarget::single("3")),
        ])
        .unwrap();
        let sorted = SortedRules::new(&table);
        let lens: Vec<usize> = sorted.entries.iter().map(|e| e.key.len()).collect();
        assert_eq!(lens, [3, 2, 1]);
    }

    #[test]
    fn equal_length_keys_keep_insertion_order() {
        let table = RuleTable::from_pairs([
            ("zz", RuleTarget::single("1")),
            ("aa", RuleTarget::single("2")),
            ("mm", RuleTarget::single("3")),
        ])
        .unwrap();
        let sorted = SortedRules::new(&table);
        let keys: Vec<String> = sorted
            .entries
            .iter()
            .map(|e| e.key.iter().collect())
            .collect();
        assert_eq!(keys, ["zz", "aa", "mm"]);
    }

    #[test]
    fn match_at_prefers_longest() {
        let table = RuleTable::from_pairs([
            ("a", RuleTarget::single("1")),
            ("ab", RuleTarget::single("2")),
        ])
        .unwrap();
        let sorted = SortedRules::new(&table);
        let text = chars("abc");
        let (len, target) = sorted.match_at(&text, 0).unwrap();
        assert_eq!(len, 2);
        assert_eq!(target.default_text(), "2");
    }

    #[test]
    fn match_at_respects_position() {
        let table = RuleTable::from_pairs([("b", RuleTarget::single("x"))]).unwrap();
        let sorted = SortedRules::new(&table);
        let text = chars("ab");
        assert!(sorted.match_at(&text, 0).is_none());
        assert!(sorted.match_at(&text, 1).is_some());
    }

    #[test]
    fn match_at_near_end_of_text() {
        // A key longer than the remaining text must not match.
        let table = RuleTable::from_pairs([("abc", RuleTarget::single("x"))]).unwrap();
        let sorted = SortedRules::new(&table);
        let text = chars("ab");
        assert!(sorted.match_at(&text, 0).is_none());
    }

    #[test]
    fn rewrite_text_takes_defaults() {
        let table = RuleTable::from_pairs([
            (
                "\u{043D}",
                RuleTarget::alternatives(vec!["n".into(), "\u{014B}".into()]).unwrap(),
            ),
            ("\u{043E}", RuleTarget::single("o")),
        ])
        .unwrap();
        let sorted = SortedRules::new(&table);
        assert_eq!(sorted.rewrite_text(&chars("\u{043D}\u{043E}")), "no");
    }

    #[test]
    fn rewrite_text_passes_unmatched_through() {
        let table = RuleTable::new();
        let sorted = SortedRules::new(&table);
        assert_eq!(sorted.rewrite_text(&chars("x y")), "x y");
    }
}
