// Rule table: source-key to target-text(s) mapping driving the rewrite.
//
// Design notes:
// - A target is a tagged variant (Single / Alternatives) rather than a
//   string-or-list runtime check, so the default-candidate contract and the
//   non-empty-list invariant are enforced at construction time.
// - The table keeps rules in a Vec in insertion order and maintains a
//   hashbrown key index for uniqueness. Insertion order is a committed
//   behavior: the engine's longest-match view sorts by descending key
//   length with a stable sort, so equal-length keys keep the order they
//   were inserted in.

use hashbrown::HashMap;

/// Errors raised while constructing rules or rule tables.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// Rule keys must contain at least one character.
    #[error("rule key must not be empty")]
    EmptyKey,

    /// Keys are unique within a table.
    #[error("duplicate rule key: {0:?}")]
    DuplicateKey(String),

    /// An alternatives target must offer at least one candidate.
    #[error("alternatives target must not be empty")]
    EmptyAlternatives,
}

/// Target side of a rule: one fixed rewrite, or an ordered list of
/// candidate rewrites where the first entry is the default.
///
/// The variants are non-exhaustive so targets can only be built through
/// [`RuleTarget::single`] and [`RuleTarget::alternatives`]; an empty
/// candidate list cannot be constructed outside this module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleTarget {
    /// Exactly one rewrite; matches are never ambiguous.
    #[non_exhaustive]
    Single(String),

    /// Two or more valid rewrites (a one-element list is also accepted and
    /// still treated as ambiguous). List order is priority order; the first
    /// candidate is the default/fallback. Never empty.
    #[non_exhaustive]
    Alternatives(Vec<String>),
}

impl RuleTarget {
    /// Create a single-rewrite target.
    pub fn single(text: impl Into<String>) -> Self {
        Self::Single(text.into())
    }

    /// Create an alternatives target. Fails on an empty candidate list.
    pub fn alternatives(candidates: Vec<String>) -> Result<Self, RuleError> {
        if candidates.is_empty() {
            return Err(RuleError::EmptyAlternatives);
        }
        Ok(Self::Alternatives(candidates))
    }

    /// The text emitted when no resolver settles the choice: the single
    /// rewrite, or the first (default) candidate.
    pub fn default_text(&self) -> &str {
        match self {
            Self::Single(text) => text,
            Self::Alternatives(candidates) => &candidates[0],
        }
    }

    /// Whether a match against this target needs resolution.
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Self::Alternatives(_))
    }

    /// The candidate list for ambiguous targets, `None` for single targets.
    pub fn candidates(&self) -> Option<&[String]> {
        match self {
            Self::Single(_) => None,
            Self::Alternatives(candidates) => Some(candidates),
        }
    }
}

/// A single rule: non-empty source key plus its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    key: String,
    target: RuleTarget,
}

impl Rule {
    /// The source key this rule matches.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The target this rule rewrites to.
    pub fn target(&self) -> &RuleTarget {
        &self.target
    }
}

/// An insertion-ordered table of unique, non-empty rule keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleTable {
    rules: Vec<Rule>,
    index: HashMap<String, usize>,
}

impl RuleTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule. Fails on an empty key or a key already in the table.
    pub fn insert(&mut self, key: impl Into<String>, target: RuleTarget) -> Result<(), RuleError> {
        let key = key.into();
        if key.is_empty() {
            return Err(RuleError::EmptyKey);
        }
        if self.index.contains_key(&key) {
            return Err(RuleError::DuplicateKey(key));
        }
        self.index.insert(key.clone(), self.rules.len());
        self.rules.push(Rule { key, target });
        Ok(())
    }

    /// Build a table from `(key, target)` pairs, preserving pair order.
    pub fn from_pairs<K, I>(pairs: I) -> Result<Self, RuleError>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, RuleTarget)>,
    {
        let mut table = Self::new();
        for (key, target) in pairs {
            table.insert(key, target)?;
        }
        Ok(table)
    }

    /// Look up a rule target by exact key.
    pub fn get(&self, key: &str) -> Option<&RuleTarget> {
        self.index.get(key).map(|&i| &self.rules[i].target)
    }

    /// Iterate rules in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Number of rules in the table.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- RuleTarget --

    #[test]
    fn single_target() {
        let t = RuleTarget::single("a");
        assert!(!t.is_ambiguous());
        assert_eq!(t.default_text(), "a");
        assert_eq!(t.candidates(), None);
    }

    #[test]
    fn alternatives_target() {
        let t = RuleTarget::alternatives(vec!["n".into(), "\u{014B}".into()]).unwrap();
        assert!(t.is_ambiguous());
        assert_eq!(t.default_text(), "n");
        assert_eq!(
            t.candidates(),
            Some(&["n".to_string(), "\u{014B}".to_string()][..])
        );
    }

    #[test]
    fn one_element_alternatives_is_still_ambiguous() {
        let t = RuleTarget::alternatives(vec!["n".into()]).unwrap();
        assert!(t.is_ambiguous());
        assert_eq!(t.default_text(), "n");
    }

    #[test]
    fn empty_alternatives_rejected() {
        assert_eq!(
            RuleTarget::alternatives(vec![]),
            Err(RuleError::EmptyAlternatives)
        );
    }

    #[test]
    fn empty_target_text_is_allowed() {
        // Deletion rule: maps a key to nothing.
        let t = RuleTarget::single("");
        assert_eq!(t.default_text(), "");
    }

    // -- RuleTable --

    #[test]
    fn insert_and_get() {
        let mut table = RuleTable::new();
        table.insert("\u{043F}", RuleTarget::single("p")).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(
            table.get("\u{043F}"),
            Some(&RuleTarget::single("p"))
        );
        assert_eq!(table.get("x"), None);
    }

    #[test]
    fn empty_key_rejected() {
        let mut table = RuleTable::new();
        assert_eq!(
            table.insert("", RuleTarget::single("p")),
            Err(RuleError::EmptyKey)
        );
        assert!(table.is_empty());
    }

    #[test]
    fn duplicate_key_rejected() {
        let mut table = RuleTable::new();
        table.insert("\u{0430}", RuleTarget::single("a")).unwrap();
        assert_eq!(
            table.insert("\u{0430}", RuleTarget::single("ya")),
            Err(RuleError::DuplicateKey("\u{0430}".into()))
        );
        // The first rule survives.
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("\u{0430}"), Some(&RuleTarget::single("a")));
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let table = RuleTable::from_pairs([
            ("c", RuleTarget::single("1")),
            ("a", RuleTarget::single("2")),
            ("b", RuleTarget::single("3")),
        ])
        .unwrap();
        let keys: Vec<&str> = table.iter().map(Rule::key).collect();
        assert_eq!(keys, ["c", "a", "b"]);
    }

    #[test]
    fn from_pairs_propagates_errors() {
        let result = RuleTable::from_pairs([
            ("a", RuleTarget::single("1")),
            ("a", RuleTarget::single("2")),
        ]);
        assert_eq!(result, Err(RuleError::DuplicateKey("a".into())));
    }

    #[test]
    fn multichar_keys() {
        let mut table = RuleTable::new();
        table
            .insert("\u{0430}\u{044F}", RuleTarget::single("aja"))
            .unwrap();
        assert_eq!(
            table.get("\u{0430}\u{044F}"),
            Some(&RuleTarget::single("aja"))
        );
    }
}
