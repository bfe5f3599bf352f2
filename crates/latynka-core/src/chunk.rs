// Output chunk: one unit of rewritten text plus its ambiguity flag.

/// One unit of rewriter output.
///
/// A rewrite call yields an ordered sequence of chunks whose texts
/// concatenate to the complete rewrite. The `ambiguous` flag is a
/// "needs resolution" signal: it is set only when a multi-target rule
/// matched and no resolver settled the choice, so consumers can highlight
/// the span. Literal passthrough characters, single-target matches, and
/// corpus-resolved choices are never flagged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// The emitted target text. May be empty for deletion rules.
    pub text: String,

    /// Whether the choice of target was left unresolved.
    pub ambiguous: bool,
}

impl Chunk {
    /// Create a chunk whose target choice was certain.
    pub fn resolved(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ambiguous: false,
        }
    }

    /// Create a chunk whose target choice was left unresolved.
    pub fn ambiguous(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ambiguous: true,
        }
    }

    /// Concatenate the texts of a chunk sequence into the plain rewrite.
    pub fn join(chunks: &[Chunk]) -> String {
        chunks.iter().map(|c| c.text.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_chunk() {
        let c = Chunk::resolved("pa");
        assert_eq!(c.text, "pa");
        assert!(!c.ambiguous);
    }

    #[test]
    fn ambiguous_chunk() {
        let c = Chunk::ambiguous("n");
        assert_eq!(c.text, "n");
        assert!(c.ambiguous);
    }

    #[test]
    fn empty_text_is_allowed() {
        let c = Chunk::resolved("");
        assert!(c.text.is_empty());
    }

    #[test]
    fn join_concatenates_in_order() {
        let chunks = vec![
            Chunk::resolved("p"),
            Chunk::ambiguous("a"),
            Chunk::resolved("rk"),
        ];
        assert_eq!(Chunk::join(&chunks), "park");
    }

    #[test]
    fn join_empty_sequence() {
        assert_eq!(Chunk::join(&[]), "");
    }
}
