// latynka-core: shared data model for the transliteration engine.
//
// This crate holds the types exchanged between rule/corpus suppliers, the
// rewrite engine, and result consumers: the rule table, output chunks, the
// corpus membership oracle, and character classification. It performs no
// I/O; file formats and loaders live with the callers (latynka-cli).

pub mod character;
pub mod chunk;
pub mod corpus;
pub mod rules;

pub use chunk::Chunk;
pub use corpus::Corpus;
pub use rules::{Rule, RuleError, RuleTable, RuleTarget};
