// Minimal rewrite walkthrough.
//
// Run:
//   cargo run -p latynka-engine --example rewrite_demo

use latynka_core::chunk::Chunk;
use latynka_core::corpus::Corpus;
use latynka_core::rules::{RuleTable, RuleTarget};

fn main() {
    let table = RuleTable::from_pairs([
        ("\u{043D}", RuleTarget::alternatives(vec!["n".into(), "\u{014B}".into()]).unwrap()),
        ("\u{043E}", RuleTarget::single("o")),
        ("\u{0434}", RuleTarget::single("d")),
    ])
    .expect("valid rule table");

    let text = "\u{043D}\u{043E}\u{0434}";

    let plain = latynka_engine::rewrite(text, &table);
    println!("plain:    {} ({} chunks)", Chunk::join(&plain), plain.len());
    for chunk in &plain {
        println!("  {:?} ambiguous={}", chunk.text, chunk.ambiguous);
    }

    let corpus: Corpus = ["\u{014B}od"].into_iter().collect();
    let resolved = latynka_engine::rewrite_with_corpus(text, &table, &corpus);
    println!("resolved: {}", Chunk::join(&resolved));
    for chunk in &resolved {
        println!("  {:?} ambiguous={}", chunk.text, chunk.ambiguous);
    }
}
