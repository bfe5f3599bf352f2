// latynka-rewrite: transliterate text from stdin.
//
// Reads the whole of stdin, rewrites it with the given rule table, and
// prints the result. When a corpus file is supplied, ambiguous rules are
// resolved against it; unresolved spots can be marked in the output.
//
// Usage:
//   latynka-rewrite -r RULES [-c CORPUS] [--mark]
//
// Options:
//   -r, --rules PATH    Rule file (key=target, key=alt1,alt2)
//   -c, --corpus PATH   Corpus text file for disambiguation
//   --mark              Wrap unresolved chunks in [brackets]
//   -h, --help          Print help

use std::io::Read;
use std::path::Path;

use latynka_core::chunk::Chunk;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (rules_path, args) = latynka_cli::parse_opt(&args, "--rules", "-r");
    let (corpus_path, args) = latynka_cli::parse_opt(&args, "--corpus", "-c");

    if latynka_cli::wants_help(&args) {
        println!("latynka-rewrite: transliterate text from stdin.");
        println!();
        println!("Usage: latynka-rewrite -r RULES [-c CORPUS] [--mark]");
        println!();
        println!("Options:");
        println!("  -r, --rules PATH    Rule file (key=target, key=alt1,alt2)");
        println!("  -c, --corpus PATH   Corpus text file for disambiguation");
        println!("  --mark              Wrap unresolved chunks in [brackets]");
        println!("  -h, --help          Print this help");
        return;
    }

    let mark = args.iter().any(|a| a == "--mark");

    let Some(rules_path) = rules_path else {
        latynka_cli::fatal("a rule file is required (-r RULES)");
    };
    let rules = latynka_cli::load_rules(Path::new(&rules_path))
        .unwrap_or_else(|e| latynka_cli::fatal(&e.to_string()));

    let corpus = corpus_path.map(|p| {
        latynka_cli::load_corpus(Path::new(&p))
            .unwrap_or_else(|e| latynka_cli::fatal(&e.to_string()))
    });

    let mut text = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut text) {
        latynka_cli::fatal(&format!("failed to read stdin: {e}"));
    }

    let chunks = match &corpus {
        Some(corpus) => latynka_engine::rewrite_with_corpus(&text, &rules, corpus),
        None => latynka_engine::rewrite(&text, &rules),
    };

    let output = render(&chunks, mark);
    print!("{output}");
}

/// Concatenate chunk texts, optionally bracketing the unresolved ones.
fn render(chunks: &[Chunk], mark: bool) -> String {
    if !mark {
        return Chunk::join(chunks);
    }
    let mut out = String::new();
    for chunk in chunks {
        if chunk.ambiguous {
            out.push('[');
            out.push_str(&chunk.text);
            out.push(']');
        } else {
            out.push_str(&chunk.text);
        }
    }
    out
}
