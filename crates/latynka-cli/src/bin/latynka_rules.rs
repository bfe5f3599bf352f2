// latynka-rules: validate and normalize a rule file.
//
// Parses the given rule file and prints the normalized form (one rule per
// line, alternatives comma-joined) to stdout, or writes it back to a file.
// A malformed file exits with an error naming the offending line, so the
// tool doubles as a validator.
//
// Usage:
//   latynka-rules RULES [-o OUT]

use std::path::Path;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (out_path, args) = latynka_cli::parse_opt(&args, "--out", "-o");

    if latynka_cli::wants_help(&args) || args.is_empty() {
        println!("latynka-rules: validate and normalize a rule file.");
        println!();
        println!("Usage: latynka-rules RULES [-o OUT]");
        println!();
        println!("Options:");
        println!("  -o, --out PATH   Write the normalized rules to PATH");
        println!("  -h, --help       Print this help");
        return;
    }

    let rules_path = &args[0];
    let table = latynka_cli::load_rules(Path::new(rules_path))
        .unwrap_or_else(|e| latynka_cli::fatal(&e.to_string()));

    eprintln!("{}: {} rules", rules_path, table.len());

    match out_path {
        Some(out) => {
            latynka_cli::save_rules(Path::new(&out), &table)
                .unwrap_or_else(|e| latynka_cli::fatal(&e.to_string()));
        }
        None => {
            print!("{}", latynka_cli::serialize_rules(&table));
        }
    }
}
