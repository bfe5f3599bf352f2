// latynka-cli: file loaders and shared utilities for the CLI tools.
//
// The engine itself has no file surface; this crate is the file-loading
// and command-line side of its pure interfaces. Loaders surface their
// failures before the engine is ever invoked.

use std::path::Path;
use std::process;

use latynka_core::corpus::Corpus;
use latynka_core::rules::RuleTable;

pub mod format;

pub use format::{RuleFormatError, parse_rules, serialize_rules};

/// Errors raised while loading or saving rule and corpus files.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The rule file was read but did not parse.
    #[error("{path}: {source}")]
    Format {
        path: String,
        #[source]
        source: RuleFormatError,
    },
}

/// Load a rule table from a rule file.
pub fn load_rules(path: &Path) -> Result<RuleTable, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_rules(&text).map_err(|source| LoadError::Format {
        path: path.display().to_string(),
        source,
    })
}

/// Save a rule table to a rule file in the normalized format.
pub fn save_rules(path: &Path, table: &RuleTable) -> Result<(), LoadError> {
    std::fs::write(path, serialize_rules(table)).map_err(|source| LoadError::Write {
        path: path.display().to_string(),
        source,
    })
}

/// Load a corpus from a text file: the whole file is lowercased and split
/// into words.
pub fn load_corpus(path: &Path) -> Result<Corpus, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.display().to_string(),
        source,
    })?;
    Ok(Corpus::from_text(&text))
}

/// Parse a `--name=VALUE`, `--name VALUE`, or `-n VALUE` option from the
/// command line. Returns `(value, remaining_args)`.
pub fn parse_opt(args: &[String], long: &str, short: &str) -> (Option<String>, Vec<String>) {
    let prefix = format!("{long}=");
    let mut value = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(v) = arg.strip_prefix(&prefix) {
            value = Some(v.to_string());
        } else if arg == long || arg == short {
            if i + 1 < args.len() {
                value = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {arg} requires a value");
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
