// Rule file format: parsing and serialization.
//
// One rule per line, `key=target` or `key=alt1,alt2,...`. Lines starting
// with `#` are comments; blank lines are ignored. The first `=` splits key
// from target, so targets may contain `=`. A comma anywhere in the target
// makes it an alternatives list with the first entry as the default.
//
// Example:
//   # Cyrillic to Latin
//   ая=aja
//   п=p
//   а=a
//   н=n,ŋ

use latynka_core::rules::{RuleError, RuleTable, RuleTarget};

/// Errors raised while parsing a rule file.
#[derive(Debug, thiserror::Error)]
pub enum RuleFormatError {
    /// A non-blank, non-comment line had no `=` separator.
    #[error("line {line}: missing '=' separator")]
    MissingSeparator { line: usize },

    /// The table rejected the rule (empty key, duplicate key).
    #[error("line {line}: {source}")]
    Rule {
        line: usize,
        #[source]
        source: RuleError,
    },
}

/// Parse rule-file text into a table, preserving line order.
pub fn parse_rules(input: &str) -> Result<RuleTable, RuleFormatError> {
    let mut table = RuleTable::new();
    for (idx, raw) in input.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let Some((key, value)) = trimmed.split_once('=') else {
            return Err(RuleFormatError::MissingSeparator { line });
        };
        let target = if value.contains(',') {
            let candidates = value.split(',').map(str::to_string).collect();
            RuleTarget::alternatives(candidates)
                .map_err(|source| RuleFormatError::Rule { line, source })?
        } else {
            RuleTarget::single(value)
        };
        table
            .insert(key, target)
            .map_err(|source| RuleFormatError::Rule { line, source })?;
    }
    Ok(table)
}

/// Serialize a table back into rule-file text, one rule per line in table
/// order. Alternatives are comma-joined, so the output round-trips through
/// [`parse_rules`].
pub fn serialize_rules(table: &RuleTable) -> String {
    let mut out = String::new();
    for rule in table.iter() {
        out.push_str(rule.key());
        out.push('=');
        match rule.target().candidates() {
            Some(candidates) => out.push_str(&candidates.join(",")),
            None => out.push_str(rule.target().default_text()),
        }
        out.push('\n');
    }
    out
}
