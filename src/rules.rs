use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Word that replaces a boolean marker not followed by a boolean prefix
/// (`bVisible` → `is_visible`).
const BOOLEAN_DEFAULT_PREFIX: &str = "is";

// ─── Rule Set ──────────────────────────────────────────────────────────────

/// Lookup tables applied to the lower-cased words of a name before they are
/// joined into snake_case. Every field falls back to its default when omitted
/// from a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    /// One-letter Hungarian markers dropped from the front of a name
    pub dropped_prefixes: Vec<String>,
    /// Marker for boolean names; empty disables the rule
    pub boolean_marker: String,
    /// Words that already read as a boolean after the marker is dropped
    pub boolean_prefixes: Vec<String>,
    /// Expansions applied to the first word only
    pub leading_words: BTreeMap<String, String>,
    /// Expansions applied to the last word only
    pub trailing_words: BTreeMap<String, String>,
    /// Whole-word expansions applied anywhere in the name
    pub abbreviations: BTreeMap<String, String>,
    /// Single-letter head marking named constants (`kDefaultOption`)
    pub constant_prefix: char,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            dropped_prefixes: strings(&["p", "m", "n", "f"]),
            boolean_marker: "b".into(),
            boolean_prefixes: strings(&[
                "is", "are", "was", "were", "has", "have", "had", "does", "do", "did", "done",
                "find", "found", "get", "got",
            ]),
            leading_words: pairs(&[("it", "iter")]),
            trailing_words: pairs(&[("num", "number")]),
            // Not expanded on purpose: obj, num, it, iter, var, src, dest, std,
            // ret, init, ptr, op.
            abbreviations: pairs(&[
                ("res", "result"),
                ("buf", "buffer"),
                ("vec", "vector"),
                ("msg", "message"),
                ("seq", "sequence"),
                ("cnt", "count"),
                ("mem", "memory"),
                ("val", "value"),
                ("loc", "location"),
                ("ans", "answer"),
                ("ctx", "context"),
                ("elem", "element"),
                ("ty", "type"),
            ]),
            constant_prefix: 'k',
        }
    }
}

impl RuleSet {
    /// Rewrite the lower-cased words of a name in place.
    pub fn apply(&self, words: &mut Vec<String>) {
        if words.len() > 1
            && starts_with_letter(&words[1])
            && self.dropped_prefixes.contains(&words[0])
        {
            words.remove(0);
        }

        if words.len() > 1
            && !self.boolean_marker.is_empty()
            && words[0] == self.boolean_marker
            && starts_with_letter(&words[1])
        {
            if self.boolean_prefixes.contains(&words[1]) {
                words.remove(0);
            } else {
                words[0] = BOOLEAN_DEFAULT_PREFIX.into();
            }
        }

        if let Some(first) = words.first_mut() {
            if let Some(expanded) = self.leading_words.get(first.as_str()) {
                *first = expanded.clone();
            }
        }
        if let Some(last) = words.last_mut() {
            if let Some(expanded) = self.trailing_words.get(last.as_str()) {
                *last = expanded.clone();
            }
        }

        for word in words.iter_mut() {
            if let Some(expanded) = self.abbreviations.get(word.as_str()) {
                *word = expanded.clone();
            }
        }
    }

    /// Reject tables that would produce names the converter cannot read back
    /// as snake_case.
    pub fn validate(&self) -> Result<()> {
        if !self.constant_prefix.is_ascii_lowercase() {
            bail!(
                "constant_prefix must be a lowercase ASCII letter, got '{}'",
                self.constant_prefix
            );
        }
        if !self.boolean_marker.is_empty() && !is_word(&self.boolean_marker) {
            bail!(
                "boolean_marker must be lowercase letters, got '{}'",
                self.boolean_marker
            );
        }

        for (table, words) in [
            ("dropped_prefixes", &self.dropped_prefixes),
            ("boolean_prefixes", &self.boolean_prefixes),
        ] {
            if let Some(bad) = words.iter().find(|w| !is_word(w)) {
                bail!("{table} entries must be lowercase letters, got '{bad}'");
            }
        }

        for (table, map) in [
            ("leading_words", &self.leading_words),
            ("trailing_words", &self.trailing_words),
            ("abbreviations", &self.abbreviations),
        ] {
            for (from, to) in map {
                if !is_word(from) {
                    bail!("{table} keys must be lowercase letters, got '{from}'");
                }
                if !to.split('_').all(is_word) {
                    bail!(
                        "{table} expansion of '{from}' must be lowercase words joined by '_', got '{to}'"
                    );
                }
            }
        }
        Ok(())
    }
}

fn is_word(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_lowercase())
}

fn starts_with_letter(word: &str) -> bool {
    word.starts_with(|c: char| c.is_ascii_alphabetic())
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn pairs(items: &[(&str, &str)]) -> BTreeMap<String, String> {
    items
        .iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect()
}
