//! `{a|b|c}` variation blocks and the phrases a prompt rewrite must not lose.
//!
//! A compiled prompt may carry variation blocks produced by variation nodes. Before a batch
//! is sent, each block is resolved to one alternative per batch item. Rewriting passes
//! (prompt enhancement) are expected to leave the blocks and any reference-image phrases
//! intact; [`restore_protected_phrases`] puts them back when they do not.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// Any brace pair, even empty or single-option.
static BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{([^{}]*)\}").unwrap());

// Brace pairs holding at least two alternatives.
static ALTERNATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{[^{}|]*\|[^{}]*\}").unwrap());

static REFERENCE_IMAGES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)with \d+ reference images?").unwrap());

/// Expands `prompt` into `count` prompts.
///
/// Every block cycles through its alternatives independently, all in lockstep on the
/// batch index: item `i` takes alternative `i % n` of each block. Blocks with no
/// non-blank alternative are removed. A prompt without blocks is repeated as is.
pub fn expand_variations(prompt: &str, count: usize) -> Vec<String> {
    if !BLOCK.is_match(prompt) {
        return vec![prompt.to_string(); count];
    }

    (0..count)
        .map(|i| {
            BLOCK
                .replace_all(prompt, |caps: &Captures<'_>| {
                    let options: Vec<&str> = caps[1]
                        .split('|')
                        .map(str::trim)
                        .filter(|o| !o.is_empty())
                        .collect();
                    if options.is_empty() {
                        String::new()
                    } else {
                        options[i % options.len()].to_string()
                    }
                })
                .into_owned()
        })
        .collect()
}

/// The `{a|b}` blocks in `prompt`, in order of appearance.
pub fn variation_blocks(prompt: &str) -> Vec<&str> {
    ALTERNATION.find_iter(prompt).map(|m| m.as_str()).collect()
}

/// Variation blocks and reference-image phrases of `original` missing from `rewritten`.
pub fn missing_protected_phrases<'a>(original: &'a str, rewritten: &str) -> Vec<&'a str> {
    let lowered = rewritten.to_lowercase();
    let blocks = variation_blocks(original)
        .into_iter()
        .filter(|block| !rewritten.contains(block));
    let references = REFERENCE_IMAGES
        .find_iter(original)
        .map(|m| m.as_str())
        .filter(|phrase| !lowered.contains(&phrase.to_lowercase()));

    let mut missing: Vec<&str> = Vec::new();
    for phrase in blocks.chain(references) {
        if !missing.contains(&phrase) {
            missing.push(phrase);
        }
    }
    missing
}

/// Appends every protected phrase `rewritten` dropped, each after `", "`.
pub fn restore_protected_phrases(original: &str, rewritten: &str) -> String {
    let mut restored = rewritten.trim_end().to_string();
    for phrase in missing_protected_phrases(original, rewritten) {
        tracing::debug!(phrase, "restoring protected phrase");
        if restored.is_empty() {
            restored.push_str(phrase);
        } else {
            restored.push_str(", ");
            restored.push_str(phrase);
        }
    }
    restored
}
