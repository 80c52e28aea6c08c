//! Prefix completion over registered command names.
//!
//! Dispatch itself never prefix-matches; frontends feed the name list from
//! [`CommandProcessor::commands`](crate::CommandProcessor::commands)
//! through these helpers to build suggestion lists and tab completion.

/// Names matching the prefix case-insensitively, input order preserved.
///
/// An empty or whitespace-only prefix yields nothing; a prefix equal to a
/// full name still matches it.
pub fn suggestions<'a>(names: &[&'a str], prefix: &str) -> Vec<&'a str> {
    let prefix = prefix.trim();
    if prefix.is_empty() {
        return Vec::new();
    }
    let prefix = prefix.to_lowercase();
    names
        .iter()
        .copied()
        .filter(|name| name.to_lowercase().starts_with(&prefix))
        .collect()
}

/// The first match, exposed by frontends as the default suggestion.
pub fn default_suggestion<'a>(names: &[&'a str], prefix: &str) -> Option<&'a str> {
    suggestions(names, prefix).into_iter().next()
}

/// Longest shared prefix of the candidates, for completion-on-tab.
pub fn longest_common_prefix(candidates: &[&str]) -> String {
    let Some((first, rest)) = candidates.split_first() else {
        return String::new();
    };
    let mut prefix = first.to_string();
    for candidate in rest {
        let mut next = String::new();
        for (a, b) in prefix.chars().zip(candidate.chars()) {
            if a == b {
                next.push(a);
            } else {
                break;
            }
        }
        prefix = next;
        if prefix.is_empty() {
            break;
        }
    }
    prefix
}
