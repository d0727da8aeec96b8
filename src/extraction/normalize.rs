//! Skill normalization and noise filtering
//!
//! Every candidate from every strategy passes through here. The filter is
//! deliberately conservative: a dropped real skill costs less than a noise
//! phrase polluting the semantic match downstream.

use crate::extraction::vocab::vocab;
use once_cell::sync::Lazy;
use regex::Regex;

static NON_SKILL_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s.+#-]").expect("invalid char-strip pattern"));

const MAX_PHRASE_WORDS: usize = 4;

/// Normalize a raw candidate from a heuristic strategy and decide whether
/// it is a skill.
///
/// Returns `None` for anything the filter classifies as noise. Idempotent:
/// feeding an accepted skill back through yields the same skill.
pub fn normalize_skill(raw: &str) -> Option<String> {
    normalize_inner(raw, false)
}

/// Normalization for terms of known provenance: dictionary hits and
/// externally supplied skill lists. Identical chain except the
/// short-lowercase heuristic is skipped, so "go", "js", and "c++" survive.
pub fn normalize_known(raw: &str) -> Option<String> {
    normalize_inner(raw, true)
}

fn normalize_inner(raw: &str, known_term: bool) -> Option<String> {
    let v = vocab();

    // Lowercase, strip everything but word chars / whitespace / . + # -,
    // collapse whitespace, trim stray dots and dashes.
    let lowered = raw.to_lowercase();
    let stripped = NON_SKILL_CHARS.replace_all(&lowered, "");
    let mut skill = stripped
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim_matches(|c| c == '.' || c == '-')
        .to_string();

    if skill.len() < 2 {
        return None;
    }
    if v.soft_skills.contains(&skill) || v.generic_terms.contains(&skill) {
        return None;
    }

    // "strong python" -> "python"; re-validate after stripping. Prefixes
    // stack ("proven strong python"), so rescan from the top of the list
    // after each strip until nothing matches. Each strip shortens the
    // string, so the loop terminates.
    let mut stripped = true;
    while stripped {
        stripped = false;
        for prefix in &v.strip_prefixes {
            if let Some(rest) = skill.strip_prefix(&format!("{} ", prefix)) {
                skill = rest.trim().to_string();
                stripped = true;
                break;
            }
        }
    }
    if skill.len() < 2 {
        return None;
    }
    if v.soft_skills.contains(&skill) || v.generic_terms.contains(&skill) {
        return None;
    }

    let words: Vec<&str> = skill.split(' ').collect();
    if words.len() > MAX_PHRASE_WORDS {
        return None;
    }

    // "product managers", "solid understanding": descriptive phrase, not a
    // skill name.
    if words.len() > 1 && v.bad_suffixes.contains(*words.last().unwrap_or(&"")) {
        return None;
    }

    // Short single lowercase words from the heuristic strategies are
    // mostly chunking debris ("end", "use") unless whitelisted. Known
    // terms are exempt: "go" and "c++" are real skills.
    if !known_term
        && words.len() == 1
        && skill.len() < 4
        && skill.chars().all(|c| !c.is_uppercase())
        && !v.short_whitelist.contains(&skill)
    {
        return None;
    }

    // Plural of a generic term ("managers") is still generic.
    if let Some(singular) = skill.strip_suffix('s') {
        if v.generic_terms.contains(singular) {
            return None;
        }
    }

    Some(skill)
}
