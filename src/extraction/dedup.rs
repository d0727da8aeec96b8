//! Overlap-aware skill deduplication

use std::collections::HashSet;

/// Collapse overlapping skills, keeping the most specific phrase.
///
/// Distinct skills are visited longest-first; a candidate is kept only if
/// its token set is not entirely contained in the tokens already claimed.
/// "machine learning engineer" therefore suppresses a lone "learning",
/// while "machine learning" and "deep learning" coexist (each contributes
/// an unclaimed token). Output order is longest-first; callers wanting
/// alphabetical order sort afterwards.
pub fn deduplicate(skills: Vec<String>) -> Vec<String> {
    let mut distinct: Vec<String> = skills
        .into_iter()
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    distinct.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let mut unique = Vec::new();
    let mut seen_tokens: HashSet<String> = HashSet::new();

    for skill in distinct {
        let tokens: HashSet<&str> = skill.split(' ').collect();
        if !tokens.iter().all(|t| seen_tokens.contains(*t)) {
            seen_tokens.extend(tokens.into_iter().map(String::from));
            unique.push(skill);
        }
    }

    unique
}
