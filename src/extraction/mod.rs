//! Job-skill extraction pipeline
//!
//! raw job text -> section segmentation -> candidate generation ->
//! normalization/filtering -> deduplication -> alphabetically sorted skill
//! list. Every stage is total: malformed or empty text produces an empty
//! skill list, never an error.

pub mod candidates;
pub mod dedup;
pub mod normalize;
pub mod sections;
pub mod vocab;

use candidates::CandidateGenerator;
use log::debug;

/// Extract normalized, deduplicated technical skills from a job
/// description, sorted alphabetically.
pub fn extract_job_skills(job_description: &str) -> Vec<String> {
    let skill_text = sections::skill_sections(job_description);
    debug!(
        "segmented {} chars of skill text from {} chars of input",
        skill_text.len(),
        job_description.len()
    );

    let generator = CandidateGenerator::new();
    let raw_candidates = generator.generate(&skill_text);
    debug!("{} raw candidates", raw_candidates.len());

    let normalized: Vec<String> = raw_candidates
        .iter()
        .filter_map(|c| {
            if c.known_term {
                normalize::normalize_known(&c.text)
            } else {
                normalize::normalize_skill(&c.text)
            }
        })
        .collect();

    let mut skills = dedup::deduplicate(normalized);
    skills.sort();
    debug!("{} skills after filtering and dedup", skills.len());

    skills
}

/// Normalize an externally supplied skill list (e.g. parsed resume skills)
/// with the same cleanup and dedup as the job side. The list comes from an
/// upstream extractor, so entries are treated as known terms: "c++" or
/// "go" on a resume must not be dropped as chunking debris.
pub fn normalize_skill_list(raw_skills: &[String]) -> Vec<String> {
    let normalized: Vec<String> = raw_skills
        .iter()
        .filter_map(|s| normalize::normalize_known(s))
        .collect();
    let mut skills = dedup::deduplicate(normalized);
    skills.sort();
    skills
}
