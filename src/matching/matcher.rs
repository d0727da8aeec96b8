//! Semantic matching of resume skills against job skills

use crate::config::MatchingConfig;
use crate::error::Result;
use crate::matching::embedder::{cosine_similarity, Embedder};
use crate::matching::score::match_percentage;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchCategory {
    Matched,
    Partial,
    Unmatched,
}

/// Classification of one resume skill against its best job-skill
/// counterpart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub resume_skill: String,
    pub best_job_skill: Option<String>,
    pub similarity: f32,
    pub category: MatchCategory,
}

/// Terminal output of the pipeline: resume skills partitioned by match
/// tier, job skills nobody covered, and a weighted coverage percentage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapReport {
    pub matched_skills: Vec<String>,
    pub partial_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub unmatched_resume_skills: Vec<String>,
    pub match_percentage: f32,
    pub records: Vec<MatchRecord>,
}

/// Embed both skill lists once and match them.
pub fn match_skills(
    embedder: &Embedder,
    resume_skills: &[String],
    job_skills: &[String],
    config: &MatchingConfig,
) -> Result<GapReport> {
    // Both edge cases avoid touching the model at all.
    if resume_skills.is_empty() {
        return Ok(GapReport {
            matched_skills: Vec::new(),
            partial_skills: Vec::new(),
            missing_skills: job_skills.to_vec(),
            unmatched_resume_skills: Vec::new(),
            match_percentage: match_percentage(0, 0, job_skills.len(), config.partial_weight),
            records: Vec::new(),
        });
    }
    if job_skills.is_empty() {
        return Ok(GapReport {
            matched_skills: Vec::new(),
            partial_skills: Vec::new(),
            missing_skills: Vec::new(),
            unmatched_resume_skills: resume_skills.to_vec(),
            match_percentage: match_percentage(0, 0, 0, config.partial_weight),
            records: resume_skills
                .iter()
                .map(|s| MatchRecord {
                    resume_skill: s.clone(),
                    best_job_skill: None,
                    similarity: 0.0,
                    category: MatchCategory::Unmatched,
                })
                .collect(),
        });
    }

    let resume_embeddings = embedder.embed(resume_skills)?;
    let job_embeddings = embedder.embed(job_skills)?;

    match_with_embeddings(
        resume_skills,
        &resume_embeddings,
        job_skills,
        &job_embeddings,
        config,
    )
}

/// Pure matching core over precomputed embeddings.
///
/// For each resume skill, the job skill with maximum cosine similarity is
/// its best match (ties broken by first occurrence in job order), then the
/// similarity is classified into matched / partial / unmatched tiers. A job
/// skill claimed at matched or partial level by at least one resume skill
/// is covered; claiming is many-to-one, several resume skills may share one
/// job skill.
pub fn match_with_embeddings(
    resume_skills: &[String],
    resume_embeddings: &[Vec<f32>],
    job_skills: &[String],
    job_embeddings: &[Vec<f32>],
    config: &MatchingConfig,
) -> Result<GapReport> {
    let mut matched_skills = Vec::new();
    let mut partial_skills = Vec::new();
    let mut unmatched_resume_skills = Vec::new();
    let mut records = Vec::new();
    let mut claimed: HashSet<usize> = HashSet::new();

    for (resume_skill, resume_embedding) in resume_skills.iter().zip(resume_embeddings.iter()) {
        let mut best_idx = 0usize;
        let mut best_score = f32::NEG_INFINITY;
        for (idx, job_embedding) in job_embeddings.iter().enumerate() {
            let score = cosine_similarity(resume_embedding, job_embedding)?;
            // Strictly-greater keeps the first occurrence on ties
            if score > best_score {
                best_score = score;
                best_idx = idx;
            }
        }

        let category = if best_score >= config.match_threshold {
            MatchCategory::Matched
        } else if best_score >= config.partial_threshold {
            MatchCategory::Partial
        } else {
            MatchCategory::Unmatched
        };

        debug!(
            "{:?} -> {:?} ({:.3}, {:?})",
            resume_skill, job_skills[best_idx], best_score, category
        );

        match category {
            MatchCategory::Matched => {
                matched_skills.push(resume_skill.clone());
                claimed.insert(best_idx);
            }
            MatchCategory::Partial => {
                partial_skills.push(resume_skill.clone());
                claimed.insert(best_idx);
            }
            MatchCategory::Unmatched => {
                unmatched_resume_skills.push(resume_skill.clone());
            }
        }

        records.push(MatchRecord {
            resume_skill: resume_skill.clone(),
            best_job_skill: Some(job_skills[best_idx].clone()),
            // Reported similarity lives in [0, 1]; raw cosine can dip below
            // zero for unrelated terms.
            similarity: best_score.clamp(0.0, 1.0),
            category,
        });
    }

    // Job skills nobody claimed, in posting order.
    let missing_skills: Vec<String> = job_skills
        .iter()
        .enumerate()
        .filter(|(idx, _)| !claimed.contains(idx))
        .map(|(_, skill)| skill.clone())
        .collect();

    let percentage = match_percentage(
        matched_skills.len(),
        partial_skills.len(),
        job_skills.len(),
        config.partial_weight,
    );

    Ok(GapReport {
        matched_skills,
        partial_skills,
        missing_skills,
        unmatched_resume_skills,
        match_percentage: percentage,
        records,
    })
}
