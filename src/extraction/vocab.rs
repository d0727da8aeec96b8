//! Filter and dictionary vocabulary tables
//!
//! The tables live in `data/filter_terms.toml` so the filtering policy can
//! be tuned and versioned as data, separately from the extraction control
//! flow. The file is embedded at compile time and parsed once.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashSet;

const FILTER_TERMS: &str = include_str!("../../data/filter_terms.toml");

#[derive(Debug, Deserialize)]
pub struct Vocab {
    /// Soft skills, never admitted as technical skills.
    pub soft_skills: HashSet<String>,
    /// Generic job-posting vocabulary rejected outright.
    pub generic_terms: HashSet<String>,
    /// Descriptive prefixes stripped before re-validation.
    pub strip_prefixes: Vec<String>,
    /// Final words that mark a multi-word phrase as descriptive.
    pub bad_suffixes: HashSet<String>,
    /// Short all-lowercase words that are real skills anyway.
    pub short_whitelist: HashSet<String>,
    /// Known technology vocabulary for the dictionary strategy.
    pub tech_stack: Vec<String>,
}

static VOCAB: Lazy<Vocab> = Lazy::new(|| {
    toml::from_str(FILTER_TERMS).expect("embedded filter_terms.toml is malformed")
});

pub fn vocab() -> &'static Vocab {
    &VOCAB
}
