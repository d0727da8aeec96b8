//! Semantic skill-gap analysis library
//!
//! Two entry points: [`extraction::extract_job_skills`] turns a raw job
//! description into a normalized skill list, and [`matching::match_skills`]
//! reconciles resume skills against job skills through embedding
//! similarity.

pub mod cli;
pub mod config;
pub mod error;
pub mod extraction;
pub mod matching;
pub mod models;
pub mod output;

pub use config::Config;
pub use error::{Result, SkillGapError};
pub use extraction::extract_job_skills;
pub use matching::{match_skills, Embedder, GapReport};
