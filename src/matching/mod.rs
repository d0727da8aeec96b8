//! Semantic skill matching: embeddings, pairwise classification, coverage
//! scoring.

pub mod embedder;
pub mod matcher;
pub mod score;

pub use embedder::Embedder;
pub use matcher::{match_skills, GapReport, MatchCategory, MatchRecord};
pub use score::match_percentage;
