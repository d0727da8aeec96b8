//! Embedding provider backed by Model2Vec
//!
//! The model is expensive to load, so the handle is lazy: nothing touches
//! disk until the first embed call, and initialization happens at most once
//! regardless of how many threads hit the handle first. After that the
//! model is shared read-only. A failed load is fatal for matching and is
//! not retried.

use crate::error::{Result, SkillGapError};
use log::{debug, info};
use model2vec_rs::model::StaticModel;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub struct Embedder {
    model_path: PathBuf,
    model: OnceCell<StaticModel>,
}

impl Embedder {
    pub fn new(model_path: &Path) -> Self {
        Self {
            model_path: model_path.to_path_buf(),
            model: OnceCell::new(),
        }
    }

    /// The loaded model, initializing it on first call. Concurrent first
    /// callers are serialized by the cell; exactly one load runs.
    fn model(&self) -> Result<&StaticModel> {
        self.model.get_or_try_init(|| {
            let start = Instant::now();
            info!("loading embedding model from {}", self.model_path.display());
            let model = StaticModel::from_pretrained(
                &self.model_path,
                None, // token
                None, // normalize
                None, // subfolder
            )
            .map_err(|e| {
                SkillGapError::ModelUnavailable(format!(
                    "failed to load model from {}: {}",
                    self.model_path.display(),
                    e
                ))
            })?;
            info!("embedding model loaded in {:.2?}", start.elapsed());
            Ok(model)
        })
    }

    /// Embed each skill into a fixed-size vector, one per input in the same
    /// order. An empty input returns an empty vec without touching the
    /// model.
    pub fn embed(&self, skills: &[String]) -> Result<Vec<Vec<f32>>> {
        if skills.is_empty() {
            return Ok(Vec::new());
        }
        let start = Instant::now();
        let embeddings = self.model()?.encode(skills);
        debug!("embedded {} skills in {:.2?}", skills.len(), start.elapsed());
        Ok(embeddings)
    }

    pub fn is_loaded(&self) -> bool {
        self.model.get().is_some()
    }
}

/// Cosine similarity between two equal-length vectors. Zero-norm vectors
/// score 0.0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(SkillGapError::InvalidInput(format!(
            "embedding dimensions don't match: {} vs {}",
            a.len(),
            b.len()
        )));
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        Ok(0.0)
    } else {
        Ok(dot / (norm_a * norm_b))
    }
}
