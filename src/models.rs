//! Embedding model download and local cache management
//!
//! Models live under the configured models directory, one subdirectory per
//! model id. Download happens through the HuggingFace hub; once the three
//! files Model2Vec needs are on disk the model is served locally and never
//! re-fetched.

use crate::error::{Result, SkillGapError};
use hf_hub::api::tokio::Api;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Files Model2Vec requires to load from a local path.
const REQUIRED_FILES: [&str; 3] = ["tokenizer.json", "model.safetensors", "config.json"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingModelInfo {
    pub name: String,
    pub repo_id: String,
    pub size_mb: u64,
    pub dimensions: u32,
    pub description: String,
}

pub struct ModelManager {
    models_dir: PathBuf,
    available: HashMap<String, EmbeddingModelInfo>,
}

impl ModelManager {
    pub fn new(models_dir: PathBuf) -> Self {
        let mut available = HashMap::new();

        available.insert(
            "potion-base-8M".to_string(),
            EmbeddingModelInfo {
                name: "Potion Base 8M".to_string(),
                repo_id: "minishlab/potion-base-8M".to_string(),
                size_mb: 33,
                dimensions: 256,
                description: "Fast Model2Vec embeddings, good quality/size balance".to_string(),
            },
        );
        available.insert(
            "m2v-base".to_string(),
            EmbeddingModelInfo {
                name: "Model2Vec Base".to_string(),
                repo_id: "minishlab/M2V_base_output".to_string(),
                size_mb: 90,
                dimensions: 256,
                description: "Model2Vec base embeddings model".to_string(),
            },
        );
        available.insert(
            "m2v-large".to_string(),
            EmbeddingModelInfo {
                name: "Model2Vec Large".to_string(),
                repo_id: "minishlab/M2V_large_output".to_string(),
                size_mb: 250,
                dimensions: 512,
                description: "High-capacity Model2Vec large embeddings model".to_string(),
            },
        );

        Self {
            models_dir,
            available,
        }
    }

    pub fn list_available(&self) -> Vec<(&String, &EmbeddingModelInfo)> {
        let mut models: Vec<_> = self.available.iter().collect();
        models.sort_by_key(|(id, _)| id.as_str());
        models
    }

    /// Resolve a model id, repo id, or display name to a known model id.
    pub fn resolve(&self, input: &str) -> Option<String> {
        if self.available.contains_key(input) {
            return Some(input.to_string());
        }
        let input_lower = input.to_lowercase();
        self.available
            .iter()
            .find(|(_, info)| {
                info.repo_id == input || info.name.to_lowercase() == input_lower
            })
            .map(|(id, _)| id.clone())
    }

    pub fn model_dir(&self, model_id: &str) -> PathBuf {
        self.models_dir.join(model_id)
    }

    /// A model is downloaded when all files Model2Vec needs are present.
    pub fn is_downloaded(&self, model_id: &str) -> bool {
        let dir = self.model_dir(model_id);
        REQUIRED_FILES.iter().all(|f| dir.join(f).exists())
    }

    /// Path to a usable local model, downloading it first if necessary.
    pub async fn ensure_available(&self, model_id: &str) -> Result<PathBuf> {
        let model_id = self.resolve(model_id).ok_or_else(|| {
            SkillGapError::ModelDownload(format!("unknown embedding model: {}", model_id))
        })?;

        if self.is_downloaded(&model_id) {
            return Ok(self.model_dir(&model_id));
        }
        self.download(&model_id).await
    }

    pub async fn download(&self, model_id: &str) -> Result<PathBuf> {
        let info = self.available.get(model_id).ok_or_else(|| {
            SkillGapError::ModelDownload(format!("unknown embedding model: {}", model_id))
        })?;

        let model_dir = self.model_dir(model_id);
        fs::create_dir_all(&model_dir).await?;

        info!(
            "downloading {} ({} MB) from {}",
            info.name, info.size_mb, info.repo_id
        );

        let api = Api::new().map_err(|e| {
            SkillGapError::ModelDownload(format!("failed to initialize HF API: {}", e))
        })?;
        let repo = api.model(info.repo_id.clone());

        for file in REQUIRED_FILES {
            let fetched = repo.get(file).await.map_err(|e| {
                SkillGapError::ModelDownload(format!("failed to download {}: {}", file, e))
            })?;
            fs::copy(&fetched, model_dir.join(file)).await?;
            info!("downloaded {}", file);
        }

        // Nice to have for provenance, not required to load.
        match repo.get("README.md").await {
            Ok(fetched) => {
                fs::copy(&fetched, model_dir.join("README.md")).await?;
            }
            Err(e) => warn!("optional README.md not fetched: {}", e),
        }

        info!("model {} ready at {}", info.name, model_dir.display());
        Ok(model_dir)
    }

    /// Scan the models directory for usable local models.
    pub async fn list_downloaded(&self) -> Result<Vec<String>> {
        let mut downloaded = Vec::new();
        if !self.models_dir.exists() {
            return Ok(downloaded);
        }

        let mut entries = fs::read_dir(&self.models_dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_dir() {
                let name = entry.file_name().to_string_lossy().to_string();
                if self.is_downloaded(&name) {
                    downloaded.push(name);
                }
            }
        }
        downloaded.sort();
        Ok(downloaded)
    }

    pub fn models_dir(&self) -> &Path {
        &self.models_dir
    }
}
