//! CLI interface for the skill-gap analyzer

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skillgap")]
#[command(about = "Semantic skill-gap analysis between resumes and job descriptions")]
#[command(
    long_about = "Extract technical skills from job descriptions and match them against \
resume skills using embedding similarity, producing a categorized skill-gap report"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract technical skills from a job description
    Extract {
        /// Path to job description text file
        #[arg(short, long)]
        job: PathBuf,

        /// Output format: console, json, markdown (defaults to config)
        #[arg(short, long)]
        output: Option<String>,

        /// Disable colored console output
        #[arg(long)]
        no_color: bool,
    },

    /// Match resume skills against a job description
    Match {
        /// Path to resume skills file (.json array, or one skill per line)
        #[arg(short, long)]
        resume_skills: PathBuf,

        /// Path to job description text file
        #[arg(short, long)]
        job: PathBuf,

        /// Embedding model to use (overrides config)
        #[arg(short, long)]
        embedding: Option<String>,

        /// Output format: console, json, markdown (defaults to config)
        #[arg(short, long)]
        output: Option<String>,

        /// Include per-skill similarity detail
        #[arg(short, long)]
        detailed: bool,

        /// Disable colored console output
        #[arg(long)]
        no_color: bool,
    },

    /// Model management commands
    Models {
        #[command(subcommand)]
        action: ModelAction,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ModelAction {
    /// List available and downloaded embedding models
    List,

    /// Download an embedding model
    Download {
        /// Model id, repo id, or name
        model: String,
    },

    /// Show the local path of a model
    Path {
        /// Model id, repo id, or name
        model: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Show the configuration file path
    Path,
    /// Reset configuration to defaults
    Reset,
}

/// Output format for a command: the explicit flag when given, otherwise
/// the configured default.
pub fn resolve_output_format(
    requested: Option<&str>,
    configured: OutputFormat,
) -> Result<OutputFormat, String> {
    match requested {
        Some(format) => parse_output_format(format),
        None => Ok(configured),
    }
}

pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        other => Err(format!(
            "unsupported output format '{}' (expected console, json, or markdown)",
            other
        )),
    }
}
