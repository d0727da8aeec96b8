//! skillgap: semantic skill-gap analysis between resumes and job descriptions

use clap::Parser;
use log::{error, info};
use skillgap::cli::{self, Cli, Commands, ConfigAction, ModelAction};
use skillgap::config::{Config, OutputFormat};
use skillgap::error::{Result, SkillGapError};
use skillgap::extraction;
use skillgap::matching::{self, Embedder};
use skillgap::models::ModelManager;
use skillgap::output;
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Extract {
            job,
            output,
            no_color,
        } => {
            let format = cli::resolve_output_format(output.as_deref(), config.output.format)
                .map_err(SkillGapError::InvalidInput)?;
            apply_color_settings(&config, no_color, format);

            let job_text = read_text_file(&job)?;
            info!("extracting skills from {}", job.display());

            let skills = extraction::extract_job_skills(&job_text);
            print!("{}", output::render_skills(&skills, format)?);
            Ok(())
        }

        Commands::Match {
            resume_skills,
            job,
            embedding,
            output,
            detailed,
            no_color,
        } => {
            let format = cli::resolve_output_format(output.as_deref(), config.output.format)
                .map_err(SkillGapError::InvalidInput)?;
            apply_color_settings(&config, no_color, format);

            let raw_resume_skills = read_skill_list(&resume_skills)?;
            let job_text = read_text_file(&job)?;

            let resume_side = extraction::normalize_skill_list(&raw_resume_skills);
            let job_side = extraction::extract_job_skills(&job_text);
            info!(
                "{} resume skills vs {} job skills",
                resume_side.len(),
                job_side.len()
            );

            let manager = ModelManager::new(config.models.models_dir.clone());
            let model_id = embedding.unwrap_or_else(|| config.models.embedding_model.clone());
            let model_path = manager.ensure_available(&model_id).await?;

            let embedder = Embedder::new(&model_path);
            let report = matching::match_skills(&embedder, &resume_side, &job_side, &config.matching)?;

            print!(
                "{}",
                output::render_report(&report, format, detailed || config.output.detailed)?
            );
            Ok(())
        }

        Commands::Models { action } => {
            let manager = ModelManager::new(config.models.models_dir.clone());
            match action {
                ModelAction::List => {
                    let downloaded = manager.list_downloaded().await?;
                    println!("Available embedding models:");
                    for (id, info) in manager.list_available() {
                        let status = if downloaded.contains(id) {
                            "[downloaded]"
                        } else {
                            ""
                        };
                        println!(
                            "  {:<16} {:>4} MB  {:>4}d  {} {}",
                            id, info.size_mb, info.dimensions, info.description, status
                        );
                    }
                    Ok(())
                }
                ModelAction::Download { model } => {
                    config.ensure_models_dir()?;
                    let path = manager.ensure_available(&model).await?;
                    println!("Model ready at {}", path.display());
                    Ok(())
                }
                ModelAction::Path { model } => {
                    let model_id = manager.resolve(&model).ok_or_else(|| {
                        SkillGapError::InvalidInput(format!("unknown model: {}", model))
                    })?;
                    println!("{}", manager.model_dir(&model_id).display());
                    Ok(())
                }
            }
        }

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let rendered = toml::to_string_pretty(&config).map_err(|e| {
                    SkillGapError::Configuration(format!("failed to render config: {}", e))
                })?;
                println!("{}", rendered);
                Ok(())
            }
            ConfigAction::Path => {
                println!("{}", Config::config_path().display());
                Ok(())
            }
            ConfigAction::Reset => {
                let defaults = Config::default();
                defaults.save()?;
                println!("Configuration reset to defaults");
                Ok(())
            }
        },
    }
}

/// Color only applies to console output, and both the config switch and
/// the per-command flag can turn it off.
fn apply_color_settings(config: &Config, no_color: bool, format: OutputFormat) {
    if no_color || !config.output.color_output || format != OutputFormat::Console {
        colored::control::set_override(false);
    }
}

fn read_text_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(SkillGapError::InvalidInput(format!(
            "file not found: {}",
            path.display()
        )));
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Resume skills arrive either as a JSON array or as a plain-text file with
/// one skill per line.
fn read_skill_list(path: &Path) -> Result<Vec<String>> {
    let content = read_text_file(path)?;

    if path.extension().is_some_and(|ext| ext == "json") {
        let skills: Vec<String> = serde_json::from_str(&content)?;
        return Ok(skills);
    }

    Ok(content
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect())
}
