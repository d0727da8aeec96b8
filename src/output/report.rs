//! Rendering of extraction results and gap reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::matching::{GapReport, MatchCategory};
use colored::Colorize;
use std::fmt::Write;

/// Render an extracted skill list in the requested format.
pub fn render_skills(skills: &[String], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(skills)?),
        OutputFormat::Markdown => {
            let mut out = String::from("## Extracted skills\n\n");
            for skill in skills {
                let _ = writeln!(out, "- {}", skill);
            }
            Ok(out)
        }
        OutputFormat::Console => {
            let mut out = String::new();
            let _ = writeln!(out, "{} ({})", "Extracted skills".bold(), skills.len());
            for skill in skills {
                let _ = writeln!(out, "  • {}", skill);
            }
            Ok(out)
        }
    }
}

/// Render a gap report in the requested format.
pub fn render_report(report: &GapReport, format: OutputFormat, detailed: bool) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Markdown => Ok(render_markdown(report, detailed)),
        OutputFormat::Console => Ok(render_console(report, detailed)),
    }
}

fn render_console(report: &GapReport, detailed: bool) -> String {
    let mut out = String::new();

    let pct = format!("{:.1}%", report.match_percentage);
    let pct = if report.match_percentage >= 75.0 {
        pct.green().bold()
    } else if report.match_percentage >= 50.0 {
        pct.yellow().bold()
    } else {
        pct.red().bold()
    };
    let _ = writeln!(out, "\n{} {}", "Skill match:".bold(), pct);

    let _ = writeln!(
        out,
        "\n{} ({})",
        "Matched skills".green().bold(),
        report.matched_skills.len()
    );
    for skill in &report.matched_skills {
        let _ = writeln!(out, "  ✓ {}", skill);
    }

    let _ = writeln!(
        out,
        "\n{} ({})",
        "Partial matches".yellow().bold(),
        report.partial_skills.len()
    );
    for skill in &report.partial_skills {
        let _ = writeln!(out, "  ~ {}", skill);
    }

    let _ = writeln!(
        out,
        "\n{} ({})",
        "Missing job skills".red().bold(),
        report.missing_skills.len()
    );
    for skill in &report.missing_skills {
        let _ = writeln!(out, "  ✗ {}", skill);
    }

    let _ = writeln!(
        out,
        "\n{} ({})",
        "Unmatched resume skills".dimmed().bold(),
        report.unmatched_resume_skills.len()
    );
    for skill in &report.unmatched_resume_skills {
        let _ = writeln!(out, "  - {}", skill);
    }

    if detailed && !report.records.is_empty() {
        let _ = writeln!(out, "\n{}", "Per-skill detail".bold());
        for record in &report.records {
            let marker = match record.category {
                MatchCategory::Matched => "✓".green(),
                MatchCategory::Partial => "~".yellow(),
                MatchCategory::Unmatched => "✗".red(),
            };
            let _ = writeln!(
                out,
                "  {} {} -> {} ({:.3})",
                marker,
                record.resume_skill,
                record.best_job_skill.as_deref().unwrap_or("—"),
                record.similarity
            );
        }
    }

    out
}

fn render_markdown(report: &GapReport, detailed: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Skill gap report\n");
    let _ = writeln!(out, "**Match: {:.1}%**\n", report.match_percentage);

    for (title, skills) in [
        ("Matched skills", &report.matched_skills),
        ("Partial matches", &report.partial_skills),
        ("Missing job skills", &report.missing_skills),
        ("Unmatched resume skills", &report.unmatched_resume_skills),
    ] {
        let _ = writeln!(out, "## {} ({})\n", title, skills.len());
        for skill in skills {
            let _ = writeln!(out, "- {}", skill);
        }
        let _ = writeln!(out);
    }

    if detailed && !report.records.is_empty() {
        let _ = writeln!(out, "## Per-skill detail\n");
        let _ = writeln!(out, "| Resume skill | Best job skill | Similarity | Category |");
        let _ = writeln!(out, "|---|---|---|---|");
        for record in &report.records {
            let category = match record.category {
                MatchCategory::Matched => "matched",
                MatchCategory::Partial => "partial",
                MatchCategory::Unmatched => "unmatched",
            };
            let _ = writeln!(
                out,
                "| {} | {} | {:.3} | {} |",
                record.resume_skill,
                record.best_job_skill.as_deref().unwrap_or("—"),
                record.similarity,
                category
            );
        }
    }

    out
}
