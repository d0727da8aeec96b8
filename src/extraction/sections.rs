//! Skill-section segmentation
//!
//! Job descriptions bury their skill lists under headers like "Required
//! Skills" or "Qualifications". Scanning for those headers and keeping only
//! the sections beneath them cuts most of the boilerplate (company blurb,
//! benefits, EEO text) before candidate generation sees it.

use once_cell::sync::Lazy;
use regex::Regex;

static SECTION_HEADERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)required\s+skills?",
        r"(?i)technical\s+skills?",
        r"(?i)qualifications?",
        r"(?i)requirements?",
        r"(?i)must\s+have",
        r"(?i)experience\s+with",
        r"(?i)proficiency\s+in",
        r"(?i)knowledge\s+of",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("invalid section header pattern"))
    .collect()
});

/// Extract skill-dense sections from a job description.
///
/// A line matching a header pattern opens a section; a blank line after at
/// least one accumulated line closes it. Closed sections are space-joined.
/// If no header ever matches, the whole input is returned unmodified, so
/// segmentation never discards all content.
pub fn skill_sections(job_description: &str) -> String {
    let mut sections: Vec<String> = Vec::new();
    let mut buffer: Vec<&str> = Vec::new();
    let mut in_section = false;

    for line in job_description.lines() {
        let line = line.trim();

        if SECTION_HEADERS.iter().any(|p| p.is_match(line)) {
            in_section = true;
            buffer.clear();
        }

        if in_section {
            buffer.push(line);

            if line.is_empty() && buffer.len() > 1 {
                sections.push(buffer.join(" "));
                in_section = false;
                buffer.clear();
            }
        }
    }

    // A section still open at end of input counts.
    if !buffer.is_empty() {
        sections.push(buffer.join(" "));
    }

    if sections.is_empty() {
        job_description.to_string()
    } else {
        sections.join(" ")
    }
}
