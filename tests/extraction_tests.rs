//! Integration tests for the job-skill extraction pipeline

use skillgap::extraction::{dedup, extract_job_skills, normalize, normalize_skill_list};
use std::collections::HashSet;

#[test]
fn test_required_skills_scenario() {
    let jd = "Required Skills: Strong knowledge of Python, Java, and AWS.\n\nOther info about the role and the team.";
    let skills = extract_job_skills(jd);

    assert!(skills.contains(&"python".to_string()));
    assert!(skills.contains(&"java".to_string()));
    assert!(skills.contains(&"aws".to_string()));
    assert!(!skills.contains(&"knowledge".to_string()));
}

#[test]
fn test_full_posting() {
    let jd = "\
About Us
We build developer tools used by thousands of teams.

Requirements:
- 5+ years building services in Node.js and TypeScript
- Docker, Kubernetes, and PostgreSQL in production
- Terraform and CI/CD pipelines

Benefits:
Free snacks and a gym stipend.
";
    let skills = extract_job_skills(jd);

    assert!(skills.contains(&"node.js".to_string()));
    assert!(skills.contains(&"typescript".to_string()));
    assert!(skills.contains(&"docker".to_string()));
    assert!(skills.contains(&"kubernetes".to_string()));
    assert!(skills.contains(&"postgresql".to_string()));
    assert!(skills.contains(&"terraform".to_string()));
    // The benefits section never reaches extraction
    assert!(!skills.iter().any(|s| s.contains("snack")));
    assert!(!skills.iter().any(|s| s.contains("gym")));
}

#[test]
fn test_go_verb_is_not_a_skill() {
    let skills = extract_job_skills("Candidates go to client sites and go on call.");
    assert!(!skills.contains(&"go".to_string()));
}

#[test]
fn test_go_language_is_a_skill() {
    let skills = extract_job_skills("Experience with Go, Python and gRPC services.");
    assert!(skills.contains(&"go".to_string()));
    assert!(skills.contains(&"python".to_string()));
}

#[test]
fn test_output_is_sorted_alphabetically() {
    let skills = extract_job_skills("Must have: Terraform, Ansible, Docker, Kubernetes");
    let mut sorted = skills.clone();
    sorted.sort();
    assert_eq!(skills, sorted);
}

#[test]
fn test_no_token_subset_pairs_in_output() {
    let jd = "Requirements: machine learning, machine learning engineering, learning, deep learning";
    let skills = extract_job_skills(jd);

    for (i, a) in skills.iter().enumerate() {
        for (j, b) in skills.iter().enumerate() {
            if i == j {
                continue;
            }
            let ta: HashSet<&str> = a.split(' ').collect();
            let tb: HashSet<&str> = b.split(' ').collect();
            assert!(!ta.is_subset(&tb), "{:?} subset of {:?}", a, b);
        }
    }
}

#[test]
fn test_empty_and_garbage_input_yield_empty_lists() {
    assert!(extract_job_skills("").is_empty());
    assert!(extract_job_skills("\n\n\n").is_empty());
    assert!(extract_job_skills("???!!!???").is_empty());
}

#[test]
fn test_normalizer_output_charset_and_membership() {
    let jd = "Required skills: C++, Node.js (latest), \"Kubernetes\", team-work & Communication!";
    for skill in extract_job_skills(jd) {
        assert!(skill.chars().all(|c| {
            c.is_alphanumeric() || c == '_' || c == ' ' || c == '.' || c == '-' || c == '+' || c == '#'
        }));
        assert!(!skill.chars().any(|c| c.is_uppercase()));
        // Re-normalizing an output skill is a no-op
        assert_eq!(normalize::normalize_known(&skill), Some(skill.clone()));
    }
}

#[test]
fn test_dedup_keeps_most_specific() {
    let out = dedup::deduplicate(vec![
        "cloud computing".to_string(),
        "computing".to_string(),
        "cloud".to_string(),
    ]);
    assert_eq!(out, vec!["cloud computing".to_string()]);
}

#[test]
fn test_resume_skill_list_normalization() {
    let raw = vec![
        "C++".to_string(),
        "Python".to_string(),
        "PYTHON".to_string(),
        "Teamwork".to_string(),
        "".to_string(),
    ];
    let skills = normalize_skill_list(&raw);
    assert_eq!(
        skills,
        vec!["c++".to_string(), "python".to_string()]
    );
}
