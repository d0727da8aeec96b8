//! Candidate skill-phrase generation
//!
//! Four independent strategies run over the same text and their outputs are
//! unioned. Each strategy is deliberately noisy on its own: precision comes
//! from the downstream normalizer/filter, not from the generators. A
//! strategy that finds nothing returns an empty vec; none of them can fail.

use crate::extraction::vocab::vocab;
use aho_corasick::AhoCorasick;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// One candidate-generation strategy over raw text.
pub trait CandidateStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Extract raw candidate phrases. Total over any input; no matches
    /// means an empty vec.
    fn candidates(&self, text: &str) -> Vec<String>;

    /// Whether this strategy emits known vocabulary terms. Known-term
    /// candidates skip the short-word noise heuristic in the filter;
    /// without this, dictionary hits like "go" and "c++" would be dropped
    /// as chunking debris.
    fn known_terms(&self) -> bool {
        false
    }
}

/// A raw candidate with its provenance.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub text: String,
    pub known_term: bool,
}

/// Runs the fixed set of strategies and unions their output. Duplicates are
/// allowed here; deduplication happens after normalization.
pub struct CandidateGenerator {
    strategies: Vec<Box<dyn CandidateStrategy>>,
}

impl CandidateGenerator {
    pub fn new() -> Self {
        Self {
            strategies: vec![
                Box::new(PhraseChunks),
                Box::new(EntitySpans),
                Box::new(TechPatterns::new()),
                Box::new(DictionaryLookup::new()),
            ],
        }
    }

    pub fn generate(&self, text: &str) -> Vec<Candidate> {
        let mut candidates = Vec::new();
        for strategy in &self.strategies {
            let found = strategy.candidates(text);
            debug!("strategy {}: {} candidates", strategy.name(), found.len());
            candidates.extend(found.into_iter().map(|text| Candidate {
                text,
                known_term: strategy.known_terms(),
            }));
        }
        candidates
    }
}

impl Default for CandidateGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Function words that terminate a phrase chunk. Kept small: the point is
/// to split "strong knowledge of Python and Docker" into usable spans, not
/// to parse English.
static FUNCTION_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "an", "the", "and", "or", "of", "in", "on", "with", "to", "for",
        "as", "at", "by", "from", "is", "are", "be", "being", "been", "was",
        "were", "will", "would", "should", "shall", "can", "could", "may",
        "might", "must", "have", "has", "had", "do", "does", "did", "our",
        "your", "their", "his", "her", "its", "my", "this", "that", "these",
        "those", "you", "we", "they", "it", "i", "who", "whom", "which",
        "what", "when", "where", "how", "while", "if", "not", "no", "but",
        "than", "then", "so", "such", "etc", "using", "use", "used",
        "including", "include", "includes", "like", "via", "per", "plus",
        "least", "more", "most", "very", "well", "also", "both", "any",
        "all", "each", "every", "other", "years", "year",
    ]
    .into_iter()
    .collect()
});

/// Noun-phrase-like span extraction.
///
/// Walks word boundaries, breaking a span on punctuation and on function
/// words. What survives between breaks approximates a grammatical noun
/// chunk closely enough for skill text, where chunks are short and listy.
struct PhraseChunks;

impl PhraseChunks {
    fn flush(chunk: &mut Vec<String>, out: &mut Vec<String>) {
        if !chunk.is_empty() && chunk.len() <= 6 {
            out.push(chunk.join(" "));
        }
        chunk.clear();
    }
}

impl CandidateStrategy for PhraseChunks {
    fn name(&self) -> &'static str {
        "phrase-chunks"
    }

    fn candidates(&self, text: &str) -> Vec<String> {
        let mut out = Vec::new();
        let mut chunk: Vec<String> = Vec::new();

        for segment in text.split_word_bounds() {
            if segment.trim().is_empty() {
                continue;
            }

            let is_word = segment.chars().any(|c| c.is_alphanumeric());
            if !is_word {
                // Punctuation ends the span. Tokens this breaks apart
                // ("Node.js", "C++") are recovered by the tech-pattern and
                // dictionary strategies.
                Self::flush(&mut chunk, &mut out);
                continue;
            }

            if FUNCTION_WORDS.contains(segment.to_lowercase().as_str()) {
                Self::flush(&mut chunk, &mut out);
            } else {
                chunk.push(segment.to_string());
            }
        }
        Self::flush(&mut chunk, &mut out);

        out
    }
}

/// Proper-noun-shaped span extraction.
///
/// Stands in for product/organization entity tagging: consecutive
/// capitalized or digit-bearing tokens ("Spring Boot", "Power BI",
/// "S3") are emitted as one candidate.
struct EntitySpans;

impl EntitySpans {
    fn looks_proper(token: &str) -> bool {
        let mut chars = token.chars();
        match chars.next() {
            Some(c) if c.is_uppercase() => true,
            _ => token.chars().any(|c| c.is_ascii_digit()),
        }
    }

    /// A lone capitalized word is usually just sentence case. Keep a
    /// single-token span only when it is shaped like a product name:
    /// all-caps, digit-bearing, or camel-cased ("AWS", "S3", "PostgreSQL").
    fn product_shaped(token: &str) -> bool {
        token.chars().skip(1).any(|c| c.is_uppercase())
            || token.chars().any(|c| c.is_ascii_digit())
    }

    fn flush(run: &mut Vec<&str>, out: &mut Vec<String>) {
        match run.len() {
            1 if Self::product_shaped(run[0]) => out.push(run[0].to_string()),
            2..=3 => out.push(run.join(" ")),
            _ => {}
        }
        run.clear();
    }
}

impl CandidateStrategy for EntitySpans {
    fn name(&self) -> &'static str {
        "entity-spans"
    }

    fn candidates(&self, text: &str) -> Vec<String> {
        let mut out = Vec::new();
        let mut run: Vec<&str> = Vec::new();

        // Word-bound walk rather than unicode_words: a comma between
        // "Python, Java" must break the span, or two list items would fuse
        // into one entity.
        for segment in text.split_word_bounds() {
            if segment.trim().is_empty() {
                continue;
            }
            if !segment.chars().any(|c| c.is_alphanumeric()) {
                Self::flush(&mut run, &mut out);
                continue;
            }

            let proper = Self::looks_proper(segment)
                && !FUNCTION_WORDS.contains(segment.to_lowercase().as_str());
            if proper {
                run.push(segment);
            } else {
                Self::flush(&mut run, &mut out);
            }
        }
        Self::flush(&mut run, &mut out);

        out
    }
}

/// Regex extraction of tech-shaped tokens the other strategies tokenize
/// apart: dotted identifiers, acronyms, "++" names, and C#.
struct TechPatterns {
    patterns: Vec<Regex>,
}

impl TechPatterns {
    fn new() -> Self {
        let patterns = [
            // Node.js, React.js, ASP.net-shaped identifiers
            r"\b[A-Z][a-z]+(?:\.[a-z]+)+\b",
            // AWS, SQL, CI acronyms
            r"\b[A-Z]{2,}\b",
            // C++-style names; no trailing \b, '+' is not a word char
            r"\b\w+\+\+",
            r"\b[Cc]#",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("invalid tech pattern"))
        .collect();

        Self { patterns }
    }
}

impl CandidateStrategy for TechPatterns {
    fn name(&self) -> &'static str {
        "tech-patterns"
    }

    fn candidates(&self, text: &str) -> Vec<String> {
        let mut out = Vec::new();
        for pattern in &self.patterns {
            for m in pattern.find_iter(text) {
                out.push(m.as_str().to_string());
            }
        }
        out
    }
}

/// Go only counts as a language when the sentence shape says so:
/// "experience with Go", "Go, Python", "C++/Go". A bare "go" is almost
/// always the verb. Known limitation: "Go live," still slips through the
/// comma rule.
static GO_CONTEXT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\b(in|with|using|and|or)\s+go\b)|(\bgo\s*[,/])|([,/]\s*go\b)")
        .expect("invalid go context pattern")
});

/// Whole-word, case-insensitive lookup against the known technology
/// vocabulary. High precision: guarantees "Java" or "Python" are found
/// even when the heuristic strategies miss them.
struct DictionaryLookup {
    automaton: AhoCorasick,
    terms: Vec<String>,
}

impl DictionaryLookup {
    fn new() -> Self {
        let terms = vocab().tech_stack.clone();
        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            // Prefer "javascript" over "java" at the same start
            .match_kind(aho_corasick::MatchKind::LeftmostLongest)
            .build(&terms)
            .expect("dictionary automaton");
        Self { automaton, terms }
    }

    /// Word-boundary check on the edges of a match. Only applies on edges
    /// where the term itself ends in a word character, so "c++" and ".net"
    /// are bounded where it makes sense.
    fn is_whole_word(term: &str, text: &str, start: usize, end: usize) -> bool {
        let bytes = text.as_bytes();
        let word_byte = |b: u8| b.is_ascii_alphanumeric() || b == b'_';

        let first = term.as_bytes()[0];
        if word_byte(first) && start > 0 && word_byte(bytes[start - 1]) {
            return false;
        }
        let last = term.as_bytes()[term.len() - 1];
        if word_byte(last) && end < bytes.len() && word_byte(bytes[end]) {
            return false;
        }
        true
    }
}

impl CandidateStrategy for DictionaryLookup {
    fn name(&self) -> &'static str {
        "dictionary"
    }

    fn known_terms(&self) -> bool {
        true
    }

    fn candidates(&self, text: &str) -> Vec<String> {
        let mut out = Vec::new();

        for m in self.automaton.find_iter(text) {
            let term = &self.terms[m.pattern().as_usize()];
            if Self::is_whole_word(term, text, m.start(), m.end()) {
                out.push(term.clone());
            }
        }

        if GO_CONTEXT.is_match(text) {
            out.push("go".to_string());
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrase_chunks_split_on_function_words() {
        let chunks = PhraseChunks.candidates("strong knowledge of Python and distributed systems");
        assert!(chunks.contains(&"strong knowledge".to_string()));
        assert!(chunks.contains(&"Python".to_string()));
        assert!(chunks.contains(&"distributed systems".to_string()));
    }

    #[test]
    fn test_phrase_chunks_split_on_punctuation() {
        let chunks = PhraseChunks.candidates("Docker, Kubernetes, cloud infrastructure");
        assert!(chunks.contains(&"Docker".to_string()));
        assert!(chunks.contains(&"Kubernetes".to_string()));
        assert!(chunks.contains(&"cloud infrastructure".to_string()));
    }

    #[test]
    fn test_phrase_chunks_empty_input() {
        assert!(PhraseChunks.candidates("").is_empty());
    }

    #[test]
    fn test_entity_spans_capitalized_runs() {
        let spans = EntitySpans.candidates("We deploy Spring Boot services on Power BI dashboards");
        assert!(spans.contains(&"Spring Boot".to_string()));
        assert!(spans.contains(&"Power BI".to_string()));
    }

    #[test]
    fn test_entity_spans_skip_capitalized_function_words() {
        let spans = EntitySpans.candidates("The team ships weekly");
        assert!(!spans.iter().any(|s| s.contains("The")));
    }

    #[test]
    fn test_entity_spans_single_token_must_be_product_shaped() {
        let spans = EntitySpans.candidates("Strong focus on PostgreSQL and S3");
        assert!(spans.contains(&"PostgreSQL".to_string()));
        assert!(spans.contains(&"S3".to_string()));
        // Sentence-case words alone are not entities
        assert!(!spans.contains(&"Strong".to_string()));
    }

    #[test]
    fn test_tech_patterns() {
        let found = TechPatterns::new().candidates("Node.js and C++ with AWS, also C# apps");
        assert!(found.contains(&"Node.js".to_string()));
        assert!(found.contains(&"C++".to_string()));
        assert!(found.contains(&"AWS".to_string()));
        assert!(found.contains(&"C#".to_string()));
    }

    #[test]
    fn test_dictionary_whole_word_only() {
        let found = DictionaryLookup::new().candidates("javascript expressions");
        assert!(found.contains(&"javascript".to_string()));
        // "java" must not fire inside "javascript", "express" not inside
        // "expressions"
        assert!(!found.contains(&"java".to_string()));
        assert!(!found.contains(&"express".to_string()));
    }

    #[test]
    fn test_dictionary_case_insensitive() {
        let found = DictionaryLookup::new().candidates("PYTHON and PostgreSQL");
        assert!(found.contains(&"python".to_string()));
        assert!(found.contains(&"postgresql".to_string()));
    }

    #[test]
    fn test_go_verb_not_admitted() {
        let found = DictionaryLookup::new().candidates("go to the store and go home");
        assert!(!found.contains(&"go".to_string()));
    }

    #[test]
    fn test_go_language_contexts() {
        for text in [
            "experience with Go, Python",
            "written in Go",
            "C++/Go services",
            "Go, Rust, and Zig",
        ] {
            let found = DictionaryLookup::new().candidates(text);
            assert!(found.contains(&"go".to_string()), "missed Go in: {}", text);
        }
    }

    #[test]
    fn test_generator_unions_strategies() {
        let generator = CandidateGenerator::new();
        let candidates = generator.generate("Strong knowledge of Python and AWS.");
        // Dictionary and patterns may both contribute; duplicates allowed
        assert!(candidates.iter().any(|c| c.text.eq_ignore_ascii_case("python")));
        assert!(candidates.iter().any(|c| c.text.eq_ignore_ascii_case("aws")));
    }

    #[test]
    fn test_dictionary_marks_known_terms() {
        let generator = CandidateGenerator::new();
        let candidates = generator.generate("experience with Go, Python");
        assert!(candidates
            .iter()
            .any(|c| c.text == "go" && c.known_term));
    }
}
