// src/classify.rs

//! Title and location classification heuristics.
//!
//! Two pure predicates gate which postings are kept: an early-career
//! check on the title and a US-location check on the location string.
//! Both are substring/keyword heuristics, not a taxonomy or a geocoder.

use std::sync::OnceLock;

use regex::Regex;

/// Seniority keywords that exclude a title outright.
static SENIOR_RE: OnceLock<Regex> = OnceLock::new();

/// Keywords that positively identify an early-career title.
static EARLY_CAREER_RE: OnceLock<Regex> = OnceLock::new();

/// Generic individual-contributor role nouns. Titles carrying one of
/// these but no seniority keyword default to early-career.
const BASIC_ROLES: [&str; 5] = [
    "engineer",
    "developer",
    "analyst",
    "specialist",
    "coordinator",
];

/// US-indicative location tokens. Substring matched, case-insensitive.
/// Known-incomplete city list; unlisted US cities are excluded.
const USA_LOCATIONS: [&str; 12] = [
    "united states",
    "usa",
    "us",
    "remote",
    "new york",
    "san francisco",
    "seattle",
    "austin",
    "boston",
    "chicago",
    "los angeles",
    "atlanta",
];

fn senior_re() -> &'static Regex {
    SENIOR_RE.get_or_init(|| {
        Regex::new(
            r"(?i)\b(senior|sr\.|lead|staff|principal|manager|director|architect|vp|head of|chief)\b",
        )
        .expect("valid seniority regex")
    })
}

fn early_career_re() -> &'static Regex {
    EARLY_CAREER_RE.get_or_init(|| {
        Regex::new(
            r"(?i)\b(intern|internship|new grad|new graduate|associate|junior|entry level|entry-level|rotational|co-op|fellow|apprentice)\b",
        )
        .expect("valid early-career regex")
    })
}

/// Whether a job title looks like an early-career role.
///
/// Seniority keywords take priority over everything else; after that,
/// explicit early-career keywords and then the generic IC-noun default.
pub fn is_early_career(title: &str) -> bool {
    let t = title.to_lowercase();
    if senior_re().is_match(&t) {
        return false;
    }
    if early_career_re().is_match(&t) {
        return true;
    }
    BASIC_ROLES.iter().any(|role| t.contains(role))
}

/// Whether a location string looks US-based.
pub fn is_in_usa(location: &str) -> bool {
    let l = location.to_lowercase();
    USA_LOCATIONS.iter().any(|token| l.contains(token))
}

/// Combined gate applied by the platform adapters.
pub fn is_relevant(title: &str, location: &str) -> bool {
    is_early_career(title) && is_in_usa(location)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seniority_keywords_excluded() {
        assert!(!is_early_career("Senior Software Engineer"));
        assert!(!is_early_career("Staff Platform Engineer"));
        assert!(!is_early_career("Director of Engineering"));
        assert!(!is_early_career("Engineering Manager"));
        assert!(!is_early_career("Principal Architect"));
        assert!(!is_early_career("Head of Data"));
    }

    #[test]
    fn test_early_career_keywords_included() {
        assert!(is_early_career("Software Engineer Intern"));
        assert!(is_early_career("New Grad Backend Engineer"));
        assert!(is_early_career("Junior Data Analyst"));
        assert!(is_early_career("Entry Level QA Tester"));
        assert!(is_early_career("Rotational Program Member"));
    }

    #[test]
    fn test_seniority_wins_over_early_career() {
        assert!(!is_early_career("Senior Associate"));
        assert!(!is_early_career("Lead Intern Coordinator"));
    }

    #[test]
    fn test_generic_ic_titles_default_to_included() {
        assert!(is_early_career("Software Engineer"));
        assert!(is_early_career("Web Developer"));
        assert!(is_early_career("Business Analyst"));
    }

    #[test]
    fn test_unrecognized_titles_excluded() {
        assert!(!is_early_career("Chef de Cuisine"));
        assert!(!is_early_career("Accountant"));
    }

    #[test]
    fn test_usa_locations() {
        assert!(is_in_usa("San Francisco, CA, United States"));
        assert!(is_in_usa("Remote - US"));
        assert!(is_in_usa("Austin, TX, USA"));
        assert!(is_in_usa("New York City"));
    }

    #[test]
    fn test_non_usa_locations() {
        assert!(!is_in_usa("Toronto, Canada"));
        assert!(!is_in_usa("London, UK"));
        assert!(!is_in_usa(""));
    }

    #[test]
    fn test_combined_gate() {
        assert!(is_relevant("Software Engineer", "Seattle, WA"));
        assert!(!is_relevant("Senior Software Engineer", "Seattle, WA"));
        assert!(!is_relevant("Software Engineer", "Berlin, Germany"));
    }
}
