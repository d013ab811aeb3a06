//! Skills gap — what the user already has, what they still need, and what
//! they bring beyond the career's requirements.
//!
//! Comparison here is exact (case-sensitive), unlike the scorer.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::career::CareerEntry;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillsGap {
    pub matched: BTreeSet<String>,
    pub missing: BTreeSet<String>,
    pub extra: BTreeSet<String>,
    /// |matched| / |required| × 100, or 0 when nothing is required.
    pub match_percentage: f64,
}

/// Free-text explanation of a gap, as shown under the numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapNarrative {
    pub gap_analysis: String,
    pub recommendations: String,
}

/// Stored result of the last gap analysis request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsAnalysis {
    pub career_title: String,
    pub current_skills: Vec<String>,
    pub required_skills: Vec<String>,
    pub gap: SkillsGap,
    pub narrative: GapNarrative,
    pub generated_at: DateTime<Utc>,
}

pub fn diff(current_skills: &[String], required_skills: &[String]) -> SkillsGap {
    let current: BTreeSet<String> = current_skills.iter().cloned().collect();
    let required: BTreeSet<String> = required_skills.iter().cloned().collect();

    let matched: BTreeSet<String> = current.intersection(&required).cloned().collect();
    let missing: BTreeSet<String> = required.difference(&current).cloned().collect();
    let extra: BTreeSet<String> = current.difference(&required).cloned().collect();

    let match_percentage = if required.is_empty() {
        0.0
    } else {
        matched.len() as f64 / required.len() as f64 * 100.0
    };

    SkillsGap {
        matched,
        missing,
        extra,
        match_percentage,
    }
}

const IMMEDIATE_ACTIONS: &str = "\
Immediate Actions:
1. Enroll in online courses for your top 2-3 missing skills
2. Start working on practical projects to build your portfolio
3. Connect with professionals in this field for mentorship
4. Join relevant communities and forums
5. Consider internships or entry-level positions to gain experience";

/// Templated narrative for a gap. Counts refer to distinct skills.
pub fn gap_narrative(current_skills: &[String], career: &CareerEntry) -> GapNarrative {
    let gap = diff(current_skills, &career.required_skills);
    let required = gap.matched.len() + gap.missing.len();

    let gap_analysis = format!(
        "Based on your profile and the selected career path, here's your skills analysis for {title}:\n\
         \n\
         Strengths:\n\
         You already have {have} out of {required} required skills.\n\
         \n\
         Areas for Development:\n\
         You need to develop {missing} additional skills to be fully prepared for this career.\n\
         \n\
         Recommendation:\n\
         Focus on building the missing skills through online courses, practical projects, and hands-on experience.",
        title = career.title,
        have = gap.matched.len(),
        missing = gap.missing.len(),
    );

    GapNarrative {
        gap_analysis,
        recommendations: IMMEDIATE_ACTIONS.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_partial_match() {
        let gap = diff(
            &strings(&["Programming"]),
            &strings(&["Programming", "Statistics", "Data Analysis"]),
        );
        assert_eq!(gap.matched, set(&["Programming"]));
        assert_eq!(gap.missing, set(&["Statistics", "Data Analysis"]));
        assert!(gap.extra.is_empty());
        assert!((gap.match_percentage - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(gap.match_percentage.round(), 33.0);
    }

    #[test]
    fn test_empty_required_is_zero_percent() {
        let gap = diff(&strings(&["Python", "SQL"]), &[]);
        assert_eq!(gap.match_percentage, 0.0);
        assert!(gap.matched.is_empty());
        assert!(gap.missing.is_empty());
        assert_eq!(gap.extra, set(&["Python", "SQL"]));
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        let gap = diff(&strings(&["python"]), &strings(&["Python"]));
        assert!(gap.matched.is_empty());
        assert_eq!(gap.missing, set(&["Python"]));
        assert_eq!(gap.extra, set(&["python"]));
    }

    #[test]
    fn test_partition_invariants() {
        let current = strings(&["A", "B", "C", "C"]);
        let required = strings(&["B", "C", "D", "E"]);
        let gap = diff(&current, &required);

        let required_set: BTreeSet<String> = required.iter().cloned().collect();
        let current_set: BTreeSet<String> = current.iter().cloned().collect();

        let matched_or_missing: BTreeSet<String> =
            gap.matched.union(&gap.missing).cloned().collect();
        let matched_or_extra: BTreeSet<String> = gap.matched.union(&gap.extra).cloned().collect();

        assert_eq!(matched_or_missing, required_set);
        assert_eq!(matched_or_extra, current_set);
        assert!(gap.matched.is_disjoint(&gap.missing));
        assert!(gap.matched.is_disjoint(&gap.extra));
        assert!(gap.missing.is_disjoint(&gap.extra));
        assert_eq!(gap.match_percentage, 50.0);
    }

    #[test]
    fn test_narrative_counts() {
        let career = Catalog::builtin().entries()[0].clone();
        let narrative = gap_narrative(&strings(&["Programming", "Cooking"]), &career);
        assert!(narrative
            .gap_analysis
            .contains("You already have 1 out of 4 required skills."));
        assert!(narrative
            .gap_analysis
            .contains("You need to develop 3 additional skills"));
        assert!(narrative.gap_analysis.contains("Software Engineer"));
        assert!(narrative.recommendations.starts_with("Immediate Actions:"));
    }
}
