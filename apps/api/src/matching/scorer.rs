//! Career scoring — ranks catalog careers against a profile.
//!
//! Algorithm, per catalog entry:
//! 1. +5 for every required skill that also appears in the profile's
//!    technical skills (case-insensitive, each distinct skill counted once)
//! 2. +10 if the entry's category matches any profile interest
//!    (case-insensitive)
//! 3. clamp to 100
//!
//! Entries are then sorted by adjusted score, highest first, keeping catalog
//! order on ties, and the top `MAX_RECOMMENDATIONS` are returned.

use std::collections::HashSet;

use tracing::debug;

use crate::catalog::Catalog;
use crate::models::career::{CareerEntry, MAX_MATCH_SCORE};
use crate::models::profile::Profile;

pub const MAX_RECOMMENDATIONS: usize = 6;
pub const SKILL_OVERLAP_BONUS: u32 = 5;
pub const INTEREST_BONUS: u32 = 10;
/// Minimum score applied by the listing filter when none is requested.
pub const DEFAULT_MIN_SCORE: u32 = 50;

/// Returns adjusted copies of the best-matching catalog entries.
pub fn score(profile: &Profile, catalog: &Catalog) -> Vec<CareerEntry> {
    let technical = lowercase_set(&profile.technical_skills);
    let interests = lowercase_set(&profile.interests);

    let mut ranked: Vec<CareerEntry> = catalog
        .entries()
        .iter()
        .map(|seed| {
            let mut career = seed.clone();
            career.match_score = adjusted_score(seed, &technical, &interests);
            debug!(
                "Scored {}: base={} adjusted={}",
                career.title, seed.match_score, career.match_score
            );
            career
        })
        .collect();

    // sort_by is stable, so equal scores keep catalog order
    ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    ranked.truncate(MAX_RECOMMENDATIONS);
    ranked
}

fn adjusted_score(
    seed: &CareerEntry,
    technical: &HashSet<String>,
    interests: &HashSet<String>,
) -> u32 {
    let required = lowercase_set(&seed.required_skills);
    let overlap = required.intersection(technical).count() as u32;

    let interest_bonus = if interests.contains(&seed.category.to_lowercase()) {
        INTEREST_BONUS
    } else {
        0
    };

    (seed.match_score + overlap * SKILL_OVERLAP_BONUS + interest_bonus).min(MAX_MATCH_SCORE)
}

fn lowercase_set(items: &[String]) -> HashSet<String> {
    items.iter().map(|s| s.to_lowercase()).collect()
}

/// Listing filters applied on top of a stored recommendation list.
#[derive(Debug, Clone, Default)]
pub struct RecommendationFilter {
    /// Keep only these categories (exact match). Empty keeps all.
    pub categories: Vec<String>,
    /// Keep only entries scoring at least this much; `DEFAULT_MIN_SCORE` if unset.
    pub min_score: Option<u32>,
}

impl RecommendationFilter {
    pub fn apply<'a>(&self, careers: &'a [CareerEntry]) -> Vec<&'a CareerEntry> {
        let min_score = self.min_score.unwrap_or(DEFAULT_MIN_SCORE);
        careers
            .iter()
            .filter(|c| self.categories.is_empty() || self.categories.contains(&c.category))
            .filter(|c| c.match_score >= min_score)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn titles(careers: &[CareerEntry]) -> Vec<&str> {
        careers.iter().map(|c| c.title.as_str()).collect()
    }

    #[test]
    fn test_empty_profile_keeps_base_scores() {
        let catalog = Catalog::builtin();
        let ranked = score(&Profile::default(), &catalog);

        for career in &ranked {
            let seed = catalog
                .entries()
                .iter()
                .find(|s| s.title == career.title)
                .unwrap();
            assert_eq!(career.match_score, seed.match_score);
        }
        assert_eq!(
            titles(&ranked),
            vec![
                "Software Engineer",
                "Data Scientist",
                "UI/UX Designer",
                "Digital Marketing Specialist",
                "Business Analyst",
            ]
        );
    }

    #[test]
    fn test_length_is_min_of_six_and_catalog_size() {
        let catalog = Catalog::builtin();
        assert_eq!(score(&Profile::default(), &catalog).len(), 5);

        let mut entries = catalog.entries().to_vec();
        entries.extend(catalog.entries().iter().cloned());
        let doubled = Catalog::new(entries);
        assert_eq!(score(&Profile::default(), &doubled).len(), MAX_RECOMMENDATIONS);

        assert!(score(&Profile::default(), &Catalog::new(vec![])).is_empty());
    }

    #[test]
    fn test_bonuses_reshuffle_ranking() {
        let profile = Profile {
            technical_skills: strings(&["Programming", "python"]),
            interests: strings(&["Technology"]),
            ..Default::default()
        };
        let ranked = score(&profile, &Catalog::builtin());

        assert_eq!(ranked[0].title, "Software Engineer");
        assert_eq!(ranked[0].match_score, 100);
        assert_eq!(ranked[1].title, "Data Scientist");
        assert_eq!(ranked[1].match_score, 95);
        assert!(ranked.iter().all(|c| c.match_score <= 100));
    }

    #[test]
    fn test_interest_bonus_lifts_lower_base() {
        let profile = Profile {
            interests: strings(&["business & management"]),
            technical_skills: strings(&["Data Analysis", "Communication"]),
            ..Default::default()
        };
        let ranked = score(&profile, &Catalog::builtin());
        // 70 + 2*5 + 10 = 90
        assert_eq!(ranked[0].title, "Business Analyst");
        assert_eq!(ranked[0].match_score, 90);
    }

    #[test]
    fn test_duplicate_skills_count_once() {
        let profile = Profile {
            technical_skills: strings(&["Python", "PYTHON", "python"]),
            ..Default::default()
        };
        let ranked = score(&profile, &Catalog::builtin());
        let ds = ranked.iter().find(|c| c.title == "Data Scientist").unwrap();
        assert_eq!(ds.match_score, 85);
    }

    #[test]
    fn test_scores_clamped_to_hundred() {
        let mut seed = Catalog::builtin().entries()[0].clone();
        seed.match_score = 98;
        let profile = Profile {
            technical_skills: seed.required_skills.clone(),
            interests: vec![seed.category.clone()],
            ..Default::default()
        };
        let ranked = score(&profile, &Catalog::new(vec![seed]));
        assert_eq!(ranked[0].match_score, 100);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let base = Catalog::builtin().entries()[0].clone();
        let entries: Vec<CareerEntry> = ["First", "Second", "Third"]
            .iter()
            .map(|t| CareerEntry {
                title: t.to_string(),
                match_score: 50,
                ..base.clone()
            })
            .collect();
        let ranked = score(&Profile::default(), &Catalog::new(entries));
        assert_eq!(titles(&ranked), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_output_sorted_non_increasing() {
        let profile = Profile {
            technical_skills: strings(&["Prototyping", "SEO/SEM", "Statistics"]),
            interests: strings(&["Creative & Media", "Sales & Marketing"]),
            ..Default::default()
        };
        let ranked = score(&profile, &Catalog::builtin());
        assert!(ranked
            .windows(2)
            .all(|w| w[0].match_score >= w[1].match_score));
    }

    #[test]
    fn test_catalog_is_not_mutated() {
        let catalog = Catalog::builtin();
        let profile = Profile {
            interests: strings(&["Technology"]),
            ..Default::default()
        };
        let _ = score(&profile, &catalog);
        assert_eq!(catalog.entries()[0].match_score, 85);
    }

    #[test]
    fn test_filter_by_category_and_min_score() {
        let ranked = score(&Profile::default(), &Catalog::builtin());

        let filter = RecommendationFilter {
            categories: strings(&["Technology"]),
            min_score: Some(82),
        };
        let kept = filter.apply(&ranked);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].title, "Software Engineer");

        let everything = RecommendationFilter::default().apply(&ranked);
        assert_eq!(everything.len(), ranked.len());
    }

    #[test]
    fn test_filter_defaults_to_minimum_of_fifty() {
        let base = Catalog::builtin().entries()[0].clone();
        let careers: Vec<CareerEntry> = [("Low", 49), ("Edge", 50), ("High", 90)]
            .iter()
            .map(|(title, score)| CareerEntry {
                title: title.to_string(),
                match_score: *score,
                ..base.clone()
            })
            .collect();

        let kept: Vec<&str> = RecommendationFilter::default()
            .apply(&careers)
            .iter()
            .map(|c| c.title.as_str())
            .collect();
        assert_eq!(kept, vec!["Edge", "High"]);

        let explicit_zero = RecommendationFilter {
            min_score: Some(0),
            ..Default::default()
        };
        assert_eq!(explicit_zero.apply(&careers).len(), 3);
    }
}
