use serde::{Deserialize, Serialize};

/// Highest score any career can carry, before or after adjustment.
pub const MAX_MATCH_SCORE: u32 = 100;

/// A single career descriptor. Catalog seeds hold the base score; copies
/// produced by the scorer hold the adjusted score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerEntry {
    pub title: String,
    pub category: String,
    pub match_score: u32,
    pub description: String,
    pub why_suitable: String,
    /// Ordered; the roadmap keeps this order when picking skills to learn.
    pub required_skills: Vec<String>,
    pub education_required: String,
    pub salary_range: String,
    pub job_outlook: String,
    pub career_path: String,
}

/// Coarse label shown next to a match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchLabel {
    High,
    Good,
    Fair,
}

impl MatchLabel {
    pub fn for_score(score: u32) -> Self {
        match score {
            s if s >= 80 => MatchLabel::High,
            s if s >= 60 => MatchLabel::Good,
            _ => MatchLabel::Fair,
        }
    }
}
