//! Templated profile read-out: strengths, readiness and next steps.

use serde::{Deserialize, Serialize};

use crate::models::profile::Profile;
use crate::profile::completeness::completion;

/// Completion above which a profile reads as career-ready.
const READINESS_THRESHOLD: f64 = 70.0;
/// Academic percentage above which performance is called out as a strength.
const STRONG_ACADEMICS: f64 = 75.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Readiness {
    High,
    Developing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileAnalysis {
    pub headline: String,
    pub strengths: Vec<String>,
    pub readiness: Readiness,
    pub recommendations: Vec<String>,
    pub next_steps: Vec<String>,
}

const NEXT_STEPS: &[&str] = &[
    "Explore career recommendations based on your profile",
    "Analyze skills gaps for target careers",
    "Create a learning roadmap for skill development",
];

pub fn analyze_profile(profile: &Profile) -> ProfileAnalysis {
    let mut strengths = Vec::new();
    if !profile.technical_skills.is_empty() {
        let top: Vec<&str> = profile
            .technical_skills
            .iter()
            .take(3)
            .map(String::as_str)
            .collect();
        strengths.push(format!(
            "Strong technical foundation with skills in {}",
            top.join(", ")
        ));
    }
    if profile.academic_score().is_some_and(|s| s > STRONG_ACADEMICS) {
        strengths.push("Excellent academic performance".to_string());
    }
    if !profile.interests.is_empty() {
        let top: Vec<&str> = profile.interests.iter().take(2).map(String::as_str).collect();
        strengths.push(format!("Clear interests in {}", top.join(", ")));
    }
    if strengths.is_empty() {
        strengths.push("Complete your profile to see personalized strengths".to_string());
    }

    let mut recommendations = Vec::new();
    if profile.technical_skills.is_empty() {
        recommendations
            .push("Consider developing technical skills relevant to your field".to_string());
    }
    if profile
        .career_goals
        .as_deref()
        .map_or(true, |g| g.trim().is_empty())
    {
        recommendations.push("Define clearer career goals and aspirations".to_string());
    }
    if recommendations.is_empty() {
        recommendations
            .push("Continue building your skills and exploring career options".to_string());
    }

    let readiness = if completion(profile) > READINESS_THRESHOLD {
        Readiness::High
    } else {
        Readiness::Developing
    };

    let name = profile
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or("Student");

    ProfileAnalysis {
        headline: format!("Profile Analysis for {name}"),
        strengths,
        readiness,
        recommendations,
        next_steps: NEXT_STEPS.iter().map(|s| s.to_string()).collect(),
    }
}
