use serde::{Deserialize, Serialize};

use crate::models::profile::{Profile, LOCATION_SENTINEL};

/// Below this completion the recommendations listing is refused.
pub const MIN_COMPLETION_FOR_RECOMMENDATIONS: f64 = 30.0;

/// Below this completion the dashboard nudges the user back to the form.
pub const PROFILE_NUDGE_THRESHOLD: f64 = 50.0;

type Presence = fn(&Profile) -> bool;

/// The designated fields and the rule that decides whether each is filled in.
const DESIGNATED_FIELDS: &[(&str, Presence)] = &[
    ("name", |p| filled(&p.name)),
    ("age", |p| p.age.is_some_and(|a| a > 0)),
    ("email", |p| filled(&p.email)),
    ("location", |p| {
        p.location.as_deref().is_some_and(|l| l != LOCATION_SENTINEL)
    }),
    ("languages", |p| !p.languages.is_empty()),
    ("education_level", |p| p.education_level.is_some()),
    ("stream", |p| p.stream.is_some()),
    ("institution", |p| filled(&p.institution)),
    ("academic_performance", |p| {
        p.academic_score().is_some_and(|s| s > 0.0)
    }),
    ("subjects", |p| !p.subjects.is_empty()),
    ("current_skills", |p| !p.current_skills.is_empty()),
    ("technical_skills", |p| !p.technical_skills.is_empty()),
    ("interests", |p| !p.interests.is_empty()),
    ("personality_traits", |p| !p.personality_traits.is_empty()),
    ("work_environment", |p| !p.work_environment.is_empty()),
    ("salary_expectations", |p| p.salary_expectations.is_some()),
    ("job_type_preference", |p| !p.job_type_preference.is_empty()),
    ("career_goals", |p| filled(&p.career_goals)),
];

fn filled(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.trim().is_empty())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionReport {
    pub percentage: f64,
    pub completed_fields: usize,
    pub total_fields: usize,
    pub missing_fields: Vec<String>,
}

/// Share of designated fields that are populated, as a percentage in [0, 100].
pub fn completion(profile: &Profile) -> f64 {
    let completed = DESIGNATED_FIELDS
        .iter()
        .filter(|(_, present)| present(profile))
        .count();
    completed as f64 / DESIGNATED_FIELDS.len() as f64 * 100.0
}

pub fn completion_report(profile: &Profile) -> CompletionReport {
    let missing_fields: Vec<String> = DESIGNATED_FIELDS
        .iter()
        .filter(|(_, present)| !present(profile))
        .map(|(field, _)| field.to_string())
        .collect();
    let total_fields = DESIGNATED_FIELDS.len();

    CompletionReport {
        percentage: completion(profile),
        completed_fields: total_fields - missing_fields.len(),
        total_fields,
        missing_fields,
    }
}

#[cfg(test)]
pub(crate) fn full_profile() -> Profile {
    let one = |s: &str| vec![s.to_string()];
    Profile {
        name: Some("Asha Rao".to_string()),
        age: Some(19),
        email: Some("asha@example.com".to_string()),
        phone: None,
        location: Some("Karnataka".to_string()),
        languages: one("English"),
        education_level: Some("Undergraduate".to_string()),
        stream: Some("Science".to_string()),
        institution: Some("City College".to_string()),
        academic_performance: Some("82".to_string()),
        subjects: one("Mathematics"),
        current_skills: one("Programming"),
        technical_skills: one("Python"),
        interests: one("Technology"),
        personality_traits: one("Analytical"),
        work_environment: one("Remote"),
        salary_expectations: Some("6-10 LPA".to_string()),
        job_type_preference: one("Full-time"),
        location_preference: vec![],
        career_goals: Some("Build data products".to_string()),
    }
}
