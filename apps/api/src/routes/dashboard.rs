use axum::{extract::State, Json};
use serde::Serialize;

use crate::models::career::MatchLabel;
use crate::profile::completeness::{completion, PROFILE_NUDGE_THRESHOLD};
use crate::state::AppState;

const TOP_MATCHES: usize = 3;
const SKILLS_PREVIEW: usize = 5;

#[derive(Debug, Serialize)]
pub struct TopMatch {
    pub title: String,
    pub match_score: u32,
    pub match_label: MatchLabel,
    pub description: String,
    pub key_skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub completion: f64,
    pub needs_more_profile: bool,
    pub recommendation_count: usize,
    pub current_skill_count: usize,
    pub top_matches: Vec<TopMatch>,
    pub has_skills_analysis: bool,
    pub has_roadmap: bool,
}

/// GET /api/v1/dashboard
pub async fn handle_dashboard(State(state): State<AppState>) -> Json<DashboardResponse> {
    let session = state.session.lock().await;
    let completion = completion(&session.profile);

    let top_matches = session
        .recommendations
        .iter()
        .take(TOP_MATCHES)
        .map(|career| TopMatch {
            title: career.title.clone(),
            match_score: career.match_score,
            match_label: MatchLabel::for_score(career.match_score),
            description: career.description.clone(),
            key_skills: career
                .required_skills
                .iter()
                .take(SKILLS_PREVIEW)
                .cloned()
                .collect(),
        })
        .collect();

    Json(DashboardResponse {
        completion,
        needs_more_profile: completion < PROFILE_NUDGE_THRESHOLD,
        recommendation_count: session.recommendations.len(),
        current_skill_count: session.profile.current_skills.len(),
        top_matches,
        has_skills_analysis: session.skills_analysis.is_some(),
        has_roadmap: session.roadmap.is_some(),
    })
}
