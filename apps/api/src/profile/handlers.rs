use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::matching::handlers::regenerate;
use crate::models::career::CareerEntry;
use crate::models::profile::{Profile, ProfileUpdate};
use crate::profile::analysis::ProfileAnalysis;
use crate::profile::completeness::{completion_report, CompletionReport};
use crate::state::AppState;

#[derive(Serialize)]
pub struct ProfileResponse {
    pub profile: Profile,
    pub completion: CompletionReport,
}

#[derive(Serialize)]
pub struct SubmitResponse {
    pub analysis: ProfileAnalysis,
    pub completion: CompletionReport,
    pub recommendation_count: usize,
    pub top_match: Option<CareerEntry>,
    pub notices: Vec<String>,
}

impl ProfileResponse {
    fn from_profile(profile: Profile) -> Self {
        let completion = completion_report(&profile);
        Self {
            profile,
            completion,
        }
    }
}

/// GET /api/v1/profile
pub async fn handle_get_profile(State(state): State<AppState>) -> Json<ProfileResponse> {
    let profile = state.session.lock().await.profile.clone();
    Json(ProfileResponse::from_profile(profile))
}

/// PUT /api/v1/profile
pub async fn handle_replace_profile(
    State(state): State<AppState>,
    Json(profile): Json<Profile>,
) -> Result<Json<ProfileResponse>, AppError> {
    profile.validate().map_err(AppError::Validation)?;
    state.session.lock().await.profile = profile.clone();
    Ok(Json(ProfileResponse::from_profile(profile)))
}

/// PATCH /api/v1/profile
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<ProfileResponse>, AppError> {
    let mut session = state.session.lock().await;
    let mut profile = session.profile.clone();
    profile.apply(update);
    profile.validate().map_err(AppError::Validation)?;
    session.profile = profile.clone();
    Ok(Json(ProfileResponse::from_profile(profile)))
}

/// POST /api/v1/profile/submit
///
/// Reads the saved profile back as an analysis and regenerates the
/// recommendation list from it.
pub async fn handle_submit_profile(
    State(state): State<AppState>,
) -> Result<Json<SubmitResponse>, AppError> {
    let profile = state.session.lock().await.profile.clone();

    let analysis = state.insights.profile_analysis(&profile).await;
    let (recommendations, regenerate_notices) = regenerate(&state).await;
    let notices: Vec<String> = analysis
        .notice
        .into_iter()
        .chain(regenerate_notices)
        .collect();

    info!(
        "Profile submitted: {} recommendations, top match {:?}",
        recommendations.len(),
        recommendations.first().map(|c| c.title.as_str())
    );

    Ok(Json(SubmitResponse {
        analysis: analysis.value,
        completion: completion_report(&profile),
        recommendation_count: recommendations.len(),
        top_match: recommendations.into_iter().next(),
        notices,
    }))
}
