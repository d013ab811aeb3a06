//! Axum route handlers for recommendations, skills gap and roadmap.

use std::collections::BTreeSet;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::matching::gap::{diff, SkillsAnalysis};
use crate::matching::roadmap::{Intensity, Roadmap, Timeframe};
use crate::matching::scorer::RecommendationFilter;
use crate::models::career::{CareerEntry, MatchLabel};
use crate::profile::completeness::{completion, MIN_COMPLETION_FOR_RECOMMENDATIONS};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct RecommendationQuery {
    /// Comma-separated category names.
    pub category: Option<String>,
    pub min_score: Option<u32>,
}

impl RecommendationQuery {
    fn filter(&self) -> RecommendationFilter {
        let categories = self
            .category
            .as_deref()
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        RecommendationFilter {
            categories,
            min_score: self.min_score,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecommendationView {
    #[serde(flatten)]
    pub career: CareerEntry,
    pub match_label: MatchLabel,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    /// Size of the stored list before filtering.
    pub total: usize,
    /// Distinct categories across the stored list, for building filters.
    pub categories: Vec<String>,
    pub recommendations: Vec<RecommendationView>,
    pub notices: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SkillsGapRequest {
    pub career_index: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct SkillsGapResponse {
    pub analysis: SkillsAnalysis,
    pub notices: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RoadmapRequest {
    pub career_index: Option<usize>,
    pub timeframe: Timeframe,
    pub intensity: Intensity,
}

#[derive(Debug, Serialize)]
pub struct RoadmapResponse {
    pub roadmap: Roadmap,
    pub notices: Vec<String>,
}

/// GET /api/v1/recommendations
///
/// Returns the stored recommendations, generating them first if the list is
/// empty. Requires a minimally complete profile.
pub async fn handle_list_recommendations(
    State(state): State<AppState>,
    Query(query): Query<RecommendationQuery>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let (profile, stored) = {
        let session = state.session.lock().await;
        (session.profile.clone(), session.recommendations.clone())
    };
    ensure_complete_enough(completion(&profile))?;

    let (recommendations, notices) = if stored.is_empty() {
        regenerate(&state).await
    } else {
        (stored, Vec::new())
    };

    Ok(Json(build_listing(&recommendations, &query.filter(), notices)))
}

/// POST /api/v1/recommendations/regenerate
///
/// Discards the stored list and scores the profile again.
pub async fn handle_regenerate_recommendations(
    State(state): State<AppState>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let profile = state.session.lock().await.profile.clone();
    ensure_complete_enough(completion(&profile))?;

    let (recommendations, notices) = regenerate(&state).await;
    Ok(Json(build_listing(
        &recommendations,
        &RecommendationFilter::default(),
        notices,
    )))
}

/// POST /api/v1/skills-gap
///
/// Diffs the profile's current skills against the selected career and
/// stores the result, replacing any previous analysis.
pub async fn handle_analyze_skills_gap(
    State(state): State<AppState>,
    body: Result<Json<SkillsGapRequest>, JsonRejection>,
) -> Result<Json<SkillsGapResponse>, AppError> {
    let request = optional_body(body)?;

    let (profile, career) = {
        let session = state.session.lock().await;
        let career = session.select_career(request.career_index)?;
        (session.profile.clone(), career)
    };

    let gap = diff(&profile.current_skills, &career.required_skills);
    let narrative = state.insights.gap_narrative(&profile, &career).await;

    let analysis = SkillsAnalysis {
        career_title: career.title.clone(),
        current_skills: profile.current_skills.clone(),
        required_skills: career.required_skills.clone(),
        gap,
        narrative: narrative.value,
        generated_at: Utc::now(),
    };
    info!(
        "Skills gap for {}: {:.0}% matched, {} missing",
        analysis.career_title,
        analysis.gap.match_percentage,
        analysis.gap.missing.len()
    );

    state.session.lock().await.skills_analysis = Some(analysis.clone());

    Ok(Json(SkillsGapResponse {
        analysis,
        notices: narrative.notice.into_iter().collect(),
    }))
}

/// GET /api/v1/skills-gap
pub async fn handle_get_skills_gap(
    State(state): State<AppState>,
) -> Result<Json<SkillsAnalysis>, AppError> {
    state
        .session
        .lock()
        .await
        .skills_analysis
        .clone()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No skills gap analysis has been run yet".to_string()))
}

/// POST /api/v1/roadmap
///
/// Builds a phased learning plan towards the selected career and stores it,
/// replacing any previous roadmap.
pub async fn handle_generate_roadmap(
    State(state): State<AppState>,
    body: Result<Json<RoadmapRequest>, JsonRejection>,
) -> Result<Json<RoadmapResponse>, AppError> {
    let request = optional_body(body)?;

    let (profile, career) = {
        let session = state.session.lock().await;
        let career = session.select_career(request.career_index)?;
        (session.profile.clone(), career)
    };

    let resolved = state
        .insights
        .roadmap(&profile, &career, &request.timeframe, request.intensity)
        .await;
    info!(
        "Roadmap for {} over {} at {}: {} phases",
        career.title,
        request.timeframe,
        request.intensity.label(),
        resolved.value.phases.len()
    );

    state.session.lock().await.roadmap = Some(resolved.value.clone());

    Ok(Json(RoadmapResponse {
        roadmap: resolved.value,
        notices: resolved.notice.into_iter().collect(),
    }))
}

/// GET /api/v1/roadmap
pub async fn handle_get_roadmap(State(state): State<AppState>) -> Result<Json<Roadmap>, AppError> {
    state
        .session
        .lock()
        .await
        .roadmap
        .clone()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No learning roadmap has been generated yet".to_string()))
}

/// A request sent without a JSON body takes the defaults. A body that is
/// present but does not parse is rejected rather than ignored.
fn optional_body<T: Default>(body: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    match body {
        Ok(Json(request)) => Ok(request),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(rejection) => Err(AppError::Validation(format!(
            "Invalid request body: {}",
            rejection.body_text()
        ))),
    }
}

fn ensure_complete_enough(completion: f64) -> Result<(), AppError> {
    if completion < MIN_COMPLETION_FOR_RECOMMENDATIONS {
        return Err(AppError::Validation(format!(
            "Profile is {completion:.0}% complete; complete at least \
             {MIN_COMPLETION_FOR_RECOMMENDATIONS:.0}% to get recommendations"
        )));
    }
    Ok(())
}

/// Scores the current profile and stores the result. Returns the new list
/// and any fallback notices.
pub async fn regenerate(state: &AppState) -> (Vec<CareerEntry>, Vec<String>) {
    let profile = state.session.lock().await.profile.clone();
    let resolved = state
        .insights
        .career_suggestions(&profile, &state.catalog)
        .await;
    info!(
        "Generated {} recommendations via {}",
        resolved.value.len(),
        resolved.source
    );

    state
        .session
        .lock()
        .await
        .replace_recommendations(resolved.value.clone());

    (resolved.value, resolved.notice.into_iter().collect())
}

fn build_listing(
    recommendations: &[CareerEntry],
    filter: &RecommendationFilter,
    notices: Vec<String>,
) -> RecommendationsResponse {
    let categories: BTreeSet<String> = recommendations
        .iter()
        .map(|c| c.category.clone())
        .collect();

    RecommendationsResponse {
        total: recommendations.len(),
        categories: categories.into_iter().collect(),
        recommendations: filter
            .apply(recommendations)
            .into_iter()
            .map(|career| RecommendationView {
                match_label: MatchLabel::for_score(career.match_score),
                career: career.clone(),
            })
            .collect(),
        notices,
    }
}
