use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::insights::market::MarketInsights;
use crate::state::AppState;

#[derive(Serialize)]
pub struct LearningResourcesResponse {
    pub skill: String,
    pub resources: String,
    pub notices: Vec<String>,
}

#[derive(Serialize)]
pub struct MarketInsightsResponse {
    pub insights: MarketInsights,
    pub notices: Vec<String>,
}

/// GET /api/v1/skills/:skill/resources
pub async fn handle_learning_resources(
    State(state): State<AppState>,
    Path(skill): Path<String>,
) -> Result<Json<LearningResourcesResponse>, AppError> {
    let skill = skill.trim().to_string();
    if skill.is_empty() {
        return Err(AppError::Validation("skill cannot be empty".to_string()));
    }

    let profile = state.session.lock().await.profile.clone();
    let resolved = state.insights.learning_resources(&skill, &profile).await;

    Ok(Json(LearningResourcesResponse {
        skill,
        resources: resolved.value,
        notices: resolved.notice.into_iter().collect(),
    }))
}

/// GET /api/v1/market-insights
pub async fn handle_market_insights(State(state): State<AppState>) -> Json<MarketInsightsResponse> {
    let resolved = state.insights.market_insights().await;
    Json(MarketInsightsResponse {
        insights: resolved.value,
        notices: resolved.notice.into_iter().collect(),
    })
}
