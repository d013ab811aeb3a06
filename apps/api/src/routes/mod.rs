pub mod dashboard;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::insights::handlers as insight_handlers;
use crate::matching::handlers as matching_handlers;
use crate::profile::handlers as profile_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/dashboard", get(dashboard::handle_dashboard))
        // Profile intake
        .route(
            "/api/v1/profile",
            get(profile_handlers::handle_get_profile)
                .put(profile_handlers::handle_replace_profile)
                .patch(profile_handlers::handle_update_profile),
        )
        .route(
            "/api/v1/profile/submit",
            post(profile_handlers::handle_submit_profile),
        )
        // Matching
        .route(
            "/api/v1/recommendations",
            get(matching_handlers::handle_list_recommendations),
        )
        .route(
            "/api/v1/recommendations/regenerate",
            post(matching_handlers::handle_regenerate_recommendations),
        )
        .route(
            "/api/v1/skills-gap",
            get(matching_handlers::handle_get_skills_gap)
                .post(matching_handlers::handle_analyze_skills_gap),
        )
        .route(
            "/api/v1/roadmap",
            get(matching_handlers::handle_get_roadmap)
                .post(matching_handlers::handle_generate_roadmap),
        )
        // Insights
        .route(
            "/api/v1/skills/:skill/resources",
            get(insight_handlers::handle_learning_resources),
        )
        .route(
            "/api/v1/market-insights",
            get(insight_handlers::handle_market_insights),
        )
        .with_state(state)
}
