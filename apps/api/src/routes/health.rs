use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and insight backend.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "career-advisor",
        "insights": {
            "primary": state.insights.primary_backend(),
            "api_key_configured": state.config.gemini_api_key.is_some(),
        }
    }))
}
