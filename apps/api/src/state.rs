use std::sync::Arc;

use tokio::sync::Mutex;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::errors::AppError;
use crate::insights::InsightResolver;
use crate::matching::gap::SkillsAnalysis;
use crate::matching::roadmap::Roadmap;
use crate::models::career::CareerEntry;
use crate::models::profile::Profile;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<Catalog>,
    /// Primary insight backend with the deterministic fallback behind it.
    pub insights: Arc<InsightResolver>,
    /// The single in-memory session. Handlers copy what they need out of it,
    /// release the lock, compute, then store results back wholesale.
    pub session: Arc<Mutex<Session>>,
}

impl AppState {
    pub fn new(config: Config, catalog: Catalog, insights: InsightResolver) -> Self {
        Self {
            config,
            catalog: Arc::new(catalog),
            insights: Arc::new(insights),
            session: Arc::new(Mutex::new(Session::default())),
        }
    }
}

/// Everything the user has built up so far. Created empty at startup and
/// lives for the life of the process.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub profile: Profile,
    pub recommendations: Vec<CareerEntry>,
    pub skills_analysis: Option<SkillsAnalysis>,
    pub roadmap: Option<Roadmap>,
}

impl Session {
    /// Picks a recommendation by index. A missing or stale index falls back
    /// to the top recommendation.
    pub fn select_career(&self, index: Option<usize>) -> Result<CareerEntry, AppError> {
        if self.recommendations.is_empty() {
            return Err(AppError::Validation(
                "No career recommendations found. Generate recommendations first.".to_string(),
            ));
        }

        let requested = index.unwrap_or(0);
        let index = if requested < self.recommendations.len() {
            requested
        } else {
            tracing::debug!(
                "Career index {requested} out of range ({} recommendations); using 0",
                self.recommendations.len()
            );
            0
        };

        Ok(self.recommendations[index].clone())
    }

    /// Replaces the recommendation list. Analyses built from the old list
    /// are kept; they carry their own career title.
    pub fn replace_recommendations(&mut self, recommendations: Vec<CareerEntry>) {
        self.recommendations = recommendations;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::scorer::score;

    fn session_with_recommendations() -> Session {
        Session {
            recommendations: score(&Profile::default(), &Catalog::builtin()),
            ..Default::default()
        }
    }

    #[test]
    fn test_select_career_without_recommendations_is_rejected() {
        let err = Session::default().select_career(Some(0)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_select_career_valid_index() {
        let session = session_with_recommendations();
        let career = session.select_career(Some(1)).unwrap();
        assert_eq!(career.title, "Data Scientist");
    }

    #[test]
    fn test_select_career_stale_index_defaults_to_first() {
        let session = session_with_recommendations();
        let career = session.select_career(Some(42)).unwrap();
        assert_eq!(career.title, "Software Engineer");
        let career = session.select_career(None).unwrap();
        assert_eq!(career.title, "Software Engineer");
    }

    #[test]
    fn test_replace_recommendations_is_wholesale() {
        let mut session = session_with_recommendations();
        session.replace_recommendations(vec![]);
        assert!(session.recommendations.is_empty());
    }
}
