//! Insight capability — every piece of narrative or generated guidance the
//! advisor shows goes through an `InsightProvider`.
//!
//! `FallbackInsights` is the deterministic implementation and always answers.
//! `RemoteInsights` stands in for a generative backend and currently always
//! reports `Unavailable`. `InsightResolver` asks the primary provider first
//! and substitutes the fallback answer, with a user-facing notice, whenever
//! the primary is unavailable. Nothing is retried.
//!
//! `AppState` holds an `Arc<InsightResolver>`; the primary is picked at startup.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::warn;

use crate::catalog::Catalog;
use crate::matching::gap::GapNarrative;
use crate::matching::roadmap::{Intensity, Roadmap, Timeframe};
use crate::models::career::CareerEntry;
use crate::models::profile::Profile;
use crate::profile::analysis::ProfileAnalysis;

pub mod fallback;
pub mod handlers;
pub mod market;
pub mod remote;

use fallback::FallbackInsights;
use market::MarketInsights;

/// Outcome of asking a provider for one insight.
#[derive(Debug, Clone, PartialEq)]
pub enum Insight<T> {
    Ready(T),
    Unavailable { reason: String },
}

impl<T> Insight<T> {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Insight::Unavailable {
            reason: reason.into(),
        }
    }
}

/// One method per insight type. Implement this to plug in another backend
/// without touching handlers.
#[async_trait]
pub trait InsightProvider: Send + Sync {
    /// Short backend name, reported alongside resolved insights.
    fn backend(&self) -> &'static str;

    async fn profile_analysis(&self, profile: &Profile) -> Insight<ProfileAnalysis>;

    async fn career_suggestions(
        &self,
        profile: &Profile,
        catalog: &Catalog,
    ) -> Insight<Vec<CareerEntry>>;

    async fn gap_narrative(&self, profile: &Profile, career: &CareerEntry)
        -> Insight<GapNarrative>;

    async fn learning_resources(&self, skill: &str, profile: &Profile) -> Insight<String>;

    async fn market_insights(&self) -> Insight<MarketInsights>;

    async fn roadmap(
        &self,
        profile: &Profile,
        career: &CareerEntry,
        timeframe: &Timeframe,
        intensity: Intensity,
    ) -> Insight<Roadmap>;
}

/// A settled insight plus the notice to show when the fallback answered.
#[derive(Debug, Clone, Serialize)]
pub struct Resolved<T> {
    pub value: T,
    pub source: &'static str,
    pub notice: Option<String>,
}

pub struct InsightResolver {
    primary: Arc<dyn InsightProvider>,
    fallback: FallbackInsights,
}

impl InsightResolver {
    pub fn new(primary: Arc<dyn InsightProvider>) -> Self {
        Self {
            primary,
            fallback: FallbackInsights,
        }
    }

    /// A resolver whose primary is the fallback itself; never emits notices.
    #[cfg(test)]
    pub fn fallback_only() -> Self {
        Self::new(Arc::new(FallbackInsights))
    }

    pub fn primary_backend(&self) -> &'static str {
        self.primary.backend()
    }

    fn settle<T>(&self, what: &str, insight: Insight<T>, fallback: impl FnOnce() -> T) -> Resolved<T> {
        match insight {
            Insight::Ready(value) => Resolved {
                value,
                source: self.primary.backend(),
                notice: None,
            },
            Insight::Unavailable { reason } => {
                warn!(
                    "{} unavailable from {} backend ({reason}); using fallback",
                    what,
                    self.primary.backend()
                );
                Resolved {
                    value: fallback(),
                    source: self.fallback.backend(),
                    notice: Some(format!(
                        "AI {what} is unavailable ({reason}). Showing built-in guidance instead."
                    )),
                }
            }
        }
    }

    pub async fn profile_analysis(&self, profile: &Profile) -> Resolved<ProfileAnalysis> {
        let insight = self.primary.profile_analysis(profile).await;
        self.settle("profile analysis", insight, || {
            self.fallback.analyze_profile(profile)
        })
    }

    pub async fn career_suggestions(
        &self,
        profile: &Profile,
        catalog: &Catalog,
    ) -> Resolved<Vec<CareerEntry>> {
        let insight = self.primary.career_suggestions(profile, catalog).await;
        self.settle("career recommendations", insight, || {
            self.fallback.suggest_careers(profile, catalog)
        })
    }

    pub async fn gap_narrative(
        &self,
        profile: &Profile,
        career: &CareerEntry,
    ) -> Resolved<GapNarrative> {
        let insight = self.primary.gap_narrative(profile, career).await;
        self.settle("skills gap analysis", insight, || {
            self.fallback.narrate_gap(profile, career)
        })
    }

    pub async fn learning_resources(&self, skill: &str, profile: &Profile) -> Resolved<String> {
        let insight = self.primary.learning_resources(skill, profile).await;
        self.settle("learning resources", insight, || {
            self.fallback.resources_for(skill)
        })
    }

    pub async fn market_insights(&self) -> Resolved<MarketInsights> {
        let insight = self.primary.market_insights().await;
        self.settle("market insights", insight, market::sample_market_insights)
    }

    pub async fn roadmap(
        &self,
        profile: &Profile,
        career: &CareerEntry,
        timeframe: &Timeframe,
        intensity: Intensity,
    ) -> Resolved<Roadmap> {
        let insight = self
            .primary
            .roadmap(profile, career, timeframe, intensity)
            .await;
        self.settle("learning roadmap", insight, || {
            self.fallback
                .plan_roadmap(profile, career, timeframe, intensity)
        })
    }
}
