//! Placeholder for a generative insight backend.
//!
//! No backend is wired in: every call reports `Unavailable` so the resolver
//! falls through to `FallbackInsights`. The reason says whether credentials
//! were configured at all.

use async_trait::async_trait;

use crate::catalog::Catalog;
use crate::insights::market::MarketInsights;
use crate::insights::{Insight, InsightProvider};
use crate::matching::gap::GapNarrative;
use crate::matching::roadmap::{Intensity, Roadmap, Timeframe};
use crate::models::career::CareerEntry;
use crate::models::profile::Profile;
use crate::profile::analysis::ProfileAnalysis;

pub struct RemoteInsights {
    api_key: Option<String>,
}

impl RemoteInsights {
    pub fn new(api_key: Option<String>) -> Self {
        Self { api_key }
    }

    fn unavailable<T>(&self) -> Insight<T> {
        match self.api_key {
            None => Insight::unavailable("GEMINI_API_KEY is not configured"),
            Some(_) => Insight::unavailable("remote insight backend is not connected"),
        }
    }
}

#[async_trait]
impl InsightProvider for RemoteInsights {
    fn backend(&self) -> &'static str {
        "remote"
    }

    async fn profile_analysis(&self, _profile: &Profile) -> Insight<ProfileAnalysis> {
        self.unavailable()
    }

    async fn career_suggestions(
        &self,
        _profile: &Profile,
        _catalog: &Catalog,
    ) -> Insight<Vec<CareerEntry>> {
        self.unavailable()
    }

    async fn gap_narrative(
        &self,
        _profile: &Profile,
        _career: &CareerEntry,
    ) -> Insight<GapNarrative> {
        self.unavailable()
    }

    async fn learning_resources(&self, _skill: &str, _profile: &Profile) -> Insight<String> {
        self.unavailable()
    }

    async fn market_insights(&self) -> Insight<MarketInsights> {
        self.unavailable()
    }

    async fn roadmap(
        &self,
        _profile: &Profile,
        _career: &CareerEntry,
        _timeframe: &Timeframe,
        _intensity: Intensity,
    ) -> Insight<Roadmap> {
        self.unavailable()
    }
}
