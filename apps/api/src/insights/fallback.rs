//! Deterministic insight provider built from the local scorers and templates.

use async_trait::async_trait;

use crate::catalog::Catalog;
use crate::insights::market::{sample_market_insights, MarketInsights};
use crate::insights::{Insight, InsightProvider};
use crate::matching::gap::{gap_narrative, GapNarrative};
use crate::matching::roadmap::{build_roadmap, Intensity, Roadmap, Timeframe};
use crate::matching::scorer::score;
use crate::models::career::CareerEntry;
use crate::models::profile::Profile;
use crate::profile::analysis::{analyze_profile, ProfileAnalysis};

/// Always answers; never reports `Unavailable`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackInsights;

impl FallbackInsights {
    pub fn analyze_profile(&self, profile: &Profile) -> ProfileAnalysis {
        analyze_profile(profile)
    }

    pub fn suggest_careers(&self, profile: &Profile, catalog: &Catalog) -> Vec<CareerEntry> {
        score(profile, catalog)
    }

    pub fn narrate_gap(&self, profile: &Profile, career: &CareerEntry) -> GapNarrative {
        gap_narrative(&profile.current_skills, career)
    }

    pub fn resources_for(&self, skill: &str) -> String {
        learning_resources_text(skill)
    }

    pub fn plan_roadmap(
        &self,
        profile: &Profile,
        career: &CareerEntry,
        timeframe: &Timeframe,
        intensity: Intensity,
    ) -> Roadmap {
        build_roadmap(profile, career, timeframe.clone(), intensity)
    }
}

#[async_trait]
impl InsightProvider for FallbackInsights {
    fn backend(&self) -> &'static str {
        "fallback"
    }

    async fn profile_analysis(&self, profile: &Profile) -> Insight<ProfileAnalysis> {
        Insight::Ready(self.analyze_profile(profile))
    }

    async fn career_suggestions(
        &self,
        profile: &Profile,
        catalog: &Catalog,
    ) -> Insight<Vec<CareerEntry>> {
        Insight::Ready(self.suggest_careers(profile, catalog))
    }

    async fn gap_narrative(
        &self,
        profile: &Profile,
        career: &CareerEntry,
    ) -> Insight<GapNarrative> {
        Insight::Ready(self.narrate_gap(profile, career))
    }

    async fn learning_resources(&self, skill: &str, _profile: &Profile) -> Insight<String> {
        Insight::Ready(self.resources_for(skill))
    }

    async fn market_insights(&self) -> Insight<MarketInsights> {
        Insight::Ready(sample_market_insights())
    }

    async fn roadmap(
        &self,
        profile: &Profile,
        career: &CareerEntry,
        timeframe: &Timeframe,
        intensity: Intensity,
    ) -> Insight<Roadmap> {
        Insight::Ready(self.plan_roadmap(profile, career, timeframe, intensity))
    }
}

fn learning_resources_text(skill: &str) -> String {
    format!(
        "Learning Resources for {skill}:\n\
         \n\
         Online Courses:\n\
         - Coursera - Search for \"{skill}\" courses\n\
         - Udemy - Practical {skill} tutorials\n\
         - edX - University-level {skill} courses\n\
         \n\
         Free Resources:\n\
         - YouTube tutorials on {skill}\n\
         - GitHub repositories and projects\n\
         - Official documentation and guides\n\
         \n\
         Practice Platforms:\n\
         - HackerRank, LeetCode (for programming skills)\n\
         - Kaggle (for data science skills)\n\
         - Behance, Dribbble (for design skills)\n\
         \n\
         Estimated Timeline: 3-6 months with consistent practice"
    )
}
