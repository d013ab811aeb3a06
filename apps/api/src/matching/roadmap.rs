//! Learning roadmap — splits the skills a career still needs into
//! time-boxed phases with fixed activities and milestones.

use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::career::CareerEntry;
use crate::models::profile::Profile;

/// Target timeframe picked by the user. Unrecognised labels are kept
/// verbatim and planned like the longest horizon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Timeframe {
    SixMonths,
    #[default]
    OneYear,
    TwoYears,
    ThreeYears,
    Other(String),
}

impl Timeframe {
    /// (phase count, duration label of each phase)
    pub fn plan(&self) -> (usize, &'static str) {
        match self {
            Timeframe::SixMonths => (3, "2 months"),
            Timeframe::OneYear => (4, "3 months"),
            Timeframe::TwoYears => (6, "4 months"),
            Timeframe::ThreeYears | Timeframe::Other(_) => (8, "4-5 months"),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Timeframe::SixMonths => "6 months",
            Timeframe::OneYear => "1 year",
            Timeframe::TwoYears => "2 years",
            Timeframe::ThreeYears => "3 years",
            Timeframe::Other(label) => label,
        }
    }
}

impl From<String> for Timeframe {
    fn from(label: String) -> Self {
        match label.as_str() {
            "6 months" => Timeframe::SixMonths,
            "1 year" => Timeframe::OneYear,
            "2 years" => Timeframe::TwoYears,
            "3 years" => Timeframe::ThreeYears,
            _ => Timeframe::Other(label),
        }
    }
}

impl From<Timeframe> for String {
    fn from(timeframe: Timeframe) -> Self {
        timeframe.label().to_string()
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Weekly study effort. Recorded on the roadmap; the templated plan does
/// not vary with it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Light,
    #[default]
    Moderate,
    Intensive,
}

impl Intensity {
    pub fn label(&self) -> &'static str {
        match self {
            Intensity::Light => "Light (5-10 hrs/week)",
            Intensity::Moderate => "Moderate (10-20 hrs/week)",
            Intensity::Intensive => "Intensive (20+ hrs/week)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub title: String,
    pub duration: String,
    pub objective: String,
    pub skills_to_learn: Vec<String>,
    pub activities: Vec<String>,
    pub milestones: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceGroup {
    pub category: String,
    pub resources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roadmap {
    pub career_title: String,
    pub timeframe: Timeframe,
    pub intensity: Intensity,
    pub overview: String,
    pub phases: Vec<Phase>,
    pub resources: Vec<ResourceGroup>,
    pub generated_at: DateTime<Utc>,
}

const FOUNDATION_TITLE: &str = "Foundation Building";
const FOUNDATION_OBJECTIVE: &str = "Build fundamental skills and knowledge base";
const ADVANCED_TITLE: &str = "Advanced Skills & Specialization";
const ADVANCED_OBJECTIVE: &str = "Master advanced concepts and specialize in your chosen area";
const DEVELOPMENT_OBJECTIVE: &str = "Develop intermediate skills and practical experience";

const ACTIVITIES: &[&str] = &[
    "Online courses and tutorials",
    "Hands-on projects",
    "Practice and application",
    "Community participation",
];

const MILESTONES_AFTER_FIRST: &[&str] = &[
    "Build 1-2 practical projects",
    "Join relevant communities",
    "Update portfolio/resume",
];

const RESOURCES: &[(&str, &[&str])] = &[
    (
        "Online Platforms",
        &[
            "Coursera - University courses and specializations",
            "Udemy - Practical skill-based courses",
            "YouTube - Free tutorials and walkthroughs",
            "freeCodeCamp - Programming and web development",
        ],
    ),
    (
        "Practice Platforms",
        &[
            "GitHub - Code repositories and projects",
            "Kaggle - Data science competitions",
            "HackerRank - Coding challenges",
            "LeetCode - Programming practice",
        ],
    ),
    (
        "Communities",
        &[
            "Reddit - Subject-specific communities",
            "Discord - Learning groups and study sessions",
            "LinkedIn - Professional networking",
            "Stack Overflow - Technical Q&A",
        ],
    ),
];

/// Builds a roadmap towards `career` for the given timeframe.
pub fn build_roadmap(
    profile: &Profile,
    career: &CareerEntry,
    timeframe: Timeframe,
    intensity: Intensity,
) -> Roadmap {
    let (phase_count, duration) = timeframe.plan();

    let current: HashSet<&str> = profile.current_skills.iter().map(String::as_str).collect();
    let skills_to_learn: Vec<&String> = career
        .required_skills
        .iter()
        .filter(|skill| !current.contains(skill.as_str()))
        .collect();

    let per_phase = (skills_to_learn.len() / phase_count).max(1);
    debug!(
        "Roadmap for {}: {} skills over {} phases ({} per phase)",
        career.title,
        skills_to_learn.len(),
        phase_count,
        per_phase
    );

    let phases = (0..phase_count)
        .map(|i| {
            let start = (i * per_phase).min(skills_to_learn.len());
            let end = ((i + 1) * per_phase).min(skills_to_learn.len());
            let phase_skills: Vec<String> =
                skills_to_learn[start..end].iter().map(|s| s.to_string()).collect();

            let (title, objective) = if i == 0 {
                (FOUNDATION_TITLE.to_string(), FOUNDATION_OBJECTIVE)
            } else if i == phase_count - 1 {
                (ADVANCED_TITLE.to_string(), ADVANCED_OBJECTIVE)
            } else {
                (format!("Skill Development Phase {i}"), DEVELOPMENT_OBJECTIVE)
            };

            let mut milestones = vec![format!("Complete {} skill modules", phase_skills.len())];
            milestones.extend(MILESTONES_AFTER_FIRST.iter().map(|m| m.to_string()));

            Phase {
                title,
                duration: duration.to_string(),
                objective: objective.to_string(),
                skills_to_learn: phase_skills,
                activities: ACTIVITIES.iter().map(|a| a.to_string()).collect(),
                milestones,
            }
        })
        .collect();

    Roadmap {
        career_title: career.title.clone(),
        overview: overview(&timeframe, &career.title, phase_count),
        timeframe,
        intensity,
        phases,
        resources: resources(),
        generated_at: Utc::now(),
    }
}

fn overview(timeframe: &Timeframe, title: &str, phase_count: usize) -> String {
    let title = if title.trim().is_empty() {
        "your target career"
    } else {
        title
    };
    format!(
        "This {timeframe} roadmap is designed to help you transition into {title}.\n\
         The plan is divided into {phase_count} phases, each focusing on specific skills and milestones.\n\
         \n\
         Key Focus Areas:\n\
         - Skill development through practical learning\n\
         - Building a strong portfolio\n\
         - Networking and community engagement\n\
         - Continuous practice and improvement"
    )
}

fn resources() -> Vec<ResourceGroup> {
    RESOURCES
        .iter()
        .map(|(category, items)| ResourceGroup {
            category: category.to_string(),
            resources: items.iter().map(|r| r.to_string()).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn career_with(skills: &[&str]) -> CareerEntry {
        CareerEntry {
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
            ..Catalog::builtin().entries()[0].clone()
        }
    }

    fn profile_with(current: &[&str]) -> Profile {
        Profile {
            current_skills: current.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_phase_count_follows_timeframe_table() {
        let career = career_with(&["A", "B"]);
        let cases = [
            ("6 months", 3, "2 months"),
            ("1 year", 4, "3 months"),
            ("2 years", 6, "4 months"),
            ("3 years", 8, "4-5 months"),
            ("someday", 8, "4-5 months"),
        ];
        for (label, count, duration) in cases {
            let roadmap = build_roadmap(
                &Profile::default(),
                &career,
                Timeframe::from(label.to_string()),
                Intensity::Moderate,
            );
            assert_eq!(roadmap.phases.len(), count, "{label}");
            assert!(roadmap.phases.iter().all(|p| p.duration == duration));
        }
    }

    #[test]
    fn test_unknown_timeframe_kept_verbatim() {
        let timeframe = Timeframe::from("18 months".to_string());
        assert_eq!(timeframe, Timeframe::Other("18 months".to_string()));
        let roadmap = build_roadmap(
            &Profile::default(),
            &career_with(&["A"]),
            timeframe,
            Intensity::Light,
        );
        assert!(roadmap.overview.starts_with("This 18 months roadmap"));
    }

    #[test]
    fn test_phase_titles() {
        let roadmap = build_roadmap(
            &Profile::default(),
            &career_with(&["A", "B", "C", "D"]),
            Timeframe::OneYear,
            Intensity::Moderate,
        );
        let titles: Vec<&str> = roadmap.phases.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Foundation Building",
                "Skill Development Phase 1",
                "Skill Development Phase 2",
                "Advanced Skills & Specialization",
            ]
        );
        assert_eq!(roadmap.phases[1].objective, DEVELOPMENT_OBJECTIVE);
    }

    #[test]
    fn test_known_skills_are_excluded_in_order() {
        let roadmap = build_roadmap(
            &profile_with(&["Programming"]),
            &career_with(&["Programming", "Statistics", "Data Analysis"]),
            Timeframe::SixMonths,
            Intensity::Moderate,
        );
        let assigned: Vec<&str> = roadmap
            .phases
            .iter()
            .flat_map(|p| p.skills_to_learn.iter().map(String::as_str))
            .collect();
        assert_eq!(assigned, vec!["Statistics", "Data Analysis"]);
        // one skill per phase, last phase runs dry
        assert_eq!(roadmap.phases[0].skills_to_learn, vec!["Statistics"]);
        assert_eq!(roadmap.phases[1].skills_to_learn, vec!["Data Analysis"]);
        assert!(roadmap.phases[2].skills_to_learn.is_empty());
        assert_eq!(roadmap.phases[2].milestones[0], "Complete 0 skill modules");
    }

    #[test]
    fn test_even_chunks() {
        let roadmap = build_roadmap(
            &Profile::default(),
            &career_with(&["A", "B", "C", "D", "E", "F"]),
            Timeframe::SixMonths,
            Intensity::Moderate,
        );
        let sizes: Vec<usize> = roadmap.phases.iter().map(|p| p.skills_to_learn.len()).collect();
        assert_eq!(sizes, vec![2, 2, 2]);
        assert_eq!(roadmap.phases[0].milestones[0], "Complete 2 skill modules");
    }

    #[test]
    fn test_remainder_skills_are_not_assigned() {
        // 5 skills over 3 phases: one per phase, the last two are dropped
        let roadmap = build_roadmap(
            &Profile::default(),
            &career_with(&["A", "B", "C", "D", "E"]),
            Timeframe::SixMonths,
            Intensity::Moderate,
        );
        let assigned: Vec<&str> = roadmap
            .phases
            .iter()
            .flat_map(|p| p.skills_to_learn.iter().map(String::as_str))
            .collect();
        assert_eq!(assigned, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_nothing_to_learn_gives_empty_phases() {
        let roadmap = build_roadmap(
            &profile_with(&["A", "B"]),
            &career_with(&["A", "B"]),
            Timeframe::TwoYears,
            Intensity::Intensive,
        );
        assert_eq!(roadmap.phases.len(), 6);
        assert!(roadmap.phases.iter().all(|p| p.skills_to_learn.is_empty()));
        assert_eq!(roadmap.intensity, Intensity::Intensive);
    }

    #[test]
    fn test_fixed_templates() {
        let roadmap = build_roadmap(
            &Profile::default(),
            &career_with(&["A"]),
            Timeframe::OneYear,
            Intensity::Moderate,
        );
        for phase in &roadmap.phases {
            assert_eq!(phase.activities.len(), 4);
            assert_eq!(phase.milestones.len(), 4);
            assert_eq!(phase.milestones[1], "Build 1-2 practical projects");
        }
        let categories: Vec<&str> = roadmap
            .resources
            .iter()
            .map(|g| g.category.as_str())
            .collect();
        assert_eq!(
            categories,
            vec!["Online Platforms", "Practice Platforms", "Communities"]
        );
        assert!(roadmap.resources.iter().all(|g| g.resources.len() == 4));
        assert!(roadmap
            .overview
            .contains("transition into Software Engineer"));
        assert!(roadmap.overview.contains("divided into 4 phases"));
    }

    #[test]
    fn test_timeframe_serde_uses_labels() {
        let json = serde_json::to_string(&Timeframe::TwoYears).unwrap();
        assert_eq!(json, r#""2 years""#);
        let parsed: Timeframe = serde_json::from_str(r#""6 months""#).unwrap();
        assert_eq!(parsed, Timeframe::SixMonths);
    }

    #[test]
    fn test_intensity_labels() {
        assert_eq!(Intensity::default(), Intensity::Moderate);
        assert_eq!(Intensity::Light.label(), "Light (5-10 hrs/week)");
        let parsed: Intensity = serde_json::from_str(r#""intensive""#).unwrap();
        assert_eq!(parsed, Intensity::Intensive);
    }
}
