//! Career catalog — the read-only list of career seeds the scorer ranks.
//!
//! The built-in seed list is used unless `CATALOG_PATH` points at a JSON
//! array of `CareerEntry` objects.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::models::career::{CareerEntry, MAX_MATCH_SCORE};

#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CareerEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CareerEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|mut entry| {
                entry.match_score = entry.match_score.min(MAX_MATCH_SCORE);
                entry
            })
            .collect();
        Self { entries }
    }

    pub fn builtin() -> Self {
        Self::new(builtin_entries())
    }

    /// Loads a catalog from a JSON file containing an array of career entries.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
        let entries: Vec<CareerEntry> = serde_json::from_str(&raw)
            .with_context(|| format!("Catalog file {} is not a valid career list", path.display()))?;
        info!("Loaded {} careers from {}", entries.len(), path.display());
        Ok(Self::new(entries))
    }

    pub fn entries(&self) -> &[CareerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

struct Seed {
    title: &'static str,
    category: &'static str,
    match_score: u32,
    description: &'static str,
    why_suitable: &'static str,
    required_skills: &'static [&'static str],
    education_required: &'static str,
    salary_range: &'static str,
    job_outlook: &'static str,
    career_path: &'static str,
}

const SEEDS: &[Seed] = &[
    Seed {
        title: "Software Engineer",
        category: "Technology",
        match_score: 85,
        description: "Design, develop, and maintain software applications and systems",
        why_suitable: "Strong technical aptitude and problem-solving skills align well",
        required_skills: &["Programming", "Data Structures", "Problem Solving", "Software Design"],
        education_required: "Bachelor's in Computer Science or related field",
        salary_range: "6-25 LPA",
        job_outlook: "Excellent growth prospects",
        career_path: "Junior Developer → Senior Developer → Tech Lead → Engineering Manager",
    },
    Seed {
        title: "Data Scientist",
        category: "Technology",
        match_score: 80,
        description: "Analyze complex data to derive insights and build predictive models",
        why_suitable: "Analytical mindset and mathematical background are valuable",
        required_skills: &["Python", "Statistics", "Machine Learning", "Data Visualization"],
        education_required: "Bachelor's in Engineering, Mathematics, or related field",
        salary_range: "8-30 LPA",
        job_outlook: "High demand across industries",
        career_path: "Data Analyst → Data Scientist → Senior Data Scientist → Data Science Manager",
    },
    Seed {
        title: "Digital Marketing Specialist",
        category: "Sales & Marketing",
        match_score: 75,
        description: "Plan and execute digital marketing campaigns across various platforms",
        why_suitable: "Creative thinking and communication skills are advantageous",
        required_skills: &["Digital Marketing", "SEO/SEM", "Content Creation", "Analytics"],
        education_required: "Bachelor's in Marketing, Business, or any field with relevant skills",
        salary_range: "4-15 LPA",
        job_outlook: "Growing rapidly with digital transformation",
        career_path: "Marketing Executive → Digital Marketing Specialist → Marketing Manager → CMO",
    },
    Seed {
        title: "Business Analyst",
        category: "Business & Management",
        match_score: 70,
        description: "Analyze business processes and recommend improvements",
        why_suitable: "Strong analytical and communication skills are essential",
        required_skills: &["Business Analysis", "Process Improvement", "Data Analysis", "Communication"],
        education_required: "Bachelor's in Business, Engineering, or related field",
        salary_range: "5-20 LPA",
        job_outlook: "Steady demand across industries",
        career_path: "Junior Analyst → Business Analyst → Senior Analyst → Consultant",
    },
    Seed {
        title: "UI/UX Designer",
        category: "Creative & Media",
        match_score: 78,
        description: "Design user interfaces and experiences for digital products",
        why_suitable: "Creative abilities and attention to detail are valuable",
        required_skills: &["Design Tools", "User Research", "Prototyping", "Visual Design"],
        education_required: "Bachelor's in Design, Computer Science, or relevant portfolio",
        salary_range: "5-18 LPA",
        job_outlook: "High demand with growing tech industry",
        career_path: "Junior Designer → UI/UX Designer → Senior Designer → Design Lead",
    },
];

fn builtin_entries() -> Vec<CareerEntry> {
    SEEDS
        .iter()
        .map(|seed| CareerEntry {
            title: seed.title.to_string(),
            category: seed.category.to_string(),
            match_score: seed.match_score,
            description: seed.description.to_string(),
            why_suitable: seed.why_suitable.to_string(),
            required_skills: seed.required_skills.iter().map(|s| s.to_string()).collect(),
            education_required: seed.education_required.to_string(),
            salary_range: seed.salary_range.to_string(),
            job_outlook: seed.job_outlook.to_string(),
            career_path: seed.career_path.to_string(),
        })
        .collect()
}
