use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowingSector {
    pub sector: String,
    pub growth_rate: u32,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemandLevel {
    VeryHigh,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InDemandSkill {
    pub skill: String,
    pub demand_level: DemandLevel,
}

/// A role that is new enough to have no catalog entry yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergingRole {
    pub title: String,
    pub growth_potential: DemandLevel,
    pub description: String,
    pub why_emerging: String,
    pub key_skills: Vec<String>,
    pub salary_range: String,
    pub experience_level: String,
    pub remote_friendly: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employer {
    pub category: String,
    pub name: String,
    pub size: String,
    pub known_for: String,
    pub hiring_trend: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketInsights {
    pub trends_summary: String,
    pub growing_sectors: Vec<GrowingSector>,
    pub in_demand_skills: Vec<InDemandSkill>,
    pub emerging_roles: Vec<EmergingRole>,
    pub top_employers: Vec<Employer>,
}

const TRENDS_SUMMARY: &str = "\
The Indian job market is experiencing rapid transformation driven by digital adoption, \
startup ecosystem growth, and emerging technologies. Key trends include:
- Digital Transformation: 70% of companies are investing heavily in digital capabilities
- Remote Work: Hybrid work models have become the new normal
- Skill-based Hiring: Emphasis on skills over traditional qualifications
- Green Jobs: Growing demand for sustainability-focused roles
- AI Integration: Automation is creating new job categories while transforming existing ones";

const SECTORS: &[(&str, u32, &str)] = &[
    ("Technology", 25, "Continued digital transformation"),
    ("Healthcare", 18, "Post-pandemic growth and telemedicine"),
    ("E-commerce", 22, "Online retail expansion"),
    ("Fintech", 20, "Digital payments and banking"),
    ("Education Technology", 16, "Online learning platforms"),
    ("Renewable Energy", 15, "Green energy initiatives"),
];

const SKILLS: &[(&str, DemandLevel)] = &[
    ("Python Programming", DemandLevel::VeryHigh),
    ("Data Analysis", DemandLevel::VeryHigh),
    ("Digital Marketing", DemandLevel::High),
    ("Cloud Computing", DemandLevel::VeryHigh),
    ("Machine Learning", DemandLevel::High),
    ("Cybersecurity", DemandLevel::High),
    ("UI/UX Design", DemandLevel::High),
    ("Project Management", DemandLevel::High),
];

struct RoleSeed {
    title: &'static str,
    growth_potential: DemandLevel,
    description: &'static str,
    why_emerging: &'static str,
    key_skills: &'static [&'static str],
    salary_range: &'static str,
    experience_level: &'static str,
    remote_friendly: bool,
}

const EMERGING_ROLES: &[RoleSeed] = &[
    RoleSeed {
        title: "AI Ethics Specialist",
        growth_potential: DemandLevel::VeryHigh,
        description: "Ensures responsible development and deployment of AI systems",
        why_emerging: "Growing concerns about AI bias, privacy, and ethical implications",
        key_skills: &["Machine Learning", "Ethics", "Policy Development", "Risk Assessment"],
        salary_range: "15-30 LPA",
        experience_level: "Mid to Senior",
        remote_friendly: true,
    },
    RoleSeed {
        title: "Sustainability Manager",
        growth_potential: DemandLevel::High,
        description: "Develops and implements environmental sustainability strategies",
        why_emerging: "Increased focus on ESG goals and climate change",
        key_skills: &["Environmental Science", "Project Management", "Data Analysis", "Policy"],
        salary_range: "12-25 LPA",
        experience_level: "Mid-level",
        remote_friendly: false,
    },
];

// (category, name, size, known for, hiring trend)
const EMPLOYERS: &[(&str, &str, &str, &str, &str)] = &[
    (
        "Technology Companies",
        "Tata Consultancy Services",
        "500,000+",
        "IT Services, Consulting",
        "Actively hiring for cloud and AI roles",
    ),
    (
        "Technology Companies",
        "Infosys",
        "300,000+",
        "Digital transformation, Consulting",
        "Focus on digital skills and automation",
    ),
];

/// The fixed market snapshot served when no live source is available.
pub fn sample_market_insights() -> MarketInsights {
    MarketInsights {
        trends_summary: TRENDS_SUMMARY.to_string(),
        growing_sectors: SECTORS
            .iter()
            .map(|(sector, growth_rate, description)| GrowingSector {
                sector: sector.to_string(),
                growth_rate: *growth_rate,
                description: description.to_string(),
            })
            .collect(),
        in_demand_skills: SKILLS
            .iter()
            .map(|(skill, demand_level)| InDemandSkill {
                skill: skill.to_string(),
                demand_level: *demand_level,
            })
            .collect(),
        emerging_roles: EMERGING_ROLES
            .iter()
            .map(|role| EmergingRole {
                title: role.title.to_string(),
                growth_potential: role.growth_potential,
                description: role.description.to_string(),
                why_emerging: role.why_emerging.to_string(),
                key_skills: role.key_skills.iter().map(|s| s.to_string()).collect(),
                salary_range: role.salary_range.to_string(),
                experience_level: role.experience_level.to_string(),
                remote_friendly: role.remote_friendly,
            })
            .collect(),
        top_employers: EMPLOYERS
            .iter()
            .map(|(category, name, size, known_for, hiring_trend)| Employer {
                category: category.to_string(),
                name: name.to_string(),
                size: size.to_string(),
                known_for: known_for.to_string(),
                hiring_trend: hiring_trend.to_string(),
            })
            .collect(),
    }
}
