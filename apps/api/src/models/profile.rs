use serde::{Deserialize, Serialize};

/// Placeholder value the location picker submits before a state is chosen.
pub const LOCATION_SENTINEL: &str = "Select State";

/// Everything the intake form knows about the user.
///
/// All fields are optional; an empty collection or `None` simply contributes
/// nothing to scoring or completion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    // Basic information
    pub name: Option<String>,
    pub age: Option<u32>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub languages: Vec<String>,

    // Academic background
    pub education_level: Option<String>,
    pub stream: Option<String>,
    pub institution: Option<String>,
    /// Percentage as entered, e.g. "82.5". Validated to parse into [0, 100].
    pub academic_performance: Option<String>,
    pub subjects: Vec<String>,

    // Skills and interests
    pub current_skills: Vec<String>,
    pub technical_skills: Vec<String>,
    pub interests: Vec<String>,
    pub personality_traits: Vec<String>,

    // Career preferences
    pub work_environment: Vec<String>,
    pub salary_expectations: Option<String>,
    pub job_type_preference: Vec<String>,
    pub location_preference: Vec<String>,
    pub career_goals: Option<String>,
}

impl Profile {
    /// Academic performance as a number, if it parses.
    pub fn academic_score(&self) -> Option<f64> {
        self.academic_performance
            .as_deref()
            .and_then(|s| s.trim().parse::<f64>().ok())
    }

    /// Rejects values the form layer must never store.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(raw) = self.academic_performance.as_deref() {
            let value = raw.trim().parse::<f64>().map_err(|_| {
                format!("academic_performance must be a number, got '{raw}'")
            })?;
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(format!(
                    "academic_performance must be between 0 and 100, got {value}"
                ));
            }
        }

        if let Some(age) = self.age {
            if age > 120 {
                return Err(format!("age must be at most 120, got {age}"));
            }
        }

        if let Some(email) = self.email.as_deref() {
            let email = email.trim();
            if !email.is_empty() && !email.contains('@') {
                return Err(format!("email '{email}' is not a valid address"));
            }
        }

        Ok(())
    }

    /// Applies every field present in `update`, leaving the rest untouched.
    pub fn apply(&mut self, update: ProfileUpdate) {
        macro_rules! set {
            ($($field:ident),* $(,)?) => {
                $(if let Some(value) = update.$field { self.$field = value.into(); })*
            };
        }

        set!(
            name,
            age,
            email,
            phone,
            location,
            languages,
            education_level,
            stream,
            institution,
            academic_performance,
            subjects,
            current_skills,
            technical_skills,
            interests,
            personality_traits,
            work_environment,
            salary_expectations,
            job_type_preference,
            location_preference,
            career_goals,
        );
    }
}

/// Partial profile write. Absent fields are left as they are; scalar fields
/// are cleared by sending an explicit `null`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileUpdate {
    #[serde(deserialize_with = "explicit")]
    pub name: Option<Option<String>>,
    #[serde(deserialize_with = "explicit")]
    pub age: Option<Option<u32>>,
    #[serde(deserialize_with = "explicit")]
    pub email: Option<Option<String>>,
    #[serde(deserialize_with = "explicit")]
    pub phone: Option<Option<String>>,
    #[serde(deserialize_with = "explicit")]
    pub location: Option<Option<String>>,
    pub languages: Option<Vec<String>>,
    #[serde(deserialize_with = "explicit")]
    pub education_level: Option<Option<String>>,
    #[serde(deserialize_with = "explicit")]
    pub stream: Option<Option<String>>,
    #[serde(deserialize_with = "explicit")]
    pub institution: Option<Option<String>>,
    #[serde(deserialize_with = "explicit")]
    pub academic_performance: Option<Option<String>>,
    pub subjects: Option<Vec<String>>,
    pub current_skills: Option<Vec<String>>,
    pub technical_skills: Option<Vec<String>>,
    pub interests: Option<Vec<String>>,
    pub personality_traits: Option<Vec<String>>,
    pub work_environment: Option<Vec<String>>,
    #[serde(deserialize_with = "explicit")]
    pub salary_expectations: Option<Option<String>>,
    pub job_type_preference: Option<Vec<String>>,
    pub location_preference: Option<Vec<String>>,
    #[serde(deserialize_with = "explicit")]
    pub career_goals: Option<Option<String>>,
}

/// Distinguishes `"field": null` (Some(None)) from a missing field (None).
fn explicit<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_empty_profile() {
        assert!(Profile::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_numeric_performance() {
        let profile = Profile {
            academic_performance: Some("excellent".to_string()),
            ..Default::default()
        };
        let err = profile.validate().unwrap_err();
        assert!(err.contains("academic_performance"), "{err}");
    }

    #[test]
    fn test_validate_rejects_out_of_range_performance() {
        for raw in ["100.5", "-1", "NaN", "inf"] {
            let profile = Profile {
                academic_performance: Some(raw.to_string()),
                ..Default::default()
            };
            assert!(profile.validate().is_err(), "{raw} should be rejected");
        }
    }

    #[test]
    fn test_validate_accepts_boundary_performance() {
        for raw in ["0", "100", " 82.5 "] {
            let profile = Profile {
                academic_performance: Some(raw.to_string()),
                ..Default::default()
            };
            assert!(profile.validate().is_ok(), "{raw} should be accepted");
        }
    }

    #[test]
    fn test_validate_rejects_bad_email_and_age() {
        let bad_email = Profile {
            email: Some("not-an-address".to_string()),
            ..Default::default()
        };
        assert!(bad_email.validate().is_err());

        let bad_age = Profile {
            age: Some(200),
            ..Default::default()
        };
        assert!(bad_age.validate().is_err());
    }

    #[test]
    fn test_apply_only_touches_present_fields() {
        let mut profile = Profile {
            name: Some("Asha".to_string()),
            interests: vec!["Technology".to_string()],
            ..Default::default()
        };
        let update: ProfileUpdate =
            serde_json::from_str(r#"{"technical_skills": ["Python"], "age": 19}"#).unwrap();
        profile.apply(update);

        assert_eq!(profile.name.as_deref(), Some("Asha"));
        assert_eq!(profile.age, Some(19));
        assert_eq!(profile.interests, vec!["Technology"]);
        assert_eq!(profile.technical_skills, vec!["Python"]);
    }

    #[test]
    fn test_apply_explicit_null_clears_scalar() {
        let mut profile = Profile {
            name: Some("Asha".to_string()),
            ..Default::default()
        };
        let update: ProfileUpdate = serde_json::from_str(r#"{"name": null}"#).unwrap();
        profile.apply(update);
        assert_eq!(profile.name, None);
    }

    #[test]
    fn test_academic_score_parses_trimmed() {
        let profile = Profile {
            academic_performance: Some(" 76 ".to_string()),
            ..Default::default()
        };
        assert_eq!(profile.academic_score(), Some(76.0));
    }
}
