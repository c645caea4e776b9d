use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Career category, also the key for learning-path and resource templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerCategory {
    Technology,
    Creative,
    Healthcare,
    SocialServices,
    Business,
    Engineering,
    Education,
    Arts,
    Media,
    Science,
}

impl CareerCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CareerCategory::Technology => "technology",
            CareerCategory::Creative => "creative",
            CareerCategory::Healthcare => "healthcare",
            CareerCategory::SocialServices => "social_services",
            CareerCategory::Business => "business",
            CareerCategory::Engineering => "engineering",
            CareerCategory::Education => "education",
            CareerCategory::Arts => "arts",
            CareerCategory::Media => "media",
            CareerCategory::Science => "science",
        }
    }
}

impl fmt::Display for CareerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entry requirements (pass-through)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Requirements {
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub experience: String,
}

/// Multi-framework weighting used by the dimension scorers.
///
/// All maps are sparse. Keys absent from a map score as a zero-weight match,
/// except `trait_profile` where the user side falls back to the neutral value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalityProfile {
    /// Personality-type code (e.g. "INTJ") -> weight
    #[serde(rename = "mbti_weights", default)]
    pub type_weights: BTreeMap<String, f64>,
    /// Interest code (R/I/A/S/E/C) -> weight
    #[serde(rename = "riasec_weights", default)]
    pub interest_weights: BTreeMap<String, f64>,
    /// Purpose element (profession/vocation/mission/passion) -> weight
    #[serde(rename = "ikigai_weights", default)]
    pub purpose_weights: BTreeMap<String, f64>,
    #[serde(default)]
    pub skill_domains: Vec<String>,
    /// Open trait vocabulary -> value
    #[serde(default)]
    pub trait_profile: BTreeMap<String, f64>,
}

/// A career in the catalog. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerRecord {
    pub id: u32,
    pub title: String,
    pub category: CareerCategory,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub salary_min: u32,
    #[serde(default)]
    pub salary_max: u32,
    /// Projected growth rate, percent
    #[serde(default)]
    pub growth: u32,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub personality_traits: Vec<String>,
    #[serde(default)]
    pub experience_level: String,
    #[serde(default)]
    pub work_environment: Vec<String>,
    pub personality_profile: PersonalityProfile,
    #[serde(default)]
    pub requirements: Requirements,
}

impl CareerRecord {
    /// Minimal record with empty pass-through fields
    pub fn new(
        id: u32,
        title: impl Into<String>,
        category: CareerCategory,
        personality_profile: PersonalityProfile,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            category,
            description: String::new(),
            salary_min: 0,
            salary_max: 0,
            growth: 0,
            skills: Vec::new(),
            personality_traits: Vec::new(),
            experience_level: String::new(),
            work_environment: Vec::new(),
            personality_profile,
            requirements: Requirements::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_names() {
        let category: CareerCategory = serde_json::from_str("\"social_services\"").unwrap();
        assert_eq!(category, CareerCategory::SocialServices);
        assert_eq!(category.to_string(), "social_services");
    }

    #[test]
    fn test_record_uses_original_weight_keys() {
        let json = serde_json::json!({
            "id": 42,
            "title": "Cartographer",
            "category": "science",
            "personality_profile": {
                "mbti_weights": {"ISTJ": 0.8},
                "riasec_weights": {"I": 0.7},
                "ikigai_weights": {"vocation": 0.6},
                "skill_domains": ["mapping"],
                "trait_profile": {"structured": 0.9}
            }
        });

        let record: CareerRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.personality_profile.type_weights["ISTJ"], 0.8);
        assert_eq!(record.personality_profile.purpose_weights["vocation"], 0.6);
        assert!(record.skills.is_empty());

        let back = serde_json::to_value(&record).unwrap();
        assert!(back["personality_profile"]["riasec_weights"]["I"].is_number());
    }
}
