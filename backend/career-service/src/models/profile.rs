use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Value assumed for any trait the user did not rate
pub const NEUTRAL_TRAIT_VALUE: f64 = 0.5;

/// Trait baseline merged under the user's ratings before trait scoring
pub const BASELINE_TRAITS: [&str; 7] = [
    "analytical",
    "technical",
    "creativity",
    "social",
    "leadership",
    "structured",
    "practical",
];

/// User assessment results submitted with a recommendation request.
///
/// Wire names follow the public API (`mbti`, `riasec`, `ikigai`); the
/// framework-neutral names are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(
        rename = "mbti",
        alias = "type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub personality_type: Option<String>,
    /// Interest codes, primary first
    #[serde(rename = "riasec", alias = "interests", default)]
    pub interests: Vec<String>,
    #[serde(
        rename = "ikigai",
        alias = "purposeElements",
        alias = "purpose_elements",
        default
    )]
    pub purpose_elements: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Ratings used by the trait scorer
    #[serde(default)]
    pub traits: BTreeMap<String, f64>,
    /// Any other top-level keys. Numeric ones are self-ratings read by the
    /// fit breakdown, independently of `traits`.
    #[serde(flatten)]
    pub ratings: BTreeMap<String, serde_json::Value>,
}

impl UserProfile {
    /// Personality type, treating an empty code as absent
    pub fn personality_type(&self) -> Option<&str> {
        self.personality_type
            .as_deref()
            .filter(|code| !code.is_empty())
    }

    /// Top-level rating for `name`, or the neutral value when absent or
    /// not a number
    pub fn rating(&self, name: &str) -> f64 {
        self.ratings
            .get(name)
            .and_then(serde_json::Value::as_f64)
            .unwrap_or(NEUTRAL_TRAIT_VALUE)
    }

    /// Baseline traits overlaid with the user's own ratings
    pub fn merged_traits(&self) -> BTreeMap<String, f64> {
        let mut merged: BTreeMap<String, f64> = BASELINE_TRAITS
            .iter()
            .map(|name| (name.to_string(), NEUTRAL_TRAIT_VALUE))
            .collect();
        merged.extend(self.traits.iter().map(|(k, v)| (k.clone(), *v)));
        merged
    }

    pub fn with_type(mut self, code: impl Into<String>) -> Self {
        self.personality_type = Some(code.into());
        self
    }

    pub fn with_interests<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interests = codes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_purpose<I, S>(mut self, elements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.purpose_elements = elements.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_trait(mut self, name: impl Into<String>, value: f64) -> Self {
        self.traits.insert(name.into(), value);
        self
    }

    pub fn with_rating(mut self, name: impl Into<String>, value: f64) -> Self {
        self.ratings.insert(name.into(), serde_json::Value::from(value));
        self
    }
}
