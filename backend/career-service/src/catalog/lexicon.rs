use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

use super::Result;

const REFERENCE_LEXICON: &str = include_str!("../../data/lexicon.json");

/// One of the eight cognitive functions; each personality type has four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum CognitiveFunction {
    Ni,
    Ne,
    Ti,
    Te,
    Fi,
    Fe,
    Si,
    Se,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeProfile {
    pub description: String,
    pub career_implications: String,
}

/// Coarse personality cluster.
///
/// A `None` list means the archetype does not consider that dimension at
/// all. The trait signature is descriptive only and takes no part in
/// classification.
#[derive(Debug, Clone, Deserialize)]
pub struct Archetype {
    pub name: String,
    #[serde(default)]
    pub type_codes: Option<Vec<String>>,
    #[serde(default)]
    pub interest_codes: Option<Vec<String>>,
    #[serde(default)]
    pub purpose_elements: Option<Vec<String>>,
    /// Typical trait levels, carried for display only
    #[serde(default)]
    pub traits: BTreeMap<String, f64>,
}

/// Static lookup tables used by the scorers and the explainer
#[derive(Debug, Clone, Deserialize)]
pub struct Lexicon {
    cognitive_functions: HashMap<String, [CognitiveFunction; 4]>,
    #[serde(default)]
    type_profiles: HashMap<String, TypeProfile>,
    #[serde(default)]
    interest_descriptions: HashMap<String, String>,
    #[serde(default)]
    archetypes: Vec<Archetype>,
}

impl Lexicon {
    /// Tables bundled with the service
    pub fn standard() -> Result<Self> {
        Self::from_json(REFERENCE_LEXICON)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replace the archetype definitions, keeping their order
    pub fn with_archetypes(mut self, archetypes: Vec<Archetype>) -> Self {
        self.archetypes = archetypes;
        self
    }

    /// Functions for a type code; unknown codes yield an empty slice.
    pub fn cognitive_functions(&self, type_code: &str) -> &[CognitiveFunction] {
        self.cognitive_functions
            .get(type_code)
            .map(|functions| functions.as_slice())
            .unwrap_or(&[])
    }

    pub fn type_profile(&self, type_code: &str) -> Option<&TypeProfile> {
        self.type_profiles.get(type_code)
    }

    pub fn interest_description(&self, code: &str) -> Option<&str> {
        self.interest_descriptions.get(code).map(String::as_str)
    }

    pub fn archetypes(&self) -> &[Archetype] {
        &self.archetypes
    }
}
