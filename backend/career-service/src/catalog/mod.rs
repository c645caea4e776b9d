/// Career catalog and static reference tables
///
/// Both are loaded once at startup and shared read-only across workers.
/// The reference data ships embedded in the binary; a catalog file on disk
/// can replace it through `CATALOG_PATH`.
pub mod lexicon;

pub use lexicon::{Archetype, CognitiveFunction, Lexicon, TypeProfile};

use crate::models::{CareerCategory, CareerRecord};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

const REFERENCE_CATALOG: &str = include_str!("../../data/careers.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed reference data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate career id: {0}")]
    DuplicateId(u32),

    #[error("Career {id} has {field}[{key}] = {value}, expected a value in [0, 1]")]
    WeightOutOfRange {
        id: u32,
        field: &'static str,
        key: String,
        value: f64,
    },

    #[error("Catalog contains no careers")]
    Empty,
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Immutable, ordered collection of careers.
///
/// Insertion order is significant: it breaks ties when ranking.
#[derive(Debug, Clone)]
pub struct Catalog {
    careers: Vec<CareerRecord>,
}

impl Catalog {
    pub fn new(careers: Vec<CareerRecord>) -> Result<Self> {
        if careers.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(careers.len());
        for career in &careers {
            if !seen.insert(career.id) {
                return Err(CatalogError::DuplicateId(career.id));
            }
            validate_weights(career)?;
        }

        debug!(career_count = careers.len(), "Catalog validated");

        Ok(Self { careers })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let careers: Vec<CareerRecord> = serde_json::from_str(json)?;
        Self::new(careers)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        info!(path = %path.display(), careers = catalog.len(), "Loaded career catalog from file");
        Ok(catalog)
    }

    /// The 15-career reference catalog bundled with the service
    pub fn reference() -> Result<Self> {
        Self::from_json(REFERENCE_CATALOG)
    }

    pub fn careers(&self) -> &[CareerRecord] {
        &self.careers
    }

    pub fn get(&self, id: u32) -> Option<&CareerRecord> {
        self.careers.iter().find(|career| career.id == id)
    }

    pub fn len(&self) -> usize {
        self.careers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.careers.is_empty()
    }

    /// Distinct categories in first-seen catalog order
    pub fn categories(&self) -> Vec<CareerCategory> {
        let mut seen = HashSet::new();
        self.careers
            .iter()
            .map(|career| career.category)
            .filter(|category| seen.insert(*category))
            .collect()
    }
}

fn validate_weights(career: &CareerRecord) -> Result<()> {
    let profile = &career.personality_profile;
    let maps = [
        ("mbti_weights", &profile.type_weights),
        ("riasec_weights", &profile.interest_weights),
        ("ikigai_weights", &profile.purpose_weights),
        ("trait_profile", &profile.trait_profile),
    ];

    for (field, weights) in maps {
        if let Some((key, value)) = weights
            .iter()
            .find(|(_, value)| !(0.0..=1.0).contains(*value))
        {
            return Err(CatalogError::WeightOutOfRange {
                id: career.id,
                field,
                key: key.clone(),
                value: *value,
            });
        }
    }

    Ok(())
}
