use std::cmp::Ordering;
use std::sync::Arc;

use tracing::{debug, info};

use super::explainer::{analyze_profile, generate_reasoning, personality_fit};
use super::fingerprint::profile_fingerprint;
use super::scoring::{score_career, DimensionWeights};
use super::templates::TemplateLibrary;
use crate::catalog::{Catalog, Lexicon};
use crate::models::recommendation::round_to;
use crate::models::{
    CareerRecommendation, CareerRecord, DimensionScores, RecommendationSet, UserProfile,
};

/// One catalog entry with its unrounded scores
#[derive(Debug, Clone)]
pub struct ScoredCareer<'a> {
    pub career: &'a CareerRecord,
    pub scores: DimensionScores,
    pub total: f64,
}

/// Scores a profile against the catalog and explains the top matches.
///
/// Holds only immutable data, so one instance is shared by every worker.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    catalog: Arc<Catalog>,
    lexicon: Arc<Lexicon>,
    templates: TemplateLibrary,
    weights: DimensionWeights,
}

impl RecommendationEngine {
    pub fn new(catalog: Arc<Catalog>, lexicon: Arc<Lexicon>) -> Self {
        Self {
            catalog,
            lexicon,
            templates: TemplateLibrary::standard(),
            weights: DimensionWeights::default(),
        }
    }

    pub fn with_weights(mut self, weights: DimensionWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn weights(&self) -> &DimensionWeights {
        &self.weights
    }

    /// Every career scored and sorted by total, best first.
    ///
    /// The sort is stable: equal totals keep catalog order.
    pub fn rank(&self, profile: &UserProfile) -> Vec<ScoredCareer<'_>> {
        let user_traits = profile.merged_traits();

        let mut scored: Vec<ScoredCareer<'_>> = self
            .catalog
            .careers()
            .iter()
            .map(|career| {
                let scores = score_career(profile, &user_traits, career, &self.lexicon);
                ScoredCareer {
                    career,
                    total: self.weights.combine(&scores),
                    scores,
                }
            })
            .collect();

        scored.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(Ordering::Equal));

        scored
    }

    /// Top `top_n` careers with reasoning, fit and learning material
    pub fn recommend(&self, profile: &UserProfile, top_n: usize) -> RecommendationSet {
        let fingerprint = profile_fingerprint(profile);
        let ranked = self.rank(profile);
        let total_considered = ranked.len();

        let recommendations: Vec<CareerRecommendation> = ranked
            .into_iter()
            .take(top_n)
            .enumerate()
            .map(|(index, scored)| self.explain(profile, index + 1, scored))
            .collect();

        let analysis = analyze_profile(profile, &self.lexicon);

        if let Some(top) = recommendations.first() {
            debug!(
                profile_hash = %fingerprint,
                top_career = %top.career.title,
                top_match = top.match_percent,
                "Top recommendation"
            );
        }

        info!(
            profile_hash = %fingerprint,
            archetype = %analysis.archetype,
            returned = recommendations.len(),
            considered = total_considered,
            "Generated career recommendations"
        );

        RecommendationSet {
            fingerprint,
            recommendations,
            analysis,
            total_considered,
        }
    }

    fn explain(
        &self,
        profile: &UserProfile,
        rank: usize,
        scored: ScoredCareer<'_>,
    ) -> CareerRecommendation {
        let career = scored.career;
        let breakdown = scored.scores.rounded();

        CareerRecommendation {
            career: career.clone(),
            rank,
            match_percent: round_to(scored.total * 100.0, 1),
            reasoning: generate_reasoning(&breakdown, profile, career),
            fit: personality_fit(profile, career),
            learning_path: self.templates.learning_path(career.category),
            resources: self.templates.resources(career.category),
            score_breakdown: breakdown,
        }
    }
}
