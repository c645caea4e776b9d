pub mod assessment;
pub mod explainer;
pub mod fingerprint;
pub mod recommendation;
pub mod scoring;
pub mod templates;

pub use assessment::AssessmentBreakdown;
pub use fingerprint::profile_fingerprint;
pub use recommendation::{RecommendationEngine, ScoredCareer};
pub use scoring::DimensionWeights;
pub use templates::TemplateLibrary;
