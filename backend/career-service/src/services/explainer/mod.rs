/// Explanations derived from the scores: reasoning lines, trait fit,
/// archetype and profile analysis. Nothing here feeds back into ranking.
pub mod analysis;
pub mod archetype;
pub mod fit;
pub mod reasoning;

pub use analysis::analyze_profile;
pub use archetype::{archetype_score, classify, DEFAULT_ARCHETYPE};
pub use fit::{personality_fit, FIT_TRAITS};
pub use reasoning::generate_reasoning;
