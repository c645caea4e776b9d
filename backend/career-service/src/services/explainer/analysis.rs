use super::archetype::classify;
use crate::catalog::Lexicon;
use crate::models::{ProfileAnalysis, UserProfile};

const ANALYTICAL_TYPES: [&str; 4] = ["INTJ", "INTP", "ENTJ", "ENTP"];
const CREATIVE_SOCIAL_TYPES: [&str; 4] = ["INFP", "ENFP", "INFJ", "ENFJ"];
const INTEREST_CLUSTERS: [(&str, &str); 3] = [
    ("I", "Investigative/Research"),
    ("A", "Artistic/Creative"),
    ("S", "Social/Helping"),
];

/// Archetype, strengths and career clusters for the whole profile
pub fn analyze_profile(profile: &UserProfile, lexicon: &Lexicon) -> ProfileAnalysis {
    ProfileAnalysis {
        archetype: classify(profile, lexicon.archetypes()).to_string(),
        strengths: strengths(profile),
        career_clusters: career_clusters(profile),
    }
}

fn strengths(profile: &UserProfile) -> Vec<String> {
    let mut strengths = Vec::new();

    if let Some(user_type) = profile.personality_type() {
        strengths.push(format!("{} cognitive strengths", user_type));
    }
    if !profile.interests.is_empty() {
        strengths.push(format!("{} interest patterns", profile.interests.join(", ")));
    }
    if !profile.purpose_elements.is_empty() {
        strengths.push(format!("Ikigai elements: {}", profile.purpose_elements.join(", ")));
    }

    strengths
}

fn career_clusters(profile: &UserProfile) -> Vec<String> {
    let mut clusters: Vec<&str> = Vec::new();

    if let Some(user_type) = profile.personality_type() {
        if ANALYTICAL_TYPES.contains(&user_type) {
            clusters.push("Analytical/Technical");
        }
        if CREATIVE_SOCIAL_TYPES.contains(&user_type) {
            clusters.push("Creative/Social");
        }
    }

    for (code, cluster) in INTEREST_CLUSTERS {
        if profile.interests.iter().any(|interest| interest == code) && !clusters.contains(&cluster) {
            clusters.push(cluster);
        }
    }

    clusters.into_iter().map(str::to_string).collect()
}
