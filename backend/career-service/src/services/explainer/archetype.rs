use crate::catalog::Archetype;
use crate::models::UserProfile;

/// Label used when no archetypes are defined
pub const DEFAULT_ARCHETYPE: &str = "balanced_professional";

const TYPE_MATCH_SCORE: f64 = 0.4;
const INTEREST_MATCH_SCORE: f64 = 0.3;
const PURPOSE_MATCH_SCORE: f64 = 0.3;

/// Membership score of the profile in one archetype
pub fn archetype_score(profile: &UserProfile, archetype: &Archetype) -> f64 {
    let mut score = 0.0;

    if let Some(type_codes) = &archetype.type_codes {
        if profile
            .personality_type()
            .is_some_and(|code| type_codes.iter().any(|c| c == code))
        {
            score += TYPE_MATCH_SCORE;
        }
    }

    if let Some(interest_codes) = &archetype.interest_codes {
        if profile.interests.iter().any(|code| interest_codes.contains(code)) {
            score += INTEREST_MATCH_SCORE;
        }
    }

    if let Some(purpose_elements) = &archetype.purpose_elements {
        if profile
            .purpose_elements
            .iter()
            .any(|element| purpose_elements.contains(element))
        {
            score += PURPOSE_MATCH_SCORE;
        }
    }

    score
}

/// Highest-scoring archetype; the earliest definition wins ties.
pub fn classify<'a>(profile: &UserProfile, archetypes: &'a [Archetype]) -> &'a str {
    let mut best: Option<(&Archetype, f64)> = None;

    for archetype in archetypes {
        let score = archetype_score(profile, archetype);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((archetype, score));
        }
    }

    best.map(|(archetype, _)| archetype.name.as_str())
        .unwrap_or(DEFAULT_ARCHETYPE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Lexicon;

    // an empty list leaves the dimension undefined
    fn archetype(name: &str, types: &[&str], interests: &[&str]) -> Archetype {
        let defined = |list: &[&str]| {
            (!list.is_empty()).then(|| list.iter().map(|s| s.to_string()).collect::<Vec<_>>())
        };
        Archetype {
            name: name.to_string(),
            type_codes: defined(types),
            interest_codes: defined(interests),
            purpose_elements: None,
            traits: Default::default(),
        }
    }

    #[test]
    fn test_no_archetypes_falls_back() {
        assert_eq!(classify(&UserProfile::default(), &[]), DEFAULT_ARCHETYPE);
    }

    #[test]
    fn test_tie_goes_to_earlier_definition() {
        let lexicon = Lexicon::standard().unwrap().with_archetypes(vec![
            archetype("first", &[], &["A"]),
            archetype("second", &[], &["A", "S"]),
        ]);
        let profile = UserProfile::default().with_interests(["A"]);
        assert_eq!(classify(&profile, lexicon.archetypes()), "first");
    }

    #[test]
    fn test_type_match_outweighs_interest_match() {
        let archetypes = vec![
            archetype("interest_only", &[], &["I"]),
            archetype("type_only", &["INTJ"], &[]),
        ];
        let profile = UserProfile::default().with_type("INTJ").with_interests(["I"]);
        assert_eq!(classify(&profile, &archetypes), "type_only");
    }

    #[test]
    fn test_undefined_dimension_never_scores() {
        let arch = archetype("types", &["INFP"], &[]);
        let profile = UserProfile::default().with_interests(["A"]).with_purpose(["passion"]);
        assert_eq!(archetype_score(&profile, &arch), 0.0);
    }

    #[test]
    fn test_standard_archetypes() {
        let lexicon = Lexicon::standard().unwrap();

        let intj = UserProfile::default()
            .with_type("INTJ")
            .with_interests(["I", "R"])
            .with_purpose(["profession", "mission"]);
        assert_eq!(classify(&intj, lexicon.archetypes()), "analytical_thinker");

        let helper = UserProfile::default().with_interests(["S"]);
        assert_eq!(classify(&helper, lexicon.archetypes()), "social_helper");

        // everything scores zero: first definition wins
        assert_eq!(classify(&UserProfile::default(), lexicon.archetypes()), "analytical_thinker");
    }
}
