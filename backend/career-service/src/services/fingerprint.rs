use sha2::{Digest, Sha256};

use crate::models::UserProfile;

const FINGERPRINT_LEN: usize = 8;

/// Canonical form of the profile: type, then sorted interests, purpose
/// elements and skills, all dash-joined. Traits do not participate.
pub fn canonical_profile(profile: &UserProfile) -> String {
    let sorted_joined = |values: &[String]| {
        let mut sorted: Vec<&str> = values.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        sorted.join("-")
    };

    format!(
        "{}-{}-{}-{}",
        profile.personality_type().unwrap_or_default(),
        sorted_joined(&profile.interests),
        sorted_joined(&profile.purpose_elements),
        sorted_joined(&profile.skills),
    )
}

/// Short opaque identifier for a profile, used in logs and responses.
/// Collisions are tolerated.
pub fn profile_fingerprint(profile: &UserProfile) -> String {
    let digest = Sha256::digest(canonical_profile(profile).as_bytes());
    let mut encoded = hex::encode(digest);
    encoded.truncate(FINGERPRINT_LEN);
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_form() {
        let profile = UserProfile::default()
            .with_type("INTJ")
            .with_interests(["R", "I"])
            .with_purpose(["mission", "profession"])
            .with_skills(["research", "programming"]);
        assert_eq!(
            canonical_profile(&profile),
            "INTJ-I-R-mission-profession-programming-research"
        );
    }

    #[test]
    fn test_empty_profile_canonical_form() {
        assert_eq!(canonical_profile(&UserProfile::default()), "---");
    }

    #[test]
    fn test_fingerprint_shape_and_determinism() {
        let profile = UserProfile::default().with_type("ENFP").with_interests(["A", "S"]);
        let first = profile_fingerprint(&profile);
        let second = profile_fingerprint(&profile.clone());

        assert_eq!(first.len(), 8);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_eq!(first, second);
    }

    #[test]
    fn test_order_insensitive_but_trait_blind() {
        let a = UserProfile::default().with_interests(["A", "S"]).with_trait("social", 0.9);
        let b = UserProfile::default().with_interests(["S", "A"]);
        assert_eq!(profile_fingerprint(&a), profile_fingerprint(&b));

        let c = UserProfile::default().with_interests(["S"]);
        assert_ne!(profile_fingerprint(&a), profile_fingerprint(&c));
    }
}
