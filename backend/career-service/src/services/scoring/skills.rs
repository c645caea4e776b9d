use super::NO_SKILLS_SCORE;

/// Skill-domain similarity.
///
/// A user skill matches when it and some domain tag contain one another,
/// case-insensitively; each skill counts once. The score is matches per
/// domain tag and is NOT clamped: more matching skills than tags yields a
/// value above 1.0.
pub fn skill_similarity(user_skills: &[String], skill_domains: &[String]) -> f64 {
    if user_skills.is_empty() {
        return NO_SKILLS_SCORE;
    }
    if skill_domains.is_empty() {
        return 0.0;
    }

    let domains: Vec<String> = skill_domains.iter().map(|d| d.to_lowercase()).collect();

    let matches = user_skills
        .iter()
        .map(|skill| skill.to_lowercase())
        .filter(|skill| {
            domains
                .iter()
                .any(|domain| domain.contains(skill.as_str()) || skill.contains(domain.as_str()))
        })
        .count();

    matches as f64 / domains.len() as f64
}
