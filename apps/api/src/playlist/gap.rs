//! Gap Calculator — marks each resolved skill as known or still to learn.

use crate::models::profile::SkillEntry;
use crate::models::query::split_known_skills;

/// Lower-cased known-skill tokens from comma-separated user input.
pub fn known_skill_tokens(known_skills_text: &str) -> Vec<String> {
    split_known_skills(known_skills_text)
        .into_iter()
        .map(|s| s.to_lowercase())
        .collect()
}

/// A skill is known when some token contains it ("I know python well" ⊇ "python").
/// One direction only: a short token like "c" must not claim "Docker".
pub fn is_known(skill: &str, tokens: &[String]) -> bool {
    let skill = skill.to_lowercase();
    tokens.iter().any(|token| token.contains(&skill))
}

/// Marks every skill, preserving input order. Resources are attached later.
pub fn mark_gaps(skills: &[String], known_skills_text: &str) -> Vec<SkillEntry> {
    let tokens = known_skill_tokens(known_skills_text);
    skills
        .iter()
        .map(|skill| SkillEntry::new(skill.clone(), !is_known(skill, &tokens)))
        .collect()
}
