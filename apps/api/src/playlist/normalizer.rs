//! Response Normalizer — folds both backend payload shapes into one `CareerProfile`.
//!
//! Shape A (flat): `{career, skills, skill_gap, playlist: {skill: [..]}, books: {..}, certifications?: {..}}`
//! Shape B (structured): `{career, skills_to_learn: [{skill, videos, books, certifications}]}`
//!
//! Missing or mistyped fields degrade to empty values. Link entries without an
//! absolute http(s) URL are dropped. Count fields in the payload are ignored.

use std::collections::{HashMap, HashSet};

use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::models::profile::{CareerProfile, ResourceKind, ResourceLink, SkillEntry};

pub fn normalize(raw: &Value) -> CareerProfile {
    let career_label = raw
        .get("career")
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or_default();

    match raw.get("skills_to_learn").and_then(Value::as_array) {
        Some(entries) => normalize_structured(career_label, entries),
        None => normalize_flat(career_label, raw),
    }
}

/// Shape B: every entry is something still to learn.
fn normalize_structured(career_label: &str, entries: &[Value]) -> CareerProfile {
    let skills = entries
        .iter()
        .filter_map(|entry| {
            let skill = non_blank_str(entry.get("skill"))?;
            let mut skill_entry = SkillEntry::new(skill, true);
            skill_entry.videos = parse_links(entry.get("videos"), ResourceKind::Video, skill);
            skill_entry.books = parse_links(entry.get("books"), ResourceKind::Book, skill);
            skill_entry.certifications =
                parse_links(entry.get("certifications"), ResourceKind::Certification, skill);
            Some(skill_entry)
        })
        .collect();

    CareerProfile::new(career_label, skills)
}

/// Shape A: parallel maps keyed by skill name, ordered by `skills`.
/// Skill names, `skill_gap` members and map keys are all compared trimmed.
fn normalize_flat(career_label: &str, raw: &Value) -> CareerProfile {
    let gaps: HashSet<&str> = raw
        .get("skill_gap")
        .and_then(Value::as_array)
        .map(|arr| arr.iter().filter_map(|v| non_blank_str(Some(v))).collect())
        .unwrap_or_default();

    let playlist = keyed_by_trimmed_skill(raw.get("playlist"));
    let books = keyed_by_trimmed_skill(raw.get("books"));
    let certifications = keyed_by_trimmed_skill(raw.get("certifications"));

    let skills = raw
        .get("skills")
        .and_then(Value::as_array)
        .map(|arr| arr.as_slice())
        .unwrap_or_default()
        .iter()
        .filter_map(|value| non_blank_str(Some(value)))
        .map(|skill| {
            let mut entry = SkillEntry::new(skill, gaps.contains(skill));
            entry.videos = parse_links(playlist.get(skill).copied(), ResourceKind::Video, skill);
            entry.books = parse_links(books.get(skill).copied(), ResourceKind::Book, skill);
            entry.certifications = parse_links(
                certifications.get(skill).copied(),
                ResourceKind::Certification,
                skill,
            );
            entry
        })
        .collect();

    CareerProfile::new(career_label, skills)
}

/// First key wins when two keys trim to the same name.
fn keyed_by_trimmed_skill(map: Option<&Value>) -> HashMap<&str, &Value> {
    let mut keyed = HashMap::new();
    if let Some(map) = map.and_then(Value::as_object) {
        for (key, value) in map {
            let key = key.trim();
            if !key.is_empty() {
                keyed.entry(key).or_insert(value);
            }
        }
    }
    keyed
}

fn parse_links(value: Option<&Value>, kind: ResourceKind, skill: &str) -> Vec<ResourceLink> {
    value
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(|item| parse_link(item, kind, skill))
                .collect()
        })
        .unwrap_or_default()
}

fn parse_link(item: &Value, kind: ResourceKind, skill: &str) -> Option<ResourceLink> {
    // Books from the live backend carry `infoLink` instead of `url`.
    let url = ["url", "infoLink"]
        .iter()
        .filter_map(|field| non_blank_str(item.get(*field)))
        .find(|candidate| is_absolute_http_url(candidate));

    let Some(url) = url else {
        debug!("Dropping {:?} resource for '{}' without a usable URL", kind, skill);
        return None;
    };

    let title = non_blank_str(item.get("title")).unwrap_or(skill);

    let mut link = ResourceLink::new(kind, title, url);
    link.thumbnail = non_blank_str(item.get("thumbnail")).map(str::to_string);
    link.provider = non_blank_str(item.get("provider")).map(str::to_string);
    link.description = non_blank_str(item.get("description")).map(str::to_string);
    link.skill = non_blank_str(item.get("skill")).map(str::to_string);
    link.authors = item
        .get("authors")
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(|a| non_blank_str(Some(a)))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Some(link)
}

fn non_blank_str(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn is_absolute_http_url(candidate: &str) -> bool {
    Url::parse(candidate)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn flat_payload() -> Value {
        json!({
            "career": "Data Scientist",
            "skills": ["Python", "SQL", "Statistics"],
            "skill_gap": ["SQL", "Statistics"],
            "playlist": {
                "Python": [
                    {"title": "Python for Beginners", "url": "https://www.youtube.com/watch?v=abc", "thumbnail": "https://i.ytimg.com/abc.jpg"}
                ],
                "SQL": [
                    {"title": "SQL Crash Course", "url": "https://www.youtube.com/watch?v=def"},
                    {"title": "SQL Joins", "url": "https://www.youtube.com/watch?v=ghi"}
                ]
            },
            "books": {
                "SQL": [
                    {"title": "Learning SQL", "authors": ["Alan Beaulieu"], "description": "Intro", "infoLink": "https://books.google.com/books?id=1"}
                ]
            }
        })
    }

    #[test]
    fn test_flat_shape_follows_skills_order_and_gap_membership() {
        let profile = normalize(&flat_payload());
        assert_eq!(profile.career_label, "Data Scientist");
        let flags: Vec<_> = profile
            .skills
            .iter()
            .map(|s| (s.skill.as_str(), s.is_gap))
            .collect();
        assert_eq!(flags, vec![("Python", false), ("SQL", true), ("Statistics", true)]);
    }

    #[test]
    fn test_flat_shape_attaches_resources_per_skill() {
        let profile = normalize(&flat_payload());
        assert_eq!(profile.skills[0].videos.len(), 1);
        assert_eq!(profile.skills[1].videos.len(), 2);
        assert!(profile.skills[2].videos.is_empty());

        let book = &profile.skills[1].books[0];
        assert_eq!(book.url, "https://books.google.com/books?id=1");
        assert_eq!(book.authors, vec!["Alan Beaulieu"]);
        assert_eq!(book.kind, ResourceKind::Book);
    }

    #[test]
    fn test_missing_certifications_map_defaults_to_empty() {
        let profile = normalize(&flat_payload());
        assert_eq!(profile.total_certifications(), 0);
        assert!(profile.skills.iter().all(|s| s.certifications.is_empty()));
    }

    #[test]
    fn test_structured_shape_marks_everything_as_gap() {
        let raw = json!({
            "career": "DevOps Engineer",
            "skills_to_learn": [
                {"skill": "Docker", "videos": [{"title": "Docker 101", "url": "https://youtu.be/1"}], "books": [], "certifications": []},
                {"skill": "Kubernetes"}
            ]
        });
        let profile = normalize(&raw);
        assert_eq!(profile.skills.len(), 2);
        assert!(profile.skills.iter().all(|s| s.is_gap));
        assert_eq!(profile.total_videos(), 1);
    }

    #[test]
    fn test_structured_shape_takes_precedence_over_flat_fields() {
        let raw = json!({
            "career": "Mixed",
            "skills": ["Python"],
            "skills_to_learn": [{"skill": "Go"}]
        });
        let profile = normalize(&raw);
        assert_eq!(profile.skills.len(), 1);
        assert_eq!(profile.skills[0].skill, "Go");
    }

    #[test]
    fn test_counts_in_payload_are_ignored() {
        let raw = json!({
            "career": "QA Engineer",
            "total_skills": 99,
            "skills_gap": 42,
            "totalVideos": 1000,
            "skills_to_learn": [
                {"skill": "Test Automation", "videos": [{"title": "Selenium", "url": "https://youtu.be/s"}]}
            ]
        });
        let stats = normalize(&raw).stats();
        assert_eq!(stats.total_skills, 1);
        assert_eq!(stats.skills_to_learn, 1);
        assert_eq!(stats.total_videos, 1);
    }

    #[test]
    fn test_cross_shape_consistency() {
        let flat = json!({
            "career": "Web Developer",
            "skills": ["React", "Git"],
            "skill_gap": ["React", "Git"],
            "playlist": {"React": [{"title": "React", "url": "https://youtu.be/r"}]},
            "books": {"Git": [{"title": "Pro Git", "infoLink": "https://git-scm.com/book"}]},
            "certifications": {"Git": [{"title": "Git Cert", "url": "https://www.coursera.org/git", "provider": "Coursera"}]}
        });
        let structured = json!({
            "career": "Web Developer",
            "skills_to_learn": [
                {"skill": "React", "videos": [{"title": "React", "url": "https://youtu.be/r"}], "books": [], "certifications": []},
                {"skill": "Git", "videos": [], "books": [{"title": "Pro Git", "infoLink": "https://git-scm.com/book"}],
                 "certifications": [{"title": "Git Cert", "url": "https://www.coursera.org/git", "provider": "Coursera"}]}
            ]
        });

        let a = normalize(&flat);
        let b = normalize(&structured);
        assert_eq!(a.stats(), b.stats());
        assert_eq!(a, b);
    }

    #[test]
    fn test_links_without_absolute_url_are_dropped() {
        let raw = json!({
            "career": "Chef",
            "skills_to_learn": [{
                "skill": "Food Safety",
                "videos": [
                    {"title": "No url"},
                    {"title": "Relative", "url": "/watch?v=1"},
                    {"title": "Not http", "url": "javascript:alert(1)"},
                    {"title": "Good", "url": "https://youtu.be/ok"},
                    "not even an object"
                ]
            }]
        });
        let videos = &normalize(&raw).skills[0].videos;
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].title, "Good");
    }

    #[test]
    fn test_malformed_payloads_degrade_to_empty_profiles() {
        for raw in [
            json!(null),
            json!([]),
            json!("text"),
            json!({}),
            json!({"career": 7, "skills": "Python", "playlist": []}),
            json!({"skills_to_learn": "nope"}),
        ] {
            let profile = normalize(&raw);
            assert!(profile.skills.is_empty(), "{raw}");
            assert_eq!(profile.career_label, "");
        }
    }

    #[test]
    fn test_duplicate_skills_collapse() {
        let raw = json!({
            "career": "Data Analyst",
            "skills": ["SQL", "Excel", "SQL"],
            "skill_gap": ["Excel"]
        });
        let profile = normalize(&raw);
        assert_eq!(profile.skills.len(), 2);
    }

    #[test]
    fn test_missing_title_falls_back_to_skill() {
        let raw = json!({
            "career": "Nurse",
            "skills_to_learn": [{"skill": "Patient Care", "books": [{"infoLink": "https://books.google.com/x"}]}]
        });
        assert_eq!(normalize(&raw).skills[0].books[0].title, "Patient Care");
    }

    #[test]
    fn test_padded_skill_names_keep_gap_flag_and_resources() {
        let payload = json!({
            "skills": [" SQL ", "Python"],
            "skill_gap": [" SQL "],
            "playlist": {
                " SQL ": [{"title": "SQL Crash Course", "url": "https://www.youtube.com/watch?v=def"}]
            },
            "books": {
                "Python ": [{"title": "Fluent Python", "infoLink": "https://books.google.com/books?id=2"}]
            }
        });
        let profile = normalize(&payload);

        assert_eq!(profile.skills[0].skill, "SQL");
        assert!(profile.skills[0].is_gap);
        assert_eq!(profile.skills[0].videos.len(), 1);
        assert!(!profile.skills[1].is_gap);
        assert_eq!(profile.skills[1].books.len(), 1);
    }
}
