//! Resource Synthesizer — deterministic search-link placeholders for offline mode.
//!
//! Output depends only on the skill name: no clock, no randomness, no lookups.
//! These are search queries, not curated content.

use crate::models::profile::{ResourceKind, ResourceLink, SkillResources};

const VIDEO_SEARCH_URL: &str = "https://www.youtube.com/results?search_query=";
const VIDEO_THUMBNAIL: &str = "https://www.youtube.com/img/desktop/yt_1200.png";
const BOOK_SEARCH_URL: &str = "https://books.google.com/books?q=";
const BOOK_THUMBNAIL: &str = "https://books.google.com/googlebooks/images/no_cover_thumb.gif";
const COURSERA_SEARCH_URL: &str = "https://www.coursera.org/search?query=";
const EDX_SEARCH_URL: &str = "https://www.edx.org/search?q=";

/// Two videos, one book and two certifications for `skill`.
pub fn synthesize(skill: &str) -> SkillResources {
    let query = search_query(skill);

    SkillResources {
        videos: synthesize_videos(skill, &query),
        books: synthesize_books(skill, &query),
        certifications: synthesize_certifications(skill, &query),
    }
}

/// Words are URL-encoded individually and joined with `+`.
fn search_query(skill: &str) -> String {
    skill
        .split_whitespace()
        .map(|word| urlencoding::encode(word).into_owned())
        .collect::<Vec<_>>()
        .join("+")
}

fn synthesize_videos(skill: &str, query: &str) -> Vec<ResourceLink> {
    vec![
        ResourceLink::new(
            ResourceKind::Video,
            format!("{skill} Tutorial - YouTube Search"),
            format!("{VIDEO_SEARCH_URL}{query}+tutorial"),
        )
        .with_thumbnail(VIDEO_THUMBNAIL),
        ResourceLink::new(
            ResourceKind::Video,
            format!("Learn {skill} - Free Courses"),
            format!("{VIDEO_SEARCH_URL}{query}+course+free"),
        )
        .with_thumbnail(VIDEO_THUMBNAIL),
    ]
}

fn synthesize_books(skill: &str, query: &str) -> Vec<ResourceLink> {
    vec![ResourceLink::new(
        ResourceKind::Book,
        format!("{skill} Books - Google Books"),
        format!("{BOOK_SEARCH_URL}{query}+programming"),
    )
    .with_thumbnail(BOOK_THUMBNAIL)
    .with_authors(vec!["Various Authors".to_string()])
    .with_description(format!(
        "Find comprehensive {skill} books and learning materials."
    ))]
}

fn synthesize_certifications(skill: &str, query: &str) -> Vec<ResourceLink> {
    vec![
        ResourceLink::new(
            ResourceKind::Certification,
            format!("{skill} Professional Certification - Coursera"),
            format!("{COURSERA_SEARCH_URL}{query}+certification"),
        )
        .with_provider("Coursera")
        .with_description(format!(
            "Find professional {skill} certifications from top universities and companies."
        ))
        .with_skill(skill),
        ResourceLink::new(
            ResourceKind::Certification,
            format!("{skill} Certificate Programs - edX"),
            format!("{EDX_SEARCH_URL}{query}+certificate"),
        )
        .with_provider("edX")
        .with_description(format!(
            "Explore verified {skill} certificate programs from leading institutions."
        ))
        .with_skill(skill),
    ]
}
