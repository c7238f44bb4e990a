/// Careers offered as type-ahead suggestions.
pub const POPULAR_CAREERS: &[&str] = &[
    "Data Scientist",
    "Frontend Developer",
    "DevOps Engineer",
    "UI/UX Designer",
    "Machine Learning Engineer",
    "Product Manager",
    "Cybersecurity Analyst",
    "Full Stack Developer",
    "Cloud Architect",
    "Mobile Developer",
];

/// Popular careers containing `query` (case-insensitive). Blank query → no suggestions.
pub fn suggest(query: &str) -> Vec<&'static str> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    POPULAR_CAREERS
        .iter()
        .copied()
        .filter(|career| career.to_lowercase().contains(&query))
        .collect()
}
