use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Video,
    Book,
    Certification,
}

/// A single learning resource. `url` is always an absolute URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceLink {
    pub kind: ResourceKind,
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,
    /// Back-reference to the skill a certification was found for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill: Option<String>,
}

impl ResourceLink {
    pub fn new(kind: ResourceKind, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            url: url.into(),
            thumbnail: None,
            provider: None,
            description: None,
            authors: Vec::new(),
            skill: None,
        }
    }

    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_authors(mut self, authors: Vec<String>) -> Self {
        self.authors = authors;
        self
    }

    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skill = Some(skill.into());
        self
    }
}

/// Resources attached to one skill, grouped by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillResources {
    pub videos: Vec<ResourceLink>,
    pub books: Vec<ResourceLink>,
    pub certifications: Vec<ResourceLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillEntry {
    pub skill: String,
    pub is_gap: bool,
    pub videos: Vec<ResourceLink>,
    pub books: Vec<ResourceLink>,
    /// May legitimately be empty: not every backend reports certifications.
    pub certifications: Vec<ResourceLink>,
}

impl SkillEntry {
    pub fn new(skill: impl Into<String>, is_gap: bool) -> Self {
        Self {
            skill: skill.into(),
            is_gap,
            videos: Vec::new(),
            books: Vec::new(),
            certifications: Vec::new(),
        }
    }
}

/// The canonical rendering model. Skill order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CareerProfile {
    pub career_label: String,
    pub skills: Vec<SkillEntry>,
}

impl CareerProfile {
    /// Builds a profile, keeping only the first entry for any repeated skill name.
    pub fn new(career_label: impl Into<String>, entries: Vec<SkillEntry>) -> Self {
        let mut skills: Vec<SkillEntry> = Vec::with_capacity(entries.len());
        for entry in entries {
            if skills.iter().any(|s| s.skill == entry.skill) {
                continue;
            }
            skills.push(entry);
        }

        Self {
            career_label: career_label.into(),
            skills,
        }
    }

    pub fn skills_to_learn(&self) -> usize {
        self.skills.iter().filter(|s| s.is_gap).count()
    }

    pub fn total_videos(&self) -> usize {
        self.skills.iter().map(|s| s.videos.len()).sum()
    }

    pub fn total_books(&self) -> usize {
        self.skills.iter().map(|s| s.books.len()).sum()
    }

    pub fn total_certifications(&self) -> usize {
        self.skills.iter().map(|s| s.certifications.len()).sum()
    }

    /// Aggregate counts, always derived from the current `skills`.
    pub fn stats(&self) -> ProfileStats {
        ProfileStats {
            total_skills: self.skills.len(),
            skills_to_learn: self.skills_to_learn(),
            total_videos: self.total_videos(),
            total_books: self.total_books(),
            total_certifications: self.total_certifications(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProfileStats {
    pub total_skills: usize,
    pub skills_to_learn: usize,
    pub total_videos: usize,
    pub total_books: usize,
    pub total_certifications: usize,
}
