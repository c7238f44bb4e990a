//! Career Resolver — turns free-text career input into an ordered skill list.
//!
//! Cascade, first match wins:
//! 1. normalize (trim + lower-case)
//! 2. alias substitution ("devops" → "devops engineer")
//! 3. exact catalog key
//! 4. partial match in catalog order, substring in either direction
//! 5. default skill set

use tracing::debug;

use crate::careers::aliases::AliasTable;
use crate::careers::catalog::SkillCatalog;

/// How a career string was matched. Reported for transparency only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Direct,
    Partial,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Catalog key that supplied the skills; `None` for the default set.
    pub career_key: Option<&'static str>,
    pub match_kind: MatchKind,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CareerResolver {
    aliases: AliasTable,
    catalog: SkillCatalog,
}

impl CareerResolver {
    pub fn new(aliases: AliasTable, catalog: SkillCatalog) -> Self {
        Self { aliases, catalog }
    }

    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Ordered skills for a career. Never fails; falls back to the default set.
    pub fn resolve(&self, raw_career: &str) -> Vec<String> {
        let resolution = self.resolve_detailed(raw_career);
        debug!(
            "Resolved career '{}' to {:?} ({:?} match)",
            raw_career.trim(),
            resolution.career_key,
            resolution.match_kind
        );
        resolution.skills
    }

    pub fn resolve_detailed(&self, raw_career: &str) -> Resolution {
        let normalized = raw_career.trim().to_lowercase();

        // Blank input would substring-match every key.
        if normalized.is_empty() {
            return self.default_resolution();
        }

        let key = self
            .aliases
            .canonical(&normalized)
            .map(str::to_string)
            .unwrap_or(normalized);

        if let Some((catalog_key, skills)) = self.catalog.entry(&key) {
            return Self::resolution(catalog_key, MatchKind::Direct, skills);
        }

        let partial = self
            .catalog
            .iter()
            .find(|(catalog_key, _)| key.contains(catalog_key) || catalog_key.contains(&key));

        match partial {
            Some((catalog_key, skills)) => Self::resolution(catalog_key, MatchKind::Partial, skills),
            None => self.default_resolution(),
        }
    }

    fn resolution(key: &'static str, match_kind: MatchKind, skills: &[&str]) -> Resolution {
        Resolution {
            career_key: Some(key),
            match_kind,
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn default_resolution(&self) -> Resolution {
        Resolution {
            career_key: None,
            match_kind: MatchKind::Default,
            skills: self
                .catalog
                .default_skills()
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
