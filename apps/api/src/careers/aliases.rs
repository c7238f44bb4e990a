/// Informal career abbreviations mapped to a canonical career key.
///
/// A target does not have to be a catalog key: "dev" → "developer" is then
/// resolved by partial matching.
pub const CAREER_ALIASES: &[(&str, &str)] = &[
    ("dev", "developer"),
    ("devops", "devops engineer"),
    ("frontend", "frontend developer"),
    ("backend", "backend developer"),
    ("fullstack", "full stack developer"),
    ("full-stack", "full stack developer"),
    ("ml", "machine learning engineer"),
    ("ai", "ai engineer"),
    ("qa", "qa engineer"),
    ("tester", "qa engineer"),
    ("dba", "database administrator"),
    ("sysadmin", "system administrator"),
    ("netadmin", "network engineer"),
    ("security", "security engineer"),
    ("infosec", "security engineer"),
    ("cybersec", "cybersecurity analyst"),
    ("gamedev", "game developer"),
    ("blockchain", "blockchain developer"),
    ("crypto", "blockchain developer"),
    ("designer", "graphic designer"),
    ("ux", "ui/ux designer"),
    ("ui", "ui/ux designer"),
    ("pm", "product manager"),
    ("scrum", "scrum master"),
    ("marketing", "digital marketer"),
    ("sales", "sales manager"),
    ("hr", "hr manager"),
    ("finance", "financial analyst"),
    ("accounting", "accountant"),
    ("ops", "operations manager"),
    ("nurse", "nurse"),
    ("doctor", "doctor"),
    ("md", "doctor"),
    ("teacher", "teacher"),
    ("prof", "professor"),
    ("chef", "chef"),
    ("cook", "chef"),
    ("architect", "architect"),
    ("lawyer", "lawyer"),
    ("attorney", "lawyer"),
    ("journalist", "journalist"),
    ("reporter", "journalist"),
    ("translator", "translator"),
];

#[derive(Debug, Clone, Copy)]
pub struct AliasTable {
    entries: &'static [(&'static str, &'static str)],
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AliasTable {
    pub const fn builtin() -> Self {
        Self {
            entries: CAREER_ALIASES,
        }
    }

    /// Canonical key for an already-normalized (trimmed, lower-cased) alias.
    pub fn canonical(&self, alias: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(a, _)| *a == alias)
            .map(|(_, target)| *target)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().map(|(a, t)| (*a, *t))
    }
}
