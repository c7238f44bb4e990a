//! Built-in career → skill catalog.
//!
//! Iteration order is the definition order below and is part of the contract:
//! partial matching returns the first entry that matches, so an earlier key wins
//! over a later one (e.g. "data scientist" before "data engineer").

/// Required skills per canonical career key, in display order.
pub const CAREER_SKILLS: &[(&str, &[&str])] = &[
    ("data scientist", &["Python", "Statistics", "Machine Learning", "SQL", "Data Visualization"]),
    ("web developer", &["HTML/CSS", "JavaScript", "React", "APIs", "Git"]),
    (
        "machine learning engineer",
        &["Python", "Deep Learning", "Model Deployment", "Data Engineering", "MLOps"],
    ),
    (
        "ui/ux designer",
        &["Design Fundamentals", "Figma", "User Research", "Prototyping", "Accessibility"],
    ),
    (
        "software engineer",
        &["Programming", "Data Structures", "Algorithms", "System Design", "Testing"],
    ),
    ("devops engineer", &["Linux", "Docker", "Kubernetes", "CI/CD", "Cloud Platforms"]),
    (
        "product manager",
        &[
            "Product Strategy",
            "User Research",
            "Data Analysis",
            "Roadmapping",
            "Stakeholder Management",
        ],
    ),
    (
        "cybersecurity analyst",
        &[
            "Network Security",
            "Incident Response",
            "Risk Assessment",
            "Security Tools",
            "Compliance",
        ],
    ),
    (
        "mobile developer",
        &["Mobile Frameworks", "UI/UX Design", "APIs", "App Store Optimization", "Testing"],
    ),
    (
        "cloud architect",
        &[
            "Cloud Platforms",
            "Architecture Design",
            "Security",
            "Cost Optimization",
            "Migration Strategies",
        ],
    ),
    ("full stack developer", &["Frontend", "Backend", "Databases", "APIs", "Version Control"]),
    (
        "frontend developer",
        &[
            "HTML/CSS",
            "JavaScript",
            "React/Vue/Angular",
            "Responsive Design",
            "Performance Optimization",
        ],
    ),
    (
        "backend developer",
        &["Server Languages", "Databases", "API Design", "Security", "Performance"],
    ),
    (
        "qa engineer",
        &[
            "Test Automation",
            "Manual Testing",
            "Bug Tracking",
            "Test Planning",
            "Quality Assurance",
        ],
    ),
    (
        "database administrator",
        &["SQL", "Database Design", "Performance Tuning", "Backup & Recovery", "Security"],
    ),
    (
        "system administrator",
        &["Linux/Windows", "Networking", "Monitoring", "Troubleshooting", "Automation"],
    ),
    (
        "network engineer",
        &[
            "Networking Protocols",
            "Router/Switch Config",
            "Security",
            "Troubleshooting",
            "Network Design",
        ],
    ),
    (
        "security engineer",
        &[
            "Security Architecture",
            "Penetration Testing",
            "Incident Response",
            "Compliance",
            "Risk Management",
        ],
    ),
    (
        "game developer",
        &["Game Engines", "Programming", "3D Graphics", "Game Design", "Performance Optimization"],
    ),
    (
        "blockchain developer",
        &["Smart Contracts", "Cryptocurrency", "Distributed Systems", "Cryptography", "Web3"],
    ),
    (
        "ai engineer",
        &[
            "Machine Learning",
            "Deep Learning",
            "Neural Networks",
            "Data Processing",
            "Model Deployment",
        ],
    ),
    ("data engineer", &["ETL Pipelines", "Big Data", "Data Warehousing", "SQL", "Cloud Platforms"]),
    (
        "data analyst",
        &["SQL", "Excel", "Data Visualization", "Statistics", "Business Intelligence"],
    ),
    (
        "business analyst",
        &[
            "Requirements Analysis",
            "Process Mapping",
            "Data Analysis",
            "Documentation",
            "Stakeholder Management",
        ],
    ),
    (
        "graphic designer",
        &["Adobe Creative Suite", "Typography", "Color Theory", "Brand Design", "Print Design"],
    ),
    ("web designer", &["UI Design", "Responsive Design", "CSS", "Design Tools", "User Experience"]),
    (
        "video editor",
        &[
            "Video Editing Software",
            "Color Grading",
            "Audio Editing",
            "Motion Graphics",
            "Storytelling",
        ],
    ),
    ("3d artist", &["3D Modeling", "Texturing", "Lighting", "Animation", "Rendering"]),
    (
        "photographer",
        &["Camera Operation", "Lighting", "Photo Editing", "Composition", "Portfolio Development"],
    ),
    (
        "content creator",
        &["Content Strategy", "Video Production", "Social Media", "SEO", "Analytics"],
    ),
    (
        "copywriter",
        &["Writing Skills", "SEO Writing", "Brand Voice", "Content Strategy", "Research"],
    ),
    (
        "social media manager",
        &[
            "Social Media Strategy",
            "Content Creation",
            "Analytics",
            "Community Management",
            "Advertising",
        ],
    ),
    (
        "digital marketer",
        &["SEO/SEM", "Social Media Marketing", "Analytics", "Content Marketing", "Email Marketing"],
    ),
    (
        "sales manager",
        &["Sales Strategy", "CRM Systems", "Lead Generation", "Negotiation", "Team Management"],
    ),
    (
        "project manager",
        &["Project Planning", "Risk Management", "Team Leadership", "Agile/Scrum", "Communication"],
    ),
    (
        "scrum master",
        &[
            "Agile Methodologies",
            "Team Facilitation",
            "Sprint Planning",
            "Stakeholder Management",
            "Continuous Improvement",
        ],
    ),
    (
        "hr manager",
        &[
            "Recruitment",
            "Employee Relations",
            "Performance Management",
            "HR Policies",
            "Training & Development",
        ],
    ),
    (
        "financial analyst",
        &["Financial Modeling", "Excel", "Data Analysis", "Forecasting", "Investment Analysis"],
    ),
    (
        "accountant",
        &[
            "Accounting Principles",
            "Tax Preparation",
            "Financial Reporting",
            "Auditing",
            "Software Proficiency",
        ],
    ),
    (
        "operations manager",
        &[
            "Process Optimization",
            "Supply Chain",
            "Quality Control",
            "Team Management",
            "Cost Analysis",
        ],
    ),
    (
        "consultant",
        &[
            "Problem Solving",
            "Client Management",
            "Industry Knowledge",
            "Presentation Skills",
            "Research",
        ],
    ),
    (
        "nurse",
        &["Patient Care", "Medical Knowledge", "Communication", "Critical Thinking", "Empathy"],
    ),
    (
        "doctor",
        &[
            "Medical Diagnosis",
            "Patient Care",
            "Medical Knowledge",
            "Communication",
            "Decision Making",
        ],
    ),
    (
        "pharmacist",
        &[
            "Pharmaceutical Knowledge",
            "Patient Counseling",
            "Drug Interactions",
            "Precision",
            "Communication",
        ],
    ),
    (
        "physical therapist",
        &[
            "Anatomy Knowledge",
            "Treatment Planning",
            "Patient Assessment",
            "Manual Therapy",
            "Communication",
        ],
    ),
    (
        "teacher",
        &[
            "Curriculum Development",
            "Classroom Management",
            "Student Assessment",
            "Communication",
            "Subject Expertise",
        ],
    ),
    (
        "professor",
        &["Research", "Teaching", "Academic Writing", "Grant Writing", "Subject Expertise"],
    ),
    (
        "instructional designer",
        &[
            "Learning Theory",
            "Curriculum Design",
            "E-learning Tools",
            "Assessment Design",
            "Research",
        ],
    ),
    (
        "chef",
        &["Culinary Skills", "Food Safety", "Menu Planning", "Kitchen Management", "Creativity"],
    ),
    (
        "architect",
        &[
            "Design Software",
            "Building Codes",
            "Project Management",
            "3D Visualization",
            "Structural Knowledge",
        ],
    ),
    (
        "civil engineer",
        &[
            "Structural Analysis",
            "CAD Software",
            "Project Management",
            "Construction Knowledge",
            "Problem Solving",
        ],
    ),
    (
        "mechanical engineer",
        &[
            "CAD Design",
            "Thermodynamics",
            "Materials Science",
            "Problem Solving",
            "Project Management",
        ],
    ),
    (
        "electrical engineer",
        &["Circuit Design", "Programming", "Signal Processing", "Problem Solving", "Testing"],
    ),
    ("lawyer", &["Legal Research", "Writing", "Critical Thinking", "Negotiation", "Case Analysis"]),
    ("journalist", &["Writing", "Research", "Interviewing", "Fact Checking", "Storytelling"]),
    (
        "translator",
        &[
            "Language Proficiency",
            "Cultural Knowledge",
            "Writing Skills",
            "Research",
            "Attention to Detail",
        ],
    ),
];

/// Skills returned when a career matches nothing in the catalog.
pub const DEFAULT_SKILLS: &[&str] = &[
    "Research & Learning",
    "Problem Solving",
    "Communication",
    "Teamwork",
    "Industry Knowledge",
];

/// Read-only view over a career → skills table.
#[derive(Debug, Clone, Copy)]
pub struct SkillCatalog {
    entries: &'static [(&'static str, &'static [&'static str])],
    default_skills: &'static [&'static str],
}

impl Default for SkillCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SkillCatalog {
    pub const fn builtin() -> Self {
        Self {
            entries: CAREER_SKILLS,
            default_skills: DEFAULT_SKILLS,
        }
    }

    /// Exact lookup by canonical (lower-cased) career key.
    pub fn entry(&self, key: &str) -> Option<(&'static str, &'static [&'static str])> {
        self.iter().find(|(k, _)| *k == key)
    }

    /// Entries in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static [&'static str])> + '_ {
        self.entries.iter().map(|(k, skills)| (*k, *skills))
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn default_skills(&self) -> &'static [&'static str] {
        self.default_skills
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
