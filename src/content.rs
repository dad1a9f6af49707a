//! Projects and skills shown on the page.

use strum::{AsRefStr, Display, EnumString, IntoStaticStr, VariantArray};

pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub status: &'static str,
    pub kind: &'static str,
    pub role: &'static str,
    pub duration: &'static str,
    pub technologies: &'static [&'static str],
    pub features: &'static [Feature],
    pub additional_work: Option<&'static str>,
    pub link: &'static str,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    EnumString,
    Display,
    AsRefStr,
    IntoStaticStr,
    VariantArray,
)]
#[strum(serialize_all = "lowercase")]
pub enum SkillCategory {
    #[default]
    All,
    Frontend,
    Backend,
    Tools,
}

impl SkillCategory {
    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::All => "All",
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Tools => "Tools",
        }
    }

    fn includes(&self, other: SkillCategory) -> bool {
        *self == SkillCategory::All || *self == other
    }
}

pub struct Technology {
    pub name: &'static str,
    pub category: SkillCategory,
}

pub static PROJECTS: &[Project] = &[
    Project {
        title: "ICS Next Build Corp",
        description: "A comprehensive website for a construction company with dynamic content and management system.",
        status: "Completed",
        kind: "Freelance",
        role: "Full Stack Developer",
        duration: "April 2025 - June 2025",
        technologies: &[
            "React",
            "Next.js",
            "Node.js",
            "JWT",
            "SCSS",
            "Upstash Redis",
            "Google API",
            "Godaddy (Email)",
        ],
        features: &[
            Feature {
                title: "User Authentication",
                description: "Secure admin login system with JWT tokens and role-based access control.",
            },
            Feature {
                title: "Dynamic Content",
                description: "Dynamic project showcases, and company updates with real-time updates.",
            },
            Feature {
                title: "Content Management",
                description: "Admin panel for managing projects, services, team members, and company information.",
            },
            Feature {
                title: "Project Portfolio",
                description: "Interactive project gallery with filtering by category and detailed project pages.",
            },
            Feature {
                title: "Contact System",
                description: "Contact forms with email notifications and inquiry management system.",
            },
            Feature {
                title: "Responsive Design",
                description: "Mobile-first responsive design optimized for all devices and screen sizes.",
            },
        ],
        additional_work: Some(
            "Implemented additional features including SEO optimization, image optimization, contact form automation, and comprehensive admin analytics dashboard for content performance tracking.",
        ),
        link: "https://icsnextbuildcorp.com",
    },
    Project {
        title: "St. Gabrielle HRS",
        description: "A comprehensive human resources solutions website with job listings, inquiry forms, and partner showcase for a recruitment firm.",
        status: "Completed",
        kind: "Freelance",
        role: "Frontend Developer",
        duration: "October 2023 - February 2024",
        technologies: &["Next.js", "React", "SCSS", "HTML", "JavaScript"],
        features: &[
            Feature {
                title: "Wireframe Design",
                description: "Created comprehensive wireframes and design mockups using Figma for the entire website structure and user flow.",
            },
            Feature {
                title: "Responsive Design",
                description: "Mobile-first responsive design ensuring optimal user experience across all devices and screen sizes.",
            },
            Feature {
                title: "Job Selection System",
                description: "Interactive job listings with filtering, search functionality, and detailed job descriptions for career opportunities.",
            },
            Feature {
                title: "Google Sheets Integration",
                description: "Contact forms and inquiry submissions automatically saved to Google Sheets for efficient lead management.",
            },
            Feature {
                title: "Partner Showcase",
                description: "Dynamic partner logos and company showcase section highlighting business relationships and credibility.",
            },
            Feature {
                title: "Modern UI/UX",
                description: "Contemporary design with smooth animations and intuitive navigation for optimal user engagement.",
            },
        ],
        additional_work: None,
        link: "https://stgabriellehrs.com/",
    },
];

pub static TECHNOLOGIES: &[Technology] = &[
    Technology { name: "React", category: SkillCategory::Frontend },
    Technology { name: "TypeScript", category: SkillCategory::Frontend },
    Technology { name: "JavaScript", category: SkillCategory::Frontend },
    Technology { name: "Next.js", category: SkillCategory::Frontend },
    Technology { name: "HTML5", category: SkillCategory::Frontend },
    Technology { name: "CSS3", category: SkillCategory::Frontend },
    Technology { name: "SCSS", category: SkillCategory::Frontend },
    Technology { name: "Tailwind", category: SkillCategory::Frontend },
    Technology { name: "Bootstrap", category: SkillCategory::Frontend },
    Technology { name: "React Bootstrap", category: SkillCategory::Frontend },
    Technology { name: "Node.js", category: SkillCategory::Backend },
    Technology { name: "Express.js", category: SkillCategory::Backend },
    Technology { name: "Python", category: SkillCategory::Backend },
    Technology { name: "FastAPI", category: SkillCategory::Backend },
    Technology { name: "WebSockets", category: SkillCategory::Backend },
    Technology { name: "Redis", category: SkillCategory::Backend },
    Technology { name: "REST API", category: SkillCategory::Backend },
    Technology { name: "Git", category: SkillCategory::Tools },
    Technology { name: "GitHub", category: SkillCategory::Tools },
    Technology { name: "Github Actions", category: SkillCategory::Tools },
    Technology { name: "Docker", category: SkillCategory::Tools },
    Technology { name: "AWS", category: SkillCategory::Tools },
    Technology { name: "Figma", category: SkillCategory::Tools },
    Technology { name: "Vercel", category: SkillCategory::Tools },
];

pub static ADDITIONAL_SKILLS: &[&str] = &[
    "Responsive Design",
    "Performance Optimization",
    "Agile Development",
    "CI/CD",
    "Testing",
    "Code Review",
    "Documentation",
    "Team Collaboration",
];

/// Project at `index`, or the first one when out of range.
pub fn project(index: usize) -> (usize, &'static Project) {
    match PROJECTS.get(index) {
        Some(project) => (index, project),
        None => (0, &PROJECTS[0]),
    }
}

pub fn technologies(category: SkillCategory) -> Vec<&'static Technology> {
    TECHNOLOGIES
        .iter()
        .filter(|tech| category.includes(tech.category))
        .collect()
}
