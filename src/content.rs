use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

pub const EMAIL: &str = "qayyumibrahim.01@gmail.com";
pub const GITHUB_URL: &str = "https://github.com/qayyum-ibrahim";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/qayyum-ibrahim/";

#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
}

pub static NAV_ITEMS: &[NavItem] = &[
    NavItem {
        path: "/",
        label: "Home",
    },
    NavItem {
        path: "/projects",
        label: "Projects",
    },
    NavItem {
        path: "/architecture",
        label: "Architecture",
    },
    NavItem {
        path: "/about",
        label: "About",
    },
    NavItem {
        path: "/contact",
        label: "Contact",
    },
];

pub static HERO_TECH: &[&str] = &[
    "Node.js",
    "TypeScript",
    "Redis",
    "MongoDB",
    "PostgreSQL",
    "React",
    "Docker",
];

pub static CONTACT_SUBJECTS: &[&str] = &[
    "Project Inquiry",
    "Contract Work",
    "Full-Time Opportunity",
    "Other",
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ExperienceEntry {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

pub static EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        role: "Senior Backend Engineer",
        company: "TechStartup Inc.",
        period: "2022 - Present",
        description: "Led the migration from a monolithic architecture to microservices. Improved API response times by 40% through aggressive caching strategies and database indexing.",
    },
    ExperienceEntry {
        role: "Full Stack Developer",
        company: "Digital Solutions Ltd",
        period: "2019 - 2022",
        description: "Built and maintained multiple client SaaS products. Responsible for the entire SDLC, from requirement gathering to deployment on AWS.",
    },
    ExperienceEntry {
        role: "Junior Developer",
        company: "WebAgency",
        period: "2017 - 2019",
        description: "Started my journey building custom WordPress themes and plugins, eventually moving to custom React/Node.js applications.",
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub static SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Backend Core",
        skills: &["Node.js", "Express", "NestJS", "Python", "Go (Basic)"],
    },
    SkillGroup {
        title: "Databases & Data",
        skills: &[
            "PostgreSQL",
            "MongoDB",
            "Redis",
            "ElasticSearch",
            "TypeORM",
            "Prisma",
        ],
    },
    SkillGroup {
        title: "Frontend",
        skills: &["React", "TypeScript", "TailwindCSS", "Next.js", "Vite"],
    },
    SkillGroup {
        title: "DevOps & Cloud",
        skills: &[
            "Docker",
            "Kubernetes",
            "AWS (EC2, S3, RDS)",
            "CI/CD (GitHub Actions)",
            "Linux",
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Flagship,
    Architecture,
    Frontend,
}

/// The closed set of tabs on the projects page. `All` is a view-level
/// selection, not a catalog category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Flagship,
    Architecture,
    Frontend,
}

impl CategoryFilter {
    pub const ALL: [CategoryFilter; 4] = [
        Self::All,
        Self::Flagship,
        Self::Architecture,
        Self::Frontend,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Work",
            Self::Flagship => "Flagship",
            Self::Architecture => "Backend Systems",
            Self::Frontend => "Frontend",
        }
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Flagship => category == Category::Flagship,
            Self::Architecture => category == Category::Architecture,
            Self::Frontend => category == Category::Frontend,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ProjectLinks {
    pub demo: Option<&'static str>,
    pub github: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProjectEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub category: Category,
    pub kind: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub features: &'static [&'static str],
    pub details: Option<&'static str>,
    pub links: ProjectLinks,
}

pub const FLAGSHIP_ID: &str = "univibe";

pub static PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        id: "univibe",
        title: "Univibe",
        category: Category::Flagship,
        kind: "Full-Stack System",
        description: "A comprehensive event ticketing and management platform designed for high-concurrency ticket sales.",
        tech: &["Node.js", "Express", "MongoDB", "Redis", "BullMQ", "React"],
        features: &[
            "Real-time seat reservation with Redis locking",
            "Automated payout workflows for organizers",
            "QR code generation and scanning system",
            "Role-based access control (RBAC)",
        ],
        details: None,
        links: ProjectLinks {
            demo: Some("http://univibe.ng/"),
            github: Some("https://github.com/qayyum-ibrahim/temp-univibe"),
        },
    },
    ProjectEntry {
        id: "saas-arch",
        title: "Multi-Tenant SaaS Architecture",
        category: Category::Architecture,
        kind: "System Design",
        description: "Database-per-tenant isolation strategy implementation for a B2B platform.",
        tech: &["PostgreSQL", "Docker", "Nginx", "Node.js"],
        features: &[],
        details: Some("Implemented strict data isolation using row-level security and separate schemas. Designed the onboarding flow that automatically provisions resources."),
        links: ProjectLinks {
            demo: None,
            github: Some("#"),
        },
    },
    ProjectEntry {
        id: "payment-ledger",
        title: "Double-Entry Ledger System",
        category: Category::Architecture,
        kind: "Backend Core",
        description: "Immutable financial transaction system for a fintech MVP.",
        tech: &["TypeScript", "SQL", "Acid Transactions"],
        features: &[],
        details: Some("Designed a ledger system that guarantees zero-sum balance across all accounts, handling race conditions during high-volume transfers."),
        links: ProjectLinks {
            demo: None,
            github: Some("#"),
        },
    },
    ProjectEntry {
        id: "job-queue",
        title: "Distributed Job Queue Service",
        category: Category::Architecture,
        kind: "Infrastructure",
        description: "Scalable background processing system for image resizing and email notifications.",
        tech: &["Redis", "BullMQ", "Kubernetes"],
        features: &[],
        details: Some("Decoupled heavy processing from the main API, improving response times by 80%. Implemented exponential backoff for failed jobs."),
        links: ProjectLinks {
            demo: None,
            github: Some("#"),
        },
    },
    ProjectEntry {
        id: "dashboard-ui",
        title: "Analytics Dashboard",
        category: Category::Frontend,
        kind: "Frontend Interface",
        description: "High-performance analytics dashboard with real-time data visualization.",
        tech: &["React", "D3.js", "TailwindCSS"],
        features: &[],
        details: None,
        links: ProjectLinks {
            demo: Some("#"),
            github: Some("#"),
        },
    },
    ProjectEntry {
        id: "marketing-site",
        title: "SaaS Landing Page",
        category: Category::Frontend,
        kind: "Marketing Site",
        description: "Conversion-optimized landing page with smooth enter animations.",
        tech: &["Astro", "React", "Framer Motion"],
        features: &[],
        details: None,
        links: ProjectLinks {
            demo: Some("#"),
            github: None,
        },
    },
];

/// Ordered sub-sequence of the catalog whose category matches the filter.
/// Catalog-definition order is preserved, no re-sort.
pub fn filtered_projects(filter: CategoryFilter) -> Vec<&'static ProjectEntry> {
    PROJECTS
        .iter()
        .filter(|p| filter.matches(p.category))
        .collect()
}

pub fn featured_project() -> &'static ProjectEntry {
    PROJECTS
        .iter()
        .find(|p| p.category == Category::Flagship)
        .expect("catalog should contain a flagship project")
}

/// The featured section is shown only for the `All` and `Flagship` tabs.
pub fn shows_featured(filter: CategoryFilter) -> bool {
    filter.matches(Category::Flagship)
}

/// Grid entries for the active filter. The flagship project is always
/// carried by the featured section, so it never appears here.
pub fn grid_projects(filter: CategoryFilter) -> Vec<&'static ProjectEntry> {
    PROJECTS
        .iter()
        .filter(|p| filter.matches(p.category) && p.id != FLAGSHIP_ID)
        .collect()
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("duplicate project id: {0}")]
    DuplicateId(String),
    #[error("expected exactly one flagship project, found {0}")]
    FlagshipCount(usize),
}

pub fn validate_catalog(projects: &[ProjectEntry]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for p in projects {
        if !seen.insert(p.id) {
            return Err(CatalogError::DuplicateId(p.id.to_string()));
        }
    }
    let flagships = projects
        .iter()
        .filter(|p| p.category == Category::Flagship)
        .count();
    if flagships != 1 {
        return Err(CatalogError::FlagshipCount(flagships));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(projects: &[&'static ProjectEntry]) -> Vec<&'static str> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn catalog_is_valid() {
        validate_catalog(PROJECTS).expect("shipped catalog should validate");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut doubled = PROJECTS.to_vec();
        doubled.push(PROJECTS[0]);
        assert!(matches!(
            validate_catalog(&doubled),
            Err(CatalogError::DuplicateId(id)) if id == "univibe"
        ));
    }

    #[test]
    fn missing_flagship_is_rejected() {
        let rest = PROJECTS
            .iter()
            .filter(|p| p.category != Category::Flagship)
            .copied()
            .collect::<Vec<_>>();
        assert!(matches!(
            validate_catalog(&rest),
            Err(CatalogError::FlagshipCount(0))
        ));
    }

    #[test]
    fn all_filter_returns_whole_catalog_in_order() {
        let all = filtered_projects(CategoryFilter::All);
        assert_eq!(
            ids(&all),
            PROJECTS.iter().map(|p| p.id).collect::<Vec<_>>()
        );
    }

    #[test]
    fn filters_return_only_matching_entries_in_order() {
        for filter in CategoryFilter::ALL {
            let expected = PROJECTS
                .iter()
                .filter(|p| filter.matches(p.category))
                .map(|p| p.id)
                .collect::<Vec<_>>();
            assert_eq!(ids(&filtered_projects(filter)), expected);
        }
    }

    #[test]
    fn featured_is_visible_for_all_and_flagship_only() {
        assert!(shows_featured(CategoryFilter::All));
        assert!(shows_featured(CategoryFilter::Flagship));
        assert!(!shows_featured(CategoryFilter::Architecture));
        assert!(!shows_featured(CategoryFilter::Frontend));
    }

    #[test]
    fn featured_never_appears_in_grid() {
        for filter in CategoryFilter::ALL {
            assert!(grid_projects(filter).iter().all(|p| p.id != FLAGSHIP_ID));
        }
    }

    #[test]
    fn default_grid_shows_five_non_flagship_entries() {
        assert_eq!(grid_projects(CategoryFilter::All).len(), 5);
        assert_eq!(featured_project().id, FLAGSHIP_ID);
    }

    #[test]
    fn hero_lists_seven_technologies() {
        assert_eq!(HERO_TECH.len(), 7);
    }

    #[test]
    fn nav_covers_the_five_routes() {
        let paths = NAV_ITEMS.iter().map(|n| n.path).collect::<Vec<_>>();
        assert_eq!(
            paths,
            ["/", "/projects", "/architecture", "/about", "/contact"]
        );
    }

    #[test]
    fn tab_labels_match_site_copy() {
        let labels = CategoryFilter::ALL.map(CategoryFilter::label);
        assert_eq!(
            labels,
            ["All Work", "Flagship", "Backend Systems", "Frontend"]
        );
    }
}
