// SPDX-License-Identifier: MPL-2.0
//! Compiled-in presentation data.
//!
//! Everything here is hand-authored content: the pages render these slices
//! directly and look up display strings through the localization store.
//! Copy that exists in both languages lives in the translation tables and is
//! referenced by key; one-language editorial copy (team bios, project case
//! studies, plan feature lists) is kept as literals, as on the original site.

/// A service offering shown on the home page grid.
#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub title_key: &'static str,
    pub desc_key: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title_key: "service-web-title",
        desc_key: "service-web-desc",
    },
    Service {
        title_key: "service-uiux-title",
        desc_key: "service-uiux-desc",
    },
    Service {
        title_key: "service-mobile-title",
        desc_key: "service-mobile-desc",
    },
    Service {
        title_key: "service-ecommerce-title",
        desc_key: "service-ecommerce-desc",
    },
    Service {
        title_key: "service-fintech-title",
        desc_key: "service-fintech-desc",
    },
    Service {
        title_key: "service-consulting-title",
        desc_key: "service-consulting-desc",
    },
];

/// A headline figure shown in the hero stats row.
#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub value: &'static str,
    pub label_key: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat {
        value: "5+",
        label_key: "stats-years",
    },
    Stat {
        value: "50+",
        label_key: "stats-projects",
    },
    Stat {
        value: "40+",
        label_key: "stats-clients",
    },
    Stat {
        value: "98%",
        label_key: "stats-satisfaction",
    },
];

/// Translation keys for the company values on the about page.
pub const VALUE_KEYS: &[&str] = &[
    "about-value-innovation",
    "about-value-reliability",
    "about-value-client",
];

#[derive(Debug, Clone, Copy)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
}

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Alex Morgan",
        role: "CEO & Founder",
        bio: "Visionary leader with 10+ years in digital strategy and innovation.",
    },
    TeamMember {
        name: "Sarah Chen",
        role: "Lead Developer",
        bio: "Full-stack expert specializing in fintech and secure applications.",
    },
    TeamMember {
        name: "Michael Park",
        role: "UX Director",
        bio: "Award-winning designer focused on human-centered experiences.",
    },
    TeamMember {
        name: "Emma Wilson",
        role: "Project Manager",
        bio: "Agile specialist ensuring seamless project delivery and client success.",
    },
];

/// Industry sectors the portfolio is organized by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCategory {
    Fintech,
    Commercial,
    Social,
    Ecological,
}

impl ProjectCategory {
    pub const ALL: &'static [ProjectCategory] = &[
        ProjectCategory::Fintech,
        ProjectCategory::Commercial,
        ProjectCategory::Social,
        ProjectCategory::Ecological,
    ];

    /// Translation key for the category's display name.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ProjectCategory::Fintech => "portfolio-filter-fintech",
            ProjectCategory::Commercial => "portfolio-filter-commercial",
            ProjectCategory::Social => "portfolio-filter-social",
            ProjectCategory::Ecological => "portfolio-filter-ecological",
        }
    }
}

/// A delivered project shown in the portfolio grid.
#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub name: &'static str,
    pub client: &'static str,
    pub category: ProjectCategory,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub duration: &'static str,
    pub outcome: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        name: "SecureBank Pro",
        client: "FinVest Holdings",
        category: ProjectCategory::Fintech,
        description: "Developed a secure fintech platform for seamless transactions, integrating blockchain for enhanced security.",
        technologies: &["React", "Node.js", "Blockchain", "PostgreSQL"],
        duration: "6 months",
        outcome: "40% increase in transaction efficiency",
    },
    Project {
        name: "GreenEarth Tracker",
        client: "EcoVentures Ltd",
        category: ProjectCategory::Ecological,
        description: "Built a carbon footprint tracking app helping businesses monitor and reduce their environmental impact.",
        technologies: &["Vue.js", "Python", "MongoDB", "AWS"],
        duration: "4 months",
        outcome: "Used by 200+ companies worldwide",
    },
    Project {
        name: "CommunityHub",
        client: "Global Aid Network",
        category: ProjectCategory::Social,
        description: "Created an NGO platform connecting volunteers with community projects and tracking impact metrics.",
        technologies: &["Next.js", "Supabase", "Tailwind", "Stripe"],
        duration: "5 months",
        outcome: "10,000+ volunteers connected",
    },
    Project {
        name: "RetailMax",
        client: "Commerce Giants Inc",
        category: ProjectCategory::Commercial,
        description: "Designed a comprehensive e-commerce solution with inventory management and analytics dashboard.",
        technologies: &["React", "GraphQL", "Redis", "Kubernetes"],
        duration: "8 months",
        outcome: "150% revenue growth for client",
    },
    Project {
        name: "PayFlow",
        client: "Digital Payments Co",
        category: ProjectCategory::Fintech,
        description: "Revolutionary payment processing system with real-time fraud detection and multi-currency support.",
        technologies: &["TypeScript", "Go", "Kafka", "PostgreSQL"],
        duration: "10 months",
        outcome: "$5M+ transactions processed daily",
    },
    Project {
        name: "SolarConnect",
        client: "RenewPower Systems",
        category: ProjectCategory::Ecological,
        description: "IoT platform for monitoring solar panel efficiency and predictive maintenance scheduling.",
        technologies: &["React Native", "Python", "TensorFlow", "AWS IoT"],
        duration: "7 months",
        outcome: "25% improved energy efficiency",
    },
];

/// A pricing tier shown on the pricing page.
#[derive(Debug, Clone, Copy)]
pub struct PricingPlan {
    pub title_key: &'static str,
    pub desc_key: &'static str,
    pub price: &'static str,
    pub popular: bool,
    pub features: &'static [&'static str],
}

pub const PLANS: &[PricingPlan] = &[
    PricingPlan {
        title_key: "pricing-basic-title",
        desc_key: "pricing-basic-desc",
        price: "$2,000",
        popular: false,
        features: &[
            "Up to 5 pages",
            "Responsive design",
            "Basic SEO optimization",
            "Contact form integration",
            "1 month support",
            "Source code delivery",
        ],
    },
    PricingPlan {
        title_key: "pricing-standard-title",
        desc_key: "pricing-standard-desc",
        price: "$5,000",
        popular: true,
        features: &[
            "Up to 15 pages",
            "Custom UI/UX design",
            "Advanced SEO & Analytics",
            "CMS integration",
            "Payment gateway setup",
            "API integrations",
            "3 months support",
            "Performance optimization",
        ],
    },
    PricingPlan {
        title_key: "pricing-premium-title",
        desc_key: "pricing-premium-desc",
        price: "$15,000",
        popular: false,
        features: &[
            "Unlimited pages",
            "Complex fintech features",
            "Custom security solutions",
            "Blockchain integration",
            "AI/ML features",
            "Multi-language support",
            "Admin dashboard",
            "12 months support",
            "Priority updates",
            "Dedicated team",
        ],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    pub handle: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "Telegram",
        handle: "@innovateweb",
        url: "https://t.me/innovateweb",
    },
    SocialLink {
        label: "Instagram",
        handle: "@innovatewebstudio",
        url: "https://instagram.com/innovatewebstudio",
    },
    SocialLink {
        label: "Email",
        handle: "info@innovateweb.studio",
        url: "mailto:info@innovateweb.studio",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portfolio_covers_every_category() {
        for category in ProjectCategory::ALL {
            assert!(
                PROJECTS.iter().any(|p| p.category == *category),
                "no project in category {category:?}"
            );
        }
    }

    #[test]
    fn exactly_one_plan_is_popular() {
        assert_eq!(PLANS.iter().filter(|plan| plan.popular).count(), 1);
    }

    #[test]
    fn every_project_lists_its_stack() {
        for project in PROJECTS {
            assert!(!project.technologies.is_empty(), "{} has no stack", project.name);
        }
    }

    #[test]
    fn content_counts_match_the_site() {
        assert_eq!(SERVICES.len(), 6);
        assert_eq!(STATS.len(), 4);
        assert_eq!(TEAM.len(), 4);
        assert_eq!(PROJECTS.len(), 6);
        assert_eq!(PLANS.len(), 3);
        assert_eq!(SOCIAL_LINKS.len(), 3);
    }
}
