//! Static site content: services, team, statistics and articles.

use serde::Serialize;

/// A single image request: category plus rendered size.
#[derive(Debug, Clone, Copy)]
pub struct ImageSpec {
    pub category: &'static str,
    pub width: u32,
    pub height: u32,
}

/// Several images of the same size.
#[derive(Debug, Clone, Copy)]
pub struct GallerySpec {
    pub categories: &'static [&'static str],
    pub width: u32,
    pub height: u32,
}

/// Service card on the homepage.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ServiceSummary {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Service entry on the services page.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ServiceDetail {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
    pub title: &'static str,
    pub bio: &'static str,
    #[serde(skip)]
    pub portrait: ImageSpec,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CompanyStat {
    pub number: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Article {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub date: &'static str,
    pub author: &'static str,
    pub slug: &'static str,
}

// =============================================================================
// Home
// =============================================================================

pub const HOME_HERO: ImageSpec = ImageSpec {
    category: "business-team",
    width: 1920,
    height: 1080,
};

pub const HOME_GALLERY: GallerySpec = GallerySpec {
    categories: &[
        "technology-consulting",
        "business-strategy",
        "digital-transformation",
    ],
    width: 400,
    height: 300,
};

pub const SERVICES: &[ServiceSummary] = &[
    ServiceSummary {
        title: "Technology Consulting",
        description: "Strategic technology guidance and implementation",
        icon: "🚀",
    },
    ServiceSummary {
        title: "Digital Transformation",
        description: "Modernize your business with cutting-edge solutions",
        icon: "💡",
    },
    ServiceSummary {
        title: "Business Strategy",
        description: "Data-driven strategies for sustainable growth",
        icon: "📈",
    },
];

// =============================================================================
// About
// =============================================================================

pub const ABOUT_HERO: ImageSpec = ImageSpec {
    category: "professional-team",
    width: 1200,
    height: 600,
};

pub const ABOUT_GALLERY: GallerySpec = GallerySpec {
    categories: &["modern-office", "team-meeting", "workspace"],
    width: 400,
    height: 300,
};

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Sarah Johnson",
        title: "Chief Technology Officer",
        bio: "15+ years in enterprise technology solutions",
        portrait: ImageSpec {
            category: "professional-woman",
            width: 300,
            height: 300,
        },
    },
    TeamMember {
        name: "Michael Chen",
        title: "Senior Business Strategist",
        bio: "Expert in digital transformation and process optimization",
        portrait: ImageSpec {
            category: "professional-man",
            width: 300,
            height: 300,
        },
    },
    TeamMember {
        name: "Emily Rodriguez",
        title: "Lead Consultant",
        bio: "Specializes in cloud architecture and system integration",
        portrait: ImageSpec {
            category: "business-woman",
            width: 300,
            height: 300,
        },
    },
];

pub const COMPANY_STATS: &[CompanyStat] = &[
    CompanyStat {
        number: "500+",
        label: "Projects Completed",
    },
    CompanyStat {
        number: "50+",
        label: "Enterprise Clients",
    },
    CompanyStat {
        number: "15+",
        label: "Years Experience",
    },
    CompanyStat {
        number: "99%",
        label: "Client Satisfaction",
    },
];

// =============================================================================
// Services
// =============================================================================

pub const SERVICES_HERO: ImageSpec = ImageSpec {
    category: "business-consulting",
    width: 1200,
    height: 600,
};

pub const SERVICES_GALLERY: GallerySpec = GallerySpec {
    categories: &[
        "technology-stack",
        "cloud-computing",
        "data-analytics",
        "cybersecurity",
        "mobile-development",
        "ai-machine-learning",
    ],
    width: 500,
    height: 400,
};

pub const DETAILED_SERVICES: &[ServiceDetail] = &[
    ServiceDetail {
        title: "Cloud Migration & Architecture",
        description: "Seamless transition to cloud platforms with optimized architecture design",
        features: &[
            "AWS/Azure/GCP Migration",
            "Architecture Design",
            "Cost Optimization",
            "Security Implementation",
        ],
    },
    ServiceDetail {
        title: "Digital Transformation",
        description: "End-to-end digital transformation strategies and implementation",
        features: &[
            "Process Automation",
            "Legacy System Modernization",
            "Digital Strategy",
            "Change Management",
        ],
    },
    ServiceDetail {
        title: "Data Analytics & AI",
        description: "Advanced analytics solutions and artificial intelligence implementation",
        features: &[
            "Business Intelligence",
            "Machine Learning",
            "Predictive Analytics",
            "Data Visualization",
        ],
    },
    ServiceDetail {
        title: "Cybersecurity Consulting",
        description: "Comprehensive security assessments and implementation strategies",
        features: &[
            "Security Audits",
            "Compliance Management",
            "Incident Response",
            "Security Training",
        ],
    },
    ServiceDetail {
        title: "Custom Software Development",
        description: "Tailored software solutions for unique business requirements",
        features: &[
            "Web Applications",
            "Mobile Apps",
            "API Development",
            "System Integration",
        ],
    },
    ServiceDetail {
        title: "Technology Strategy",
        description: "Strategic technology planning and roadmap development",
        features: &[
            "Technology Roadmaps",
            "Vendor Selection",
            "Budget Planning",
            "Risk Assessment",
        ],
    },
];

// =============================================================================
// Contact
// =============================================================================

pub const CONTACT_HERO: ImageSpec = ImageSpec {
    category: "business-meeting",
    width: 1200,
    height: 600,
};

pub const CONTACT_OFFICE: ImageSpec = ImageSpec {
    category: "modern-office-space",
    width: 600,
    height: 400,
};

// =============================================================================
// Blog
// =============================================================================

pub const BLOG_HERO: ImageSpec = ImageSpec {
    category: "business-insights",
    width: 1200,
    height: 600,
};

pub const BLOG_GALLERY: GallerySpec = GallerySpec {
    categories: &["technology-trends", "business-growth", "digital-innovation"],
    width: 400,
    height: 250,
};

pub const FEATURED_ARTICLES: &[Article] = &[
    Article {
        title: "The Future of Cloud Computing in Enterprise",
        excerpt: "Exploring emerging trends in cloud technology and their impact on business operations.",
        date: "2024-01-15",
        author: "Sarah Johnson",
        slug: "future-cloud-computing-enterprise",
    },
    Article {
        title: "Digital Transformation Success Stories",
        excerpt: "Real-world examples of successful digital transformation initiatives and lessons learned.",
        date: "2024-01-10",
        author: "Michael Chen",
        slug: "digital-transformation-success-stories",
    },
    Article {
        title: "AI and Machine Learning in Business Strategy",
        excerpt: "How artificial intelligence is reshaping business decision-making and strategy development.",
        date: "2024-01-05",
        author: "Emily Rodriguez",
        slug: "ai-machine-learning-business-strategy",
    },
];

/// Services offered in the contact form's dropdown.
pub fn service_options() -> impl Iterator<Item = &'static str> {
    DETAILED_SERVICES.iter().map(|service| service.title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_galleries_cover_their_cards() {
        assert_eq!(HOME_GALLERY.categories.len(), SERVICES.len());
        assert_eq!(SERVICES_GALLERY.categories.len(), DETAILED_SERVICES.len());
        assert_eq!(BLOG_GALLERY.categories.len(), FEATURED_ARTICLES.len());
    }

    #[test]
    fn test_article_slugs_unique() {
        let mut slugs: Vec<_> = FEATURED_ARTICLES.iter().map(|a| a.slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), FEATURED_ARTICLES.len());
    }
}
