use axum::response::IntoResponse;

use crate::{
    routes::Card,
    template::{Template, filters},
};

pub struct Industry {
    pub name: &'static str,
    pub risk: &'static str,
    pub solution: &'static str,
}

pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub text: &'static str,
}

impl Testimonial {
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

pub const SERVICES: &[Card] = &[
    Card {
        icon: "terminal",
        accent: "text-green",
        title: "Manual QA & Exploratory Testing",
        description: "Detect complex bugs and edge cases that automation misses. Our manual QA experts simulate real-user journeys.",
    },
    Card {
        icon: "check-circle",
        accent: "text-green",
        title: "Scalable Test Automation",
        description: "Speed up your release cycle with reliable test automation. We build custom suites using Selenium and Appium.",
    },
    Card {
        icon: "globe",
        accent: "text-green",
        title: "Cross-Browser Web Testing",
        description: "From Chrome to Safari, ensure your web app delivers a consistent experience across every screen size.",
    },
    Card {
        icon: "smartphone",
        accent: "text-green",
        title: "iOS & Android Performance QA",
        description: "Ensure your mobile app works perfectly on all devices. We test for crashes and UI consistency on real hardware.",
    },
    Card {
        icon: "server",
        accent: "text-green",
        title: "API Testing & Security Validation",
        description: "Ensure your backend is robust. We validate API endpoints for performance, security, and seamless integration.",
    },
    Card {
        icon: "zap",
        accent: "text-green",
        title: "Usability & Accessibility Testing",
        description: "Make your product intuitive and inclusive for everyone. We provide expert feedback to meet accessibility standards.",
    },
    Card {
        icon: "shield-check",
        accent: "text-green",
        title: "Regression Testing",
        description: "Protect your product's reputation. Our regression testing ensures new updates don't break existing features.",
    },
    Card {
        icon: "message-square",
        accent: "text-green",
        title: "QA Consulting & Strategy",
        description: "Streamline your QA process with expert consulting. We help you choose the right tools to reduce time-to-market.",
    },
];

pub const INDUSTRIES: &[Industry] = &[
    Industry {
        name: "Fintech & Digital Banking",
        risk: "Security breaches & data leaks",
        solution: "Rigorous API testing for financial compliance.",
    },
    Industry {
        name: "Healthcare & MedTech",
        risk: "HIPAA issues & patient data friction",
        solution: "Stability testing for mission-critical software.",
    },
    Industry {
        name: "E-Commerce & Retail",
        risk: "Cart abandonment & high-load crashes",
        solution: "Performance testing for peak traffic surges.",
    },
    Industry {
        name: "Logistics & Supply Chain",
        risk: "Tracking errors & integration failures",
        solution: "End-to-end API & real-time data validation.",
    },
    Industry {
        name: "SaaS & Cloud Platforms",
        risk: "Deployment regressions & downtime",
        solution: "CI/CD integrated automation suites.",
    },
    Industry {
        name: "EdTech Platforms",
        risk: "High-concurrency crashes during exams",
        solution: "Stress testing & accessibility compliance.",
    },
];

pub const REASONS: &[&str] = &[
    "Scalable testing for startups and enterprises",
    "Detailed reporting and actionable insights",
    "Expertise in latest frameworks",
    "Seamless CI/CD integration",
];

pub const STATS: &[Stat] = &[
    Stat {
        label: "Bug Detection",
        value: "99%",
    },
    Stat {
        label: "Faster Release",
        value: "2x",
    },
    Stat {
        label: "Support",
        value: "24/7",
    },
    Stat {
        label: "Projects",
        value: "50+",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "David Chen",
        role: "VP of Engineering, NeoBank",
        text: "TestEdge QA Solutions transformed our release process. Their fintech-specific security audits helped us launch 3 weeks ahead of schedule.",
    },
    Testimonial {
        name: "Sarah Miller",
        role: "Product Manager, CareSync",
        text: "The cross-browser validation was flawless. Our patient portal now works perfectly on older tablets used in clinics.",
    },
];

pub const TOOLS: &[&str] = &[
    "Selenium",
    "Cypress",
    "Appium",
    "Playwright",
    "Postman",
    "JMeter",
    "Jira",
    "TestRail",
];

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub services: &'static [Card],
    pub industries: &'static [Industry],
    pub reasons: &'static [&'static str],
    pub stats: &'static [Stat],
    pub testimonials: &'static [Testimonial],
    pub tools: &'static [&'static str],
}

impl Default for IndexTemplate {
    fn default() -> Self {
        Self {
            services: SERVICES,
            industries: INDUSTRIES,
            reasons: REASONS,
            stats: STATS,
            testimonials: TESTIMONIALS,
            tools: TOOLS,
        }
    }
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(IndexTemplate::default())
}
