use axum::response::IntoResponse;

use crate::{
    routes::Card,
    template::{Template, filters},
};

pub struct Step {
    pub icon: &'static str,
    pub title: &'static str,
}

#[derive(askama::Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub values: &'static [Card],
    pub steps: &'static [Step],
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(AboutTemplate {
        values: &[
            Card {
                icon: "award",
                accent: "text-green",
                title: "Quality First",
                description: "We never compromise on the quality of our testing. Perfection is our goal.",
            },
            Card {
                icon: "users",
                accent: "text-blue",
                title: "Client Centric",
                description: "Your success is our success. We align our testing strategies with your business goals.",
            },
            Card {
                icon: "eye",
                accent: "text-purple",
                title: "Transparency",
                description: "Clear, detailed reporting with no hidden surprises. You know exactly what we find.",
            },
            Card {
                icon: "target",
                accent: "text-red",
                title: "Precision",
                description: "We focus on the details that matter, ensuring every edge case is covered.",
            },
        ],
        steps: &[
            Step {
                icon: "search",
                title: "Requirement Analysis",
            },
            Step {
                icon: "file-text",
                title: "Test Planning",
            },
            Step {
                icon: "play",
                title: "Test Execution",
            },
            Step {
                icon: "bug",
                title: "Bug Reporting",
            },
            Step {
                icon: "refresh-cw",
                title: "Regression Testing",
            },
            Step {
                icon: "check-square",
                title: "Final QA Sign-off",
            },
        ],
    })
}
