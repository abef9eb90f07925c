use axum::response::IntoResponse;
use testedge_contact::Subject;

use crate::{
    routes::Card,
    template::{Template, filters},
};

#[derive(askama::Template)]
#[template(path = "qa-audit.html")]
pub struct QaAuditTemplate {
    pub checks: &'static [Card],
    pub audit_subject: Subject,
}

impl QaAuditTemplate {
    /// Contact page link with the audit subject pre-selected.
    pub fn contact_href(&self) -> String {
        format!(
            "/contact?subject={}",
            urlencoding::encode(self.audit_subject.as_ref())
        )
    }
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(QaAuditTemplate {
        checks: &[
            Card {
                icon: "alert-triangle",
                accent: "text-yellow",
                title: "Critical Bugs",
                description: "Show-stopping issues that crash your app or block users.",
            },
            Card {
                icon: "bar-chart",
                accent: "text-blue",
                title: "Performance",
                description: "Load times, responsiveness, and resource usage analysis.",
            },
            Card {
                icon: "check-circle",
                accent: "text-green",
                title: "UX/UI Consistency",
                description: "Visual glitches and usability friction points.",
            },
            Card {
                icon: "file-text",
                accent: "text-purple",
                title: "Code Quality",
                description: "High-level review of testing practices and coverage.",
            },
        ],
        audit_subject: Subject::QaAudit,
    })
}
