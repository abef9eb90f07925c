use std::str::FromStr;

use axum::{
    extract::{Form, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use strum::VariantArray;
use testedge_contact::{COUNTRY_CODES, ContactFlow, CountryCode, FormField, Status, Subject};

use crate::{
    routes::AppState,
    template::{Template, filters},
};

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate<'a> {
    pub flow: &'a ContactFlow,
    pub subjects: &'static [Subject],
    pub country_codes: &'static [CountryCode],
}

impl<'a> ContactTemplate<'a> {
    pub fn new(flow: &'a ContactFlow) -> Self {
        Self {
            flow,
            subjects: Subject::VARIANTS,
            country_codes: COUNTRY_CODES,
        }
    }

    pub fn is_success(&self) -> bool {
        self.flow.status() == &Status::Success
    }

    pub fn is_subject_selected(&self, subject: impl AsRef<str>) -> bool {
        self.flow.form().get(FormField::Subject) == subject.as_ref()
    }

    pub fn is_country_selected(&self, dial: impl AsRef<str>) -> bool {
        self.flow.form().country_code == dial.as_ref()
    }
}

#[derive(Deserialize)]
pub struct PageQuery {
    pub subject: Option<String>,
}

pub async fn page(template: Template, Query(query): Query<PageQuery>) -> impl IntoResponse {
    let flow = ContactFlow::enter(query.subject.as_deref());

    template.render(ContactTemplate::new(&flow))
}

pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    Form(input): Form<Vec<(String, String)>>,
) -> impl IntoResponse {
    let mut flow = ContactFlow::default();

    for (key, value) in input {
        match FormField::from_str(&key) {
            Ok(field) => flow.set(field, value),
            Err(_) => tracing::debug!(field = %key, "unknown contact form field ignored"),
        }
    }

    flow.submit(&*app_state.relay, &app_state.config.relay)
        .await;

    template.render(ContactTemplate::new(&flow))
}
