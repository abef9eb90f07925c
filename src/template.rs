use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::{collections::HashMap, convert::Infallible};

pub(crate) mod filters {
    use time::OffsetDateTime;

    /// Navbar link classes, highlighted when `path` is the current page.
    #[askama::filter_fn]
    pub fn nav_class(path: &str, values: &dyn askama::Values) -> askama::Result<String> {
        let current_path = askama::get_value::<String>(values, "current_path")?;

        let class = if current_path == path {
            "nav-link is-active"
        } else {
            "nav-link"
        };

        Ok(class.to_owned())
    }

    #[askama::filter_fn]
    pub fn copyright(owner: &str, _values: &dyn askama::Values) -> askama::Result<String> {
        let year = OffsetDateTime::now_utc().year();

        Ok(format!("© {year} {owner}. All rights reserved."))
    }
}

/// Request-scoped renderer handing per-request values to the filters.
pub struct Template {
    current_path: String,
}

impl Template {
    fn render_with_values<T: askama::Template>(
        &self,
        template: T,
    ) -> Result<String, askama::Error> {
        let mut values: HashMap<&str, Box<dyn std::any::Any>> = HashMap::new();
        values.insert("current_path", Box::new(self.current_path.to_owned()));

        template.render_with_values(&values)
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        self.render_status(StatusCode::OK, template)
    }

    pub fn render_status<T: askama::Template>(&self, status: StatusCode, template: T) -> Response {
        match self.render_with_values(template) {
            Ok(html) => (status, Html(html)).into_response(),
            Err(err) => {
                tracing::error!(path = %self.current_path, "{err}");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template. Error: {err}"),
                )
                    .into_response()
            }
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Template {
            current_path: parts.uri.path().to_owned(),
        })
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;
