use async_trait::async_trait;
use reqwest::{
    Client,
    header::{ACCEPT, HeaderValue},
    multipart::Form,
};
use serde::{Deserialize, Serialize};

use crate::{FormState, Subject};

pub const DEFAULT_ENDPOINT: &str = "https://api.web3forms.com/submit";
pub const DEFAULT_FROM_NAME: &str = "TestEdge QA Solutions Website";

/// Identity of the site towards the form relay.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RelaySettings {
    pub endpoint: String,
    pub access_key: String,
    #[serde(default = "default_from_name")]
    pub from_name: String,
}

fn default_from_name() -> String {
    DEFAULT_FROM_NAME.to_owned()
}

/// Body posted to the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayPayload {
    pub access_key: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub subject: String,
    pub message: String,
    pub from_name: String,
    pub botcheck: String,
}

impl RelayPayload {
    pub fn new(form: &FormState, subject: Subject, settings: &RelaySettings) -> Self {
        Self {
            access_key: settings.access_key.to_owned(),
            name: form.name.to_owned(),
            email: form.email.to_owned(),
            phone: form.phone_number(),
            company: form.company.to_owned(),
            subject: subject.to_string(),
            message: form.message.to_owned(),
            from_name: settings.from_name.to_owned(),
            botcheck: String::new(),
        }
    }

    /// Multipart field names and values, in the order they are sent.
    pub fn fields(&self) -> [(&'static str, &str); 9] {
        [
            ("access_key", self.access_key.as_str()),
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("phone", self.phone.as_str()),
            ("company", self.company.as_str()),
            ("subject", self.subject.as_str()),
            ("message", self.message.as_str()),
            ("from_name", self.from_name.as_str()),
            ("botcheck", self.botcheck.as_str()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("relay request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("relay answered with an unreadable body: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

/// Outbound delivery of a contact submission.
#[async_trait]
pub trait Relay: Send + Sync {
    async fn send(&self, payload: &RelayPayload) -> Result<RelayResponse, RelayError>;
}

/// Relay reached over HTTP with a multipart POST.
#[derive(Clone, Debug)]
pub struct HttpRelay {
    client: Client,
    endpoint: String,
}

impl HttpRelay {
    /// Relay posting to `settings.endpoint`.
    pub fn new(settings: &RelaySettings) -> Self {
        Self::with_client(Client::new(), settings)
    }

    pub fn with_client(client: Client, settings: &RelaySettings) -> Self {
        Self {
            client,
            endpoint: settings.endpoint.to_owned(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Relay for HttpRelay {
    async fn send(&self, payload: &RelayPayload) -> Result<RelayResponse, RelayError> {
        let form = payload
            .fields()
            .into_iter()
            .fold(Form::new(), |form, (name, value)| {
                form.text(name, value.to_owned())
            });

        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        let mut reply: RelayResponse = serde_json::from_slice(&body)?;

        if !status.is_success() {
            tracing::debug!(%status, "relay answered with a non-success status");
            reply.success = false;
        }

        Ok(reply)
    }
}
