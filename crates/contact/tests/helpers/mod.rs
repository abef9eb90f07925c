#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    extract::{Multipart, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use testedge_contact::{
    FormField, Relay, RelayError, RelayPayload, RelayResponse, RelaySettings,
};

pub fn settings(endpoint: impl Into<String>) -> RelaySettings {
    RelaySettings {
        endpoint: endpoint.into(),
        access_key: "test-access-key".to_owned(),
        from_name: "TestEdge QA Solutions Website".to_owned(),
    }
}

/// The form from the contact scenarios: Jane, no subject yet.
pub fn fill_jane(flow: &mut testedge_contact::ContactFlow) {
    flow.set(FormField::Name, "Jane");
    flow.set(FormField::Email, "jane@x.com");
    flow.set(FormField::Phone, "801");
    flow.set(FormField::Company, "");
    flow.set(FormField::Subject, "");
    flow.set(FormField::Message, "hi");
}

/// In-process relay that records every payload and answers with a canned
/// reply, or with an unreadable body when none is given.
pub struct RecordingRelay {
    reply: Option<RelayResponse>,
    sent: Mutex<Vec<RelayPayload>>,
}

impl RecordingRelay {
    pub fn replying(success: bool, message: Option<&str>) -> Self {
        Self {
            reply: Some(RelayResponse {
                success,
                message: message.map(ToOwned::to_owned),
            }),
            sent: Mutex::default(),
        }
    }

    pub fn broken() -> Self {
        Self {
            reply: None,
            sent: Mutex::default(),
        }
    }

    pub fn calls(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn last(&self) -> Option<RelayPayload> {
        self.sent.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Relay for RecordingRelay {
    async fn send(&self, payload: &RelayPayload) -> Result<RelayResponse, RelayError> {
        self.sent.lock().unwrap().push(payload.clone());

        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(serde_json::from_str::<RelayResponse>("<html>").unwrap_err().into()),
        }
    }
}

/// Relay whose answer never arrives.
pub struct StalledRelay;

#[async_trait]
impl Relay for StalledRelay {
    async fn send(&self, _payload: &RelayPayload) -> Result<RelayResponse, RelayError> {
        std::future::pending().await
    }
}

pub type Received = Arc<Mutex<Vec<Vec<(String, String)>>>>;

#[derive(Clone)]
struct FakeRelayState {
    status: StatusCode,
    body: &'static str,
    received: Received,
}

pub struct FakeRelayServer {
    pub endpoint: String,
    pub received: Received,
}

/// Serves a relay lookalike on an ephemeral port that stores the multipart
/// fields of each request and answers `status` with `body`.
pub async fn spawn_relay_server(
    status: StatusCode,
    body: &'static str,
) -> anyhow::Result<FakeRelayServer> {
    let received = Received::default();
    let state = FakeRelayState {
        status,
        body,
        received: received.clone(),
    };

    let app = Router::new()
        .route("/submit", post(submit))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move { axum::serve(listener, app).await });

    Ok(FakeRelayServer {
        endpoint: format!("http://{addr}/submit"),
        received,
    })
}

/// Endpoint on a port nobody listens on.
pub async fn unreachable_endpoint() -> anyhow::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    Ok(format!("http://{addr}/submit"))
}

async fn submit(
    State(state): State<FakeRelayState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut fields = vec![];
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_owned();
        let value = field.text().await.unwrap_or_default();
        fields.push((name, value));
    }

    state.received.lock().unwrap().push(fields);

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body,
    )
}
