#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use testedge::{
    AppState, Config,
    config::{LoggingConfig, ServerConfig},
};
use testedge_contact::{
    DEFAULT_ENDPOINT, DEFAULT_FROM_NAME, Relay, RelayError, RelayPayload, RelayResponse,
    RelaySettings,
};
use tower::ServiceExt;

/// Relay double answering every submission with the same reply.
pub struct FakeRelay {
    reply: Option<RelayResponse>,
    sent: Mutex<Vec<RelayPayload>>,
}

impl FakeRelay {
    pub fn accepting() -> Self {
        Self::replying(true, None)
    }

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

    pub fn sent(&self) -> Vec<RelayPayload> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Relay for FakeRelay {
    async fn send(&self, payload: &RelayPayload) -> Result<RelayResponse, RelayError> {
        self.sent.lock().unwrap().push(payload.clone());

        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(serde_json::from_str::<RelayResponse>("<html>").unwrap_err().into()),
        }
    }
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        relay: RelaySettings {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            access_key: "test-access-key".to_owned(),
            from_name: DEFAULT_FROM_NAME.to_owned(),
        },
        logging: LoggingConfig::default(),
    }
}

pub struct TestApp {
    pub router: Router,
    pub relay: Arc<FakeRelay>,
}

impl TestApp {
    pub fn new(relay: FakeRelay) -> Self {
        let relay = Arc::new(relay);
        let state = AppState {
            config: test_config(),
            relay: relay.clone(),
        };

        Self {
            router: testedge::routes::app(state),
            relay,
        }
    }

    pub async fn get(&self, uri: &str) -> anyhow::Result<(StatusCode, String)> {
        let response = self
            .router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty())?)
            .await?;

        read(response).await
    }

    pub async fn post_form(&self, uri: &str, body: &str) -> anyhow::Result<(StatusCode, String)> {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body.to_owned()))?,
            )
            .await?;

        read(response).await
    }
}

async fn read(response: axum::response::Response) -> anyhow::Result<(StatusCode, String)> {
    let status = response.status();
    let body = response.into_body().collect().await?.to_bytes();

    Ok((status, String::from_utf8(body.to_vec())?))
}
