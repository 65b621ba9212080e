//! Test utilities for integration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use personhood_client_sdk::ClientConfig;
use personhood_core::{AttestationPayload, UniquenessProof};
use serde_json::{json, Value};

#[derive(Clone)]
struct Stub {
    status: StatusCode,
    body: Value,
    delay: Option<Duration>,
    requests: Arc<Mutex<Vec<Value>>>,
}

/// In-process verification service answering every `/verify` the same way
pub struct StubServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl StubServer {
    pub async fn start(status: StatusCode, body: Value) -> Self {
        Self::spawn(status, body, None).await
    }

    pub async fn start_delayed(status: StatusCode, body: Value, delay: Duration) -> Self {
        Self::spawn(status, body, Some(delay)).await
    }

    async fn spawn(status: StatusCode, body: Value, delay: Option<Duration>) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let stub = Stub {
            status,
            body,
            delay,
            requests: requests.clone(),
        };

        let router = Router::new()
            .route("/verify", post(verify))
            .with_state(stub);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            requests,
        }
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig::with_api(&self.base_url)
    }

    /// Bodies received so far
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

async fn verify(State(stub): State<Stub>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    stub.requests.lock().unwrap().push(body);
    if let Some(delay) = stub.delay {
        tokio::time::sleep(delay).await;
    }
    (stub.status, Json(stub.body.clone()))
}

/// An address nothing listens on
pub async fn unreachable_api() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn attestation() -> AttestationPayload {
    AttestationPayload::new(json!({
        "appId": "0x8a4f",
        "signedMessage": "main",
        "proofs": [{ "auths": [{ "authType": 0, "userId": "0x1f" }] }]
    }))
}

pub fn orb_proof() -> UniquenessProof {
    serde_json::from_value(json!({
        "credential_type": "orb",
        "merkle_root": "0x1f38b57f",
        "nullifier_hash": "0x2bf8406b",
        "proof": "0x29a03eb0"
    }))
    .unwrap()
}

pub fn phone_proof() -> UniquenessProof {
    serde_json::from_value(json!({
        "credential_type": "phone",
        "merkle_root": "0x0aa1",
        "nullifier_hash": "0x77c3",
        "proof": "0x11d0"
    }))
    .unwrap()
}
