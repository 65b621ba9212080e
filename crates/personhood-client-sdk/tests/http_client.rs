//! Integration tests for the HTTP verification client

use std::time::Duration;

use axum::http::StatusCode;
use personhood_client_sdk::{
    ClientConfig, ClientError, ConfigError, HttpVerificationService, VerificationService,
};
use personhood_core::{OutcomeCode, VerificationRequest};
use serde_json::json;

mod common;
use common::{attestation, orb_proof, unreachable_api, StubServer};

fn request() -> VerificationRequest {
    VerificationRequest::new(attestation(), orb_proof())
}

#[tokio::test]
async fn test_posts_both_payloads() {
    let server = StubServer::start(StatusCode::OK, json!({ "success": true })).await;
    let service = HttpVerificationService::new(&server.config()).unwrap();

    let result = service.verify(&request()).await.unwrap();
    assert!(result.success);

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["result"]["credential_type"], "orb");
    assert_eq!(requests[0]["result"]["nullifier_hash"], "0x2bf8406b");
    assert_eq!(requests[0]["response"]["signedMessage"], "main");
}

#[tokio::test]
async fn test_structured_failure_is_not_an_error() {
    let server = StubServer::start(
        StatusCode::OK,
        json!({ "success": false, "code": "phone-already-verified" }),
    )
    .await;
    let service = HttpVerificationService::new(&server.config()).unwrap();

    let result = service.verify(&request()).await.unwrap();
    assert!(!result.success);
    assert_eq!(result.outcome_code(), Some(OutcomeCode::PhoneAlreadyVerified));
}

#[tokio::test]
async fn test_trailing_slash_in_api_url() {
    let server = StubServer::start(StatusCode::OK, json!({ "success": true })).await;
    let config = ClientConfig::with_api(format!("{}/", server.base_url));
    let service = HttpVerificationService::new(&config).unwrap();

    assert_eq!(
        service.verify_url().as_str(),
        format!("{}/verify", server.base_url)
    );
    assert!(service.verify(&request()).await.unwrap().success);
}

#[tokio::test]
async fn test_non_2xx_is_status_error() {
    let server = StubServer::start(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": "database unavailable" }),
    )
    .await;
    let service = HttpVerificationService::new(&server.config()).unwrap();

    match service.verify(&request()).await {
        Err(err @ ClientError::Status { .. }) => {
            assert_eq!(err.to_string(), "Verification service returned HTTP 500");
            let ClientError::Status { status, body } = err else {
                unreachable!()
            };
            assert_eq!(status, 500);
            assert!(body.contains("database unavailable"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_undecodable_body() {
    let server = StubServer::start(StatusCode::OK, json!("not an object")).await;
    let service = HttpVerificationService::new(&server.config()).unwrap();

    assert!(matches!(
        service.verify(&request()).await,
        Err(ClientError::InvalidResponse(_))
    ));
}

#[tokio::test]
async fn test_unreachable_service() {
    let config = ClientConfig::with_api(unreachable_api().await);
    let service = HttpVerificationService::new(&config).unwrap();

    assert!(matches!(
        service.verify(&request()).await,
        Err(ClientError::Network(_))
    ));
}

#[tokio::test]
async fn test_request_timeout() {
    let server = StubServer::start_delayed(
        StatusCode::OK,
        json!({ "success": true }),
        Duration::from_secs(3),
    )
    .await;
    let config = ClientConfig {
        timeout_seconds: 1,
        ..server.config()
    };
    let service = HttpVerificationService::new(&config).unwrap();

    assert!(matches!(
        service.verify(&request()).await,
        Err(ClientError::Timeout)
    ));
}

#[test]
fn test_construction_errors_are_distinct() {
    let err = HttpVerificationService::new(&ClientConfig::with_api("ftp://service.example"))
        .err()
        .unwrap();
    assert!(matches!(err, ConfigError::InvalidApiUrl { .. }));

    let err = ConfigError::HttpClient("no TLS backend".to_string());
    assert_eq!(err.to_string(), "Failed to build HTTP client: no TLS backend");
    assert!(!err.to_string().contains("API URL"));
}
