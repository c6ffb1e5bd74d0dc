// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use assert_matches::assert_matches;
use http::{Method, StatusCode};
use iomete_http::{CallError, ErrorBody};
use serde_json::json;
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

use crate::{API_KEY, init_test};

#[tokio::test]
async fn pass_get_with_bearer_token() {
    let (client, mock_server) = init_test().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/things"))
        .and(header("authorization", format!("Bearer {API_KEY}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}, {"id": 2}])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let url = format!("{}/api/v1/things", mock_server.uri());
    let value = client.get(&url).await.unwrap();

    assert_eq!(value, Some(json!([{"id": 1}, {"id": 2}])));

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn pass_post_json_payload() {
    let (client, mock_server) = init_test().await;
    let payload = json!({"name": "my-job", "template": {"main_application_file": "app.py"}});

    Mock::given(method("POST"))
        .and(path("/api/v1/things"))
        .and(header("content-type", "application/json"))
        .and(body_json(&payload))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "abc"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let url = format!("{}/api/v1/things", mock_server.uri());
    let value = client.post(&url, &payload).await.unwrap();

    assert_eq!(value, Some(json!({"id": "abc"})));
}

#[tokio::test]
async fn pass_empty_body() {
    let (client, mock_server) = init_test().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/things/1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let url = format!("{}/api/v1/things/1", mock_server.uri());
    let value = client.delete(&url).await.unwrap();

    assert_eq!(value, None);
}

#[tokio::test]
async fn pass_call_without_payload() {
    let (client, mock_server) = init_test().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/things/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("  "))
        .expect(1)
        .mount(&mock_server)
        .await;

    let url = format!("{}/api/v1/things/1", mock_server.uri());
    let value = client
        .call::<serde_json::Value>(Method::PUT, &url, None)
        .await
        .unwrap();

    assert_eq!(value, None);
}

#[tokio::test]
async fn fail_error_status_json_body() {
    let (client, mock_server) = init_test().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/things"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"message": "name is required"})),
        )
        .mount(&mock_server)
        .await;

    let url = format!("{}/api/v1/things", mock_server.uri());
    let error = client.post(&url, &json!({})).await.unwrap_err();

    assert_eq!(error.status(), Some(StatusCode::BAD_REQUEST));
    let client_error = assert_matches!(error, CallError::Client(e) => e);
    assert_eq!(
        client_error.body(),
        &ErrorBody::Json(json!({"message": "name is required"}))
    );
    assert_eq!(client_error.body().message(), Some("name is required"));
}

#[tokio::test]
async fn fail_error_status_text_body() {
    let (client, mock_server) = init_test().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/things"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&mock_server)
        .await;

    let url = format!("{}/api/v1/things", mock_server.uri());
    let error = client.get(&url).await.unwrap_err();

    let client_error = assert_matches!(error, CallError::Client(e) => e);
    assert_eq!(client_error.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(
        client_error.body(),
        &ErrorBody::Text("Bad Gateway".to_owned())
    );
}

#[tokio::test]
async fn fail_not_found_without_body() {
    let (client, mock_server) = init_test().await;

    let url = format!("{}/api/v1/missing", mock_server.uri());
    let error = client.get(&url).await.unwrap_err();

    let client_error = assert_matches!(error, CallError::Client(e) => e);
    assert!(client_error.is_not_found());
    assert_eq!(client_error.body(), &ErrorBody::Empty);
}

#[tokio::test]
async fn fail_invalid_json_response() {
    let (client, mock_server) = init_test().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/things"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&mock_server)
        .await;

    let url = format!("{}/api/v1/things", mock_server.uri());
    let error = client.get(&url).await.unwrap_err();

    assert_matches!(error, CallError::Json(_));
}

#[tokio::test]
async fn fail_transport_error() {
    let (client, _mock_server) = init_test().await;

    // Nothing listens on port 1
    let error = client.get("http://127.0.0.1:1/api/v1/things").await.unwrap_err();

    assert_matches!(error, CallError::Http(_));
    assert_eq!(error.status(), None);
}
