// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use http::StatusCode;
use serde_json::{Value, json};
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

use crate::{API_KEY, init_test};

#[tokio::test]
async fn pass_get_job_runs() {
    let (client, mock_server) = init_test().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/spark-jobs/job-1/runs"))
        .and(header("authorization", format!("Bearer {API_KEY}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "run-1"}])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let runs = client.get_job_runs("job-1").await.unwrap();
    assert_eq!(runs, json!([{"id": "run-1"}]));
}

#[tokio::test]
async fn pass_submit_job_run() {
    let (client, mock_server) = init_test().await;
    let payload = json!({"arguments": ["10"]});

    Mock::given(method("POST"))
        .and(path("/api/v1/spark-jobs/job-1/runs"))
        .and(header("authorization", format!("Bearer {API_KEY}").as_str()))
        .and(body_json(&payload))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "run-1", "status": "STARTING"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let run = client.submit_job_run("job-1", &payload).await.unwrap();
    assert_eq!(run["status"], "STARTING");
}

#[tokio::test]
async fn pass_cancel_job_run() {
    let (client, mock_server) = init_test().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/spark-jobs/job-1/runs/run-1"))
        .and(header("authorization", format!("Bearer {API_KEY}").as_str()))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client.cancel_job_run("job-1", "run-1").await.unwrap();
    assert_eq!(result, Value::Null);
}

#[tokio::test]
async fn pass_get_job_run_by_id() {
    let (client, mock_server) = init_test().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/spark-jobs/job-1/runs/run-1"))
        .and(header("authorization", format!("Bearer {API_KEY}").as_str()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "run-1", "status": "COMPLETED"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let run = client.get_job_run_by_id("job-1", "run-1").await.unwrap();
    assert_eq!(run["status"], "COMPLETED");
}

#[tokio::test]
async fn pass_get_job_run_logs() {
    let (client, mock_server) = init_test().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/spark-jobs/job-1/runs/run-1/logs"))
        .and(header("authorization", format!("Bearer {API_KEY}").as_str()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"logs": "Pi is roughly 3.14"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let logs = client.get_job_run_logs("job-1", "run-1").await.unwrap();
    assert_eq!(logs["logs"], "Pi is roughly 3.14");
}

#[tokio::test]
async fn pass_get_job_run_metrics() {
    let (client, mock_server) = init_test().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/spark-jobs/job-1/runs/run-1/metrics"))
        .and(header("authorization", format!("Bearer {API_KEY}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"duration_ms": 1234})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let metrics = client.get_job_run_metrics("job-1", "run-1").await.unwrap();
    assert_eq!(metrics["duration_ms"], 1234);
}

#[tokio::test]
async fn fail_cancel_finished_run() {
    let (client, mock_server) = init_test().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/spark-jobs/job-1/runs/run-1"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({"message": "Run already finished"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let error = client.cancel_job_run("job-1", "run-1").await.unwrap_err();
    assert_eq!(error.status(), Some(StatusCode::CONFLICT));
}
