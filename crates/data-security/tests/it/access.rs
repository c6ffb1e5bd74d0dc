// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use assert_matches::assert_matches;
use http::StatusCode;
use iomete_data_model::{
    AccessPolicyItem, AccessPolicyResource, AccessPolicyView, AccessType, ResourceInclusionType,
    ValidityPeriod,
};
use iomete_data_security::Error;
use serde_json::{Value, json};
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

use crate::{API_KEY, DATA_SECURITY_PATH, init_test};

fn policies_path() -> String {
    format!("{DATA_SECURITY_PATH}/access/policy")
}

fn sample_policy() -> AccessPolicyView {
    AccessPolicyView::new("iomete-sdk-automated-access-policy")
        .with_description("iomete-sdk-automated-access-policy")
        .with_resource(AccessPolicyResource::new(["test_db"], ["test_tbl"], ["*"]))
        .with_item(AccessPolicyItem::new(
            [AccessType::Select, AccessType::Update],
            ["fuad@iomete.com"],
        ))
}

fn sample_policy_json() -> Value {
    json!({
        "name": "iomete-sdk-automated-access-policy",
        "description": "iomete-sdk-automated-access-policy",
        "validity_period": null,
        "resources": [{
            "databases": ["test_db"],
            "database_inclusion_type": "INCLUDE",
            "tables": ["test_tbl"],
            "table_inclusion_type": "INCLUDE",
            "columns": ["*"],
            "column_inclusion_type": "INCLUDE",
        }],
        "allow_policy_items": [{
            "accesses": ["SELECT", "UPDATE"],
            "users": ["fuad@iomete.com"],
        }],
    })
}

fn with_id(mut value: Value, id: i64) -> Value {
    value["id"] = json!(id);
    value
}

#[tokio::test]
async fn pass_create_access_policy() {
    let (client, mock_server) = init_test().await;

    Mock::given(method("POST"))
        .and(path(policies_path()))
        .and(header("authorization", format!("Bearer {API_KEY}").as_str()))
        .and(body_json(sample_policy_json()))
        .respond_with(ResponseTemplate::new(200).set_body_json(with_id(sample_policy_json(), 42)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let created = client.create_access_policy(&sample_policy()).await.unwrap();

    assert_eq!(created.id, Some(42));
    assert_eq!(created.name, "iomete-sdk-automated-access-policy");
    assert_eq!(
        created.allow_policy_items[0].accesses,
        [AccessType::Select, AccessType::Update]
    );
}

#[tokio::test]
async fn pass_create_with_exclusion_and_validity_period() {
    let (client, mock_server) = init_test().await;

    let policy = AccessPolicyView::new("exclude-test-col")
        .with_resource(
            AccessPolicyResource::new(["test_db"], ["test_tbl"], ["test_col"])
                .with_column_inclusion_type(ResourceInclusionType::Exclude),
        )
        .with_item(AccessPolicyItem::new([AccessType::Select], ["fuad@iomete.com"]))
        .with_validity_period(ValidityPeriod::new(
            "2023/07/01 00:00:00",
            "2023/07/31 23:59:59",
            "US/Pacific",
        ));

    let expected = json!({
        "name": "exclude-test-col",
        "description": null,
        "validity_period": {
            "start_time": "2023/07/01 00:00:00",
            "end_time": "2023/07/31 23:59:59",
            "time_zone": "US/Pacific",
        },
        "resources": [{
            "databases": ["test_db"],
            "database_inclusion_type": "INCLUDE",
            "tables": ["test_tbl"],
            "table_inclusion_type": "INCLUDE",
            "columns": ["test_col"],
            "column_inclusion_type": "EXCLUDE",
        }],
        "allow_policy_items": [{"accesses": ["SELECT"], "users": ["fuad@iomete.com"]}],
    });

    Mock::given(method("POST"))
        .and(path(policies_path()))
        .and(body_json(&expected))
        .respond_with(ResponseTemplate::new(200).set_body_json(with_id(expected.clone(), 7)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let created = client.create_access_policy(&policy).await.unwrap();

    assert_eq!(created.id, Some(7));
    assert_eq!(
        created.resources[0].column_inclusion_type,
        ResourceInclusionType::Exclude
    );
    assert_eq!(created.validity_period, policy.validity_period);
}

#[tokio::test]
async fn fail_create_empty_policy() {
    let (client, mock_server) = init_test().await;

    Mock::given(method("POST"))
        .and(path(policies_path()))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"message": "Policy must have at least one resource"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let policy = AccessPolicyView::new("empty-access-policy").with_description("empty");
    let error = client.create_access_policy(&policy).await.unwrap_err();

    assert_eq!(error.status(), Some(StatusCode::BAD_REQUEST));
    let client_error = error.client_error().unwrap();
    assert_eq!(
        client_error.body().message(),
        Some("Policy must have at least one resource")
    );
}

#[tokio::test]
async fn fail_create_inverted_validity_period() {
    let (client, mock_server) = init_test().await;

    Mock::given(method("POST"))
        .and(path(policies_path()))
        .respond_with(ResponseTemplate::new(400).set_body_string("Invalid validity period"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let policy = sample_policy().with_validity_period(ValidityPeriod::new(
        "2023/07/31 23:59:59",
        "2023/07/01 00:00:00",
        "US/Pacific",
    ));
    let error = client.create_access_policy(&policy).await.unwrap_err();

    assert_eq!(error.status(), Some(StatusCode::BAD_REQUEST));
}

#[tokio::test]
async fn pass_list_keeps_server_order() {
    let (client, mock_server) = init_test().await;

    Mock::given(method("GET"))
        .and(path(policies_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 3, "name": "zeta"},
            {"id": 1, "name": "alpha"},
            {"id": 2, "name": "mu", "resources": null},
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let policies = client.get_access_policies().await.unwrap();
    let names: Vec<_> = policies.iter().map(|p| p.name.as_str()).collect();

    assert_eq!(names, ["zeta", "alpha", "mu"]);
    assert!(policies[2].resources.is_empty());
}

#[tokio::test]
async fn fail_list_unexpected_shape() {
    let (client, mock_server) = init_test().await;

    Mock::given(method("GET"))
        .and(path(policies_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .mount(&mock_server)
        .await;

    let error = client.get_access_policies().await.unwrap_err();
    assert_matches!(error, Error::UnexpectedResponse { .. });
}

#[tokio::test]
async fn pass_get_by_name_and_id() {
    let (client, mock_server) = init_test().await;

    Mock::given(method("GET"))
        .and(path(format!(
            "{}/name/iomete-sdk-automated-access-policy",
            policies_path()
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(with_id(sample_policy_json(), 42)))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("{}/42", policies_path())))
        .respond_with(ResponseTemplate::new(200).set_body_json(with_id(sample_policy_json(), 42)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let by_name = client
        .get_access_policy_by_name("iomete-sdk-automated-access-policy")
        .await
        .unwrap();
    let by_id = client.get_access_policy_by_id(42).await.unwrap();

    assert_eq!(by_name, by_id);
    assert_eq!(by_id.id, Some(42));
}

#[tokio::test]
async fn pass_get_by_name_is_url_encoded() {
    let (client, mock_server) = init_test().await;

    Mock::given(method("GET"))
        .and(path(format!("{}/name/my%20policy%2F1", policies_path())))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": 5, "name": "my policy/1"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let policy = client.get_access_policy_by_name("my policy/1").await.unwrap();
    assert_eq!(policy.name, "my policy/1");
}

#[tokio::test]
async fn pass_update_by_name_replaces_policy() {
    let (client, mock_server) = init_test().await;

    // The whole new policy is sent, nothing of the previous version is kept
    let updated = AccessPolicyView::new("iomete-sdk-automated-access-policy")
        .with_description("updated description")
        .with_resource(AccessPolicyResource::new(["test_db"], ["*"], ["*"]))
        .with_item(AccessPolicyItem::new([AccessType::All], ["admin@iomete.com"]));

    let expected = json!({
        "name": "iomete-sdk-automated-access-policy",
        "description": "updated description",
        "validity_period": null,
        "resources": [{
            "databases": ["test_db"],
            "database_inclusion_type": "INCLUDE",
            "tables": ["*"],
            "table_inclusion_type": "INCLUDE",
            "columns": ["*"],
            "column_inclusion_type": "INCLUDE",
        }],
        "allow_policy_items": [{"accesses": ["ALL"], "users": ["admin@iomete.com"]}],
    });

    Mock::given(method("PUT"))
        .and(path(format!(
            "{}/name/iomete-sdk-automated-access-policy",
            policies_path()
        )))
        .and(body_json(&expected))
        .respond_with(ResponseTemplate::new(200).set_body_json(with_id(expected.clone(), 42)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client
        .update_access_policy_by_name("iomete-sdk-automated-access-policy", &updated)
        .await
        .unwrap();

    assert_eq!(result.id, Some(42));
    assert_eq!(result.description.as_deref(), Some("updated description"));
    assert_eq!(result.allow_policy_items[0].users, ["admin@iomete.com"]);
}

#[tokio::test]
async fn pass_update_by_id() {
    let (client, mock_server) = init_test().await;

    Mock::given(method("PUT"))
        .and(path(format!("{}/42", policies_path())))
        .and(body_json(sample_policy_json()))
        .respond_with(ResponseTemplate::new(200).set_body_json(with_id(sample_policy_json(), 42)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client
        .update_access_policy_by_id(42, &sample_policy())
        .await
        .unwrap();
    assert_eq!(result.id, Some(42));
}

#[tokio::test]
async fn pass_delete_then_not_found() {
    let (client, mock_server) = init_test().await;

    Mock::given(method("DELETE"))
        .and(path(format!("{}/42", policies_path())))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("{}/42", policies_path())))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "Policy not found"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    client.delete_access_policy_by_id(42).await.unwrap();

    let error = client.get_access_policy_by_id(42).await.unwrap_err();
    let client_error = error.client_error().unwrap();
    assert!(client_error.is_not_found());
    assert_eq!(client_error.body().message(), Some("Policy not found"));
}
