//! Integration tests for the application (claim) workflow.

use futures::future::join_all;
use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_apply_returns_applicant_list() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let emergency = app.create_emergency(5, 46.77, 23.59).await;
    let volunteer = app.create_volunteer("applicant").await;

    let response = app
        .request(
            "POST",
            &format!("/api/emergencies/{emergency}/applications"),
            Some(serde_json::json!({ "volunteer_id": volunteer })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let applicants = response.body["data"]["applicants"]
        .as_array()
        .expect("No applicants array");
    assert_eq!(applicants.len(), 1);
    assert_eq!(applicants[0]["volunteer_id"], volunteer);
    assert!(applicants[0]["name"].is_string());
}

#[tokio::test]
async fn test_apply_twice_is_idempotent() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let emergency = app.create_emergency(5, 46.77, 23.59).await;
    let volunteer = app.create_volunteer("repeat").await;
    let body = serde_json::json!({ "volunteer_id": volunteer });

    let first = app
        .request(
            "POST",
            &format!("/api/emergencies/{emergency}/applications"),
            Some(body.clone()),
        )
        .await;
    assert_eq!(first.status, StatusCode::OK);

    let second = app
        .request(
            "POST",
            &format!("/api/emergencies/{emergency}/applications"),
            Some(body),
        )
        .await;
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(
        second.body["data"]["applicants"].as_array().unwrap().len(),
        1
    );

    assert_eq!(app.application_count(emergency).await, 1);
}

#[tokio::test]
async fn test_apply_to_unknown_emergency_mutates_nothing() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let volunteer = app.create_volunteer("orphan").await;

    let response = app
        .request(
            "POST",
            "/api/emergencies/999999999/applications",
            Some(serde_json::json!({ "volunteer_id": volunteer })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");

    let (reputation, completed, _) = app.volunteer_stats(volunteer).await;
    assert_eq!(reputation, 0);
    assert_eq!(completed, 0);
}

#[tokio::test]
async fn test_apply_with_unknown_volunteer_is_404() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let emergency = app.create_emergency(5, 46.77, 23.59).await;

    let response = app
        .request(
            "POST",
            &format!("/api/emergencies/{emergency}/applications"),
            Some(serde_json::json!({ "volunteer_id": 999999999 })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(app.application_count(emergency).await, 0);
}

#[tokio::test]
async fn test_list_applicants_preserves_application_order() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let emergency = app.create_emergency(5, 46.77, 23.59).await;
    let first = app.create_volunteer("first").await;
    let second = app.create_volunteer("second").await;

    for v in [first, second] {
        let response = app
            .request(
                "POST",
                &format!("/api/emergencies/{emergency}/applications"),
                Some(serde_json::json!({ "volunteer_id": v })),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }

    let response = app
        .request(
            "GET",
            &format!("/api/emergencies/{emergency}/applications"),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let order: Vec<i64> = response.body["data"]["applicants"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["volunteer_id"].as_i64().unwrap())
        .collect();
    assert_eq!(order, vec![first, second]);
}

#[tokio::test]
async fn test_twenty_concurrent_distinct_applies_all_land() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let emergency = app.create_emergency(8, 46.77, 23.59).await;

    let mut volunteers = Vec::new();
    for _ in 0..20 {
        volunteers.push(app.create_volunteer("swarm").await);
    }

    let requests = volunteers.iter().map(|v| {
        let app = &app;
        let path = format!("/api/emergencies/{emergency}/applications");
        let body = serde_json::json!({ "volunteer_id": v });
        async move { app.request("POST", &path, Some(body)).await }
    });

    for response in join_all(requests).await {
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    }

    assert_eq!(app.application_count(emergency).await, 20);
}

#[tokio::test]
async fn test_concurrent_same_pair_records_one_application() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let emergency = app.create_emergency(8, 46.77, 23.59).await;
    let volunteer = app.create_volunteer("racer").await;

    let requests = (0..10).map(|_| {
        let app = &app;
        let path = format!("/api/emergencies/{emergency}/applications");
        let body = serde_json::json!({ "volunteer_id": volunteer });
        async move { app.request("POST", &path, Some(body)).await }
    });

    for response in join_all(requests).await {
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    }

    assert_eq!(app.application_count(emergency).await, 1);
}
