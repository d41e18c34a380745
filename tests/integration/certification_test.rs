//! Integration tests for certification upload and approval.

use http::StatusCode;

use crate::helpers::TestApp;

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

#[tokio::test]
async fn test_upload_stores_certificate() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let volunteer = app.create_volunteer("certified").await;

    let response = app
        .upload_certification(volunteer, "diploma.png", "image/png", PNG_MAGIC)
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

    let profile = app
        .request("GET", &format!("/api/volunteers/{volunteer}"), None)
        .await;
    assert_eq!(profile.body["data"]["has_certificate"], true);
    // Upload alone never verifies
    assert_eq!(profile.body["data"]["verified"], false);
}

#[tokio::test]
async fn test_upload_rejects_disallowed_content_type() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let volunteer = app.create_volunteer("scripted").await;

    let response = app
        .upload_certification(volunteer, "cert.svg", "image/svg+xml", b"<svg/>")
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");

    let profile = app
        .request("GET", &format!("/api/volunteers/{volunteer}"), None)
        .await;
    assert_eq!(profile.body["data"]["has_certificate"], false);
}

#[tokio::test]
async fn test_upload_rejects_oversize_file() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let volunteer = app.create_volunteer("oversized").await;

    // Test config caps uploads at 64 KiB
    let oversize = vec![0u8; 70 * 1024];
    let response = app
        .upload_certification(volunteer, "big.png", "image/png", &oversize)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_upload_rejects_empty_file() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let volunteer = app.create_volunteer("empty").await;

    let response = app
        .upload_certification(volunteer, "empty.png", "image/png", b"")
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upload_for_unknown_volunteer_is_404() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let response = app
        .upload_certification(999999999, "diploma.png", "image/png", PNG_MAGIC)
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_approve_marks_volunteer_verified() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let volunteer = app.create_volunteer("approved").await;
    let upload = app
        .upload_certification(volunteer, "diploma.png", "image/png", PNG_MAGIC)
        .await;
    assert_eq!(upload.status, StatusCode::OK);

    let response = app
        .request("POST", &format!("/api/volunteers/{volunteer}/verify"), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["verified"], true);

    let (_, _, verified) = app.volunteer_stats(volunteer).await;
    assert!(verified);
}

#[tokio::test]
async fn test_download_returns_stored_artifact() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let volunteer = app.create_volunteer("download").await;
    let upload = app
        .upload_certification(volunteer, "diploma.png", "image/png", PNG_MAGIC)
        .await;
    assert_eq!(upload.status, StatusCode::OK);

    let response = app
        .request(
            "GET",
            &format!("/api/volunteers/{volunteer}/certification"),
            None,
        )
        .await;

    // Binary body, not JSON
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_download_without_upload_is_404() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let volunteer = app.create_volunteer("nocert").await;

    let response = app
        .request(
            "GET",
            &format!("/api/volunteers/{volunteer}/certification"),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
