//! Typed service wrappers over mock HTTP: paths, payloads, and shapes.

use chrono::NaiveDate;
use mockito::Matcher;
use serde_json::json;
use uuid::Uuid;
use workproof::ApiClient;
use workproof::services::{AuthApi, DashboardApi, HolidaysApi, ReceiptsApi, ReportApi};
use workproof::types::{ComplianceStatus, UserHolidayDraft, WorkSchedulePeriodDraft};

fn client_for(server: &mockito::ServerGuard) -> ApiClient {
    ApiClient::builder()
        .base_url(server.url())
        .build()
        .expect("mock server URL is valid")
}

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

#[tokio::test]
async fn login_posts_credentials_and_decodes_session() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/auth/login")
        .match_body(Matcher::Json(json!({
            "email": "ana@example.com",
            "password": "hunter2"
        })))
        .with_status(200)
        .with_body(
            r#"{
                "access_token": "acc-1",
                "refresh_token": "ref-1",
                "token_type": "bearer",
                "expires_in": 3600
            }"#,
        )
        .create_async()
        .await;

    let session = AuthApi::new(client_for(&server))
        .login("ana@example.com", "hunter2")
        .await
        .unwrap();

    assert_eq!(session.access_token, "acc-1");
    assert_eq!(session.token_type, "bearer");
    assert_eq!(session.expires_in, 3600);
    mock.assert_async().await;
}

#[tokio::test]
async fn logout_posts_and_accepts_no_content() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/auth/logout")
        .with_status(204)
        .create_async()
        .await;

    AuthApi::new(client_for(&server)).logout().await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn dashboard_summary_decodes_counts_and_status() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/dashboard")
        .match_query(Matcher::UrlEncoded("year".into(), "2024".into()))
        .with_status(200)
        .with_body(
            r#"{
                "year": 2024,
                "working_country_code": "BE",
                "homeworking_threshold": 34,
                "total_working_days": 231,
                "past_working_days": 120,
                "days_with_proof": 95,
                "days_without_proof": 25,
                "forecast_homeworking_days": 48,
                "forecasted_days_without_proof": 48,
                "remaining_allowed_homeworking_days": 0,
                "is_at_risk": true,
                "compliance_status": "at_risk"
            }"#,
        )
        .create_async()
        .await;

    let summary = DashboardApi::new(client_for(&server))
        .summary(2024)
        .await
        .unwrap();

    assert_eq!(summary.year, 2024);
    assert_eq!(summary.days_without_proof, 25);
    assert!(summary.is_at_risk);
    assert_eq!(summary.compliance_status, ComplianceStatus::AtRisk);
}

#[tokio::test]
async fn create_holiday_posts_iso_dates() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/dashboard/holidays")
        .match_body(Matcher::Json(json!({
            "start_date": "2024-07-01",
            "end_date": "2024-07-05",
            "description": "summer break"
        })))
        .with_status(201)
        .with_body(
            r#"{
                "id": "3f8a2a10-6f3e-4f0f-9a51-b7d5f6f9e421",
                "user_id": "7b1f9f86-4a71-4f38-9ce9-4a4f5a8d2c11",
                "start_date": "2024-07-01",
                "end_date": "2024-07-05",
                "description": "summer break"
            }"#,
        )
        .create_async()
        .await;

    let draft = UserHolidayDraft {
        start_date: date("2024-07-01"),
        end_date: date("2024-07-05"),
        description: Some("summer break".to_string()),
    };
    let holiday = DashboardApi::new(client_for(&server))
        .create_holiday(&draft)
        .await
        .unwrap();

    assert_eq!(holiday.start_date, date("2024-07-01"));
    assert_eq!(holiday.description.as_deref(), Some("summer break"));
    mock.assert_async().await;
}

#[tokio::test]
async fn open_ended_schedule_period_serializes_null_end_date() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/dashboard/schedule")
        .match_body(Matcher::Json(json!({
            "start_date": "2024-09-01",
            "end_date": null,
            "working_days": [0, 1, 2, 3]
        })))
        .with_status(201)
        .with_body(
            r#"{
                "id": "b4e9c1d2-7a35-4c2f-8a11-2f9f3c7d5e60",
                "user_id": "7b1f9f86-4a71-4f38-9ce9-4a4f5a8d2c11",
                "start_date": "2024-09-01",
                "end_date": null,
                "working_days": [0, 1, 2, 3],
                "description": null
            }"#,
        )
        .create_async()
        .await;

    let draft = WorkSchedulePeriodDraft {
        start_date: date("2024-09-01"),
        end_date: None,
        working_days: vec![0, 1, 2, 3],
        description: None,
    };
    let period = DashboardApi::new(client_for(&server))
        .create_schedule_period(&draft)
        .await
        .unwrap();

    assert!(period.end_date.is_none());
    assert_eq!(period.working_days, vec![0, 1, 2, 3]);
    mock.assert_async().await;
}

#[tokio::test]
async fn delete_holiday_targets_the_id_path() {
    let id: Uuid = "3f8a2a10-6f3e-4f0f-9a51-b7d5f6f9e421".parse().unwrap();
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", format!("/dashboard/holidays/{id}").as_str())
        .with_status(204)
        .create_async()
        .await;

    DashboardApi::new(client_for(&server))
        .delete_holiday(id)
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn receipts_list_sends_the_date_window() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/receipts")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("start_date".into(), "2024-01-01".into()),
            Matcher::UrlEncoded("end_date".into(), "2024-12-31".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"receipts": [], "total": 0}"#)
        .create_async()
        .await;

    let page = ReceiptsApi::new(client_for(&server))
        .list(Some(date("2024-01-01")), Some(date("2024-12-31")))
        .await
        .unwrap();

    assert_eq!(page.total, 0);
    assert!(page.receipts.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn update_receipt_date_puts_the_correction() {
    let id: Uuid = "0a0c2c0e-8f3a-4e64-9d6e-0f2f3f6f7a88".parse().unwrap();
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", format!("/receipts/{id}/date").as_str())
        .match_body(Matcher::Json(json!({"receipt_date": "2024-03-18"})))
        .with_status(200)
        .with_body(
            r#"{
                "id": "0a0c2c0e-8f3a-4e64-9d6e-0f2f3f6f7a88",
                "user_id": "7b1f9f86-4a71-4f38-9ce9-4a4f5a8d2c11",
                "receipt_date": "2024-03-18",
                "ocr_status": "manual",
                "storage_path": "receipts/2024/03/18.jpg",
                "image_url": "https://cdn.example.com/r/18.jpg",
                "notes": null,
                "created_at": "2024-03-18T09:30:00Z"
            }"#,
        )
        .create_async()
        .await;

    let receipt = ReceiptsApi::new(client_for(&server))
        .update_date(id, date("2024-03-18"))
        .await
        .unwrap();

    assert_eq!(receipt.receipt_date, Some(date("2024-03-18")));
    mock.assert_async().await;
}

#[tokio::test]
async fn public_holidays_and_countries_decode() {
    let mut server = mockito::Server::new_async().await;
    let _holidays = server
        .mock("GET", "/holidays")
        .match_query(Matcher::UrlEncoded("year".into(), "2024".into()))
        .with_status(200)
        .with_body(
            r#"[{"date": "2024-07-21", "name": "National Day", "local_name": "Nationale feestdag"}]"#,
        )
        .create_async()
        .await;
    let _countries = server
        .mock("GET", "/holidays/countries")
        .with_status(200)
        .with_body(r#"[{"country_code": "BE", "name": "Belgium"}]"#)
        .create_async()
        .await;

    let api = HolidaysApi::new(client_for(&server));
    let holidays = api.public_holidays(2024).await.unwrap();
    let countries = api.countries().await.unwrap();

    assert_eq!(holidays[0].date, date("2024-07-21"));
    assert_eq!(holidays[0].local_name, "Nationale feestdag");
    assert_eq!(countries[0].country_code, "BE");
}

#[tokio::test]
async fn report_download_returns_pdf_bytes() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/report")
        .match_query(Matcher::UrlEncoded("year".into(), "2024".into()))
        .with_status(200)
        .with_header("content-type", "application/pdf")
        .with_body(b"%PDF-1.7 yearly report".as_ref())
        .create_async()
        .await;

    let bytes = ReportApi::new(client_for(&server)).download(2024).await.unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}
