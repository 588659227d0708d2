//! Integration tests for the workforce report engine.
//!
//! This test suite drives the HTTP API end to end:
//! - Live metrics and insights
//! - Report structure and formatted cells
//! - Export through an injected exporter
//! - Error cases

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use workforce_report::api::{AppState, create_router};
use workforce_report::config::ConfigLoader;
use workforce_report::export::JsonExporter;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test(export_dir: &std::path::Path) -> Router {
    let config = ConfigLoader::load("./config")
        .expect("Failed to load config")
        .into_report();
    create_router(AppState::new(config, Arc::new(JsonExporter::new(export_dir))))
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

#[allow(clippy::too_many_arguments)]
fn staff(
    id: &str,
    name: &str,
    department: &str,
    role: &str,
    status: &str,
    salary: u64,
    rating: f64,
    attendance: f64,
    joined: &str,
) -> Value {
    json!({
        "id": id,
        "name": name,
        "department": department,
        "role": role,
        "status": status,
        "salary": salary,
        "performance_rating": rating,
        "attendance_rate": attendance,
        "join_date": joined
    })
}

fn attendance(date: &str, present: u32, absent: u32, late: u32) -> Value {
    json!({ "date": date, "present": present, "absent": absent, "late": late })
}

fn opening(
    position: &str,
    department: &str,
    applicants: u32,
    stage: &str,
    priority: &str,
) -> Value {
    json!({
        "position": position,
        "department": department,
        "applicants": applicants,
        "stage": stage,
        "priority": priority
    })
}

fn fixture() -> Value {
    json!({
        "staff": [
            staff("emp_001", "Sarah Johnson", "Engineering", "Senior Developer", "active", 95000, 4.8, 96.0, "2022-03-15"),
            staff("emp_002", "Michael Chen", "Marketing", "Marketing Manager", "active", 78000, 4.6, 94.0, "2021-08-10"),
            staff("emp_003", "Emily Davis", "Sales", "Sales Representative", "active", 52000, 3.7, 88.0, "2024-01-20"),
            staff("emp_004", "James Wilson", "Engineering", "Developer", "inactive", 72000, 4.2, 91.0, "2023-05-01"),
            staff("emp_005", "Lisa Brown", "HR", "HR Specialist", "active", 48000, 4.5, 97.0, "2024-02-01"),
            staff("emp_006", "David Lee", "Sales", "Account Executive", "active", 65000, 4.1, 85.0, "2020-11-12")
        ],
        "attendance": [
            attendance("2024-02-12", 18, 2, 1),
            attendance("2024-02-05", 10, 10, 0),
            attendance("2024-02-06", 19, 1, 0),
            attendance("2024-02-07", 17, 3, 2),
            attendance("2024-02-08", 20, 0, 1),
            attendance("2024-02-09", 16, 4, 0),
            attendance("2024-02-10", 5, 0, 0),
            attendance("2024-02-11", 4, 1, 0)
        ],
        "recruitment": [
            opening("Data Analyst", "Finance", 12, "interview", "high"),
            opening("Senior Developer", "Engineering", 30, "offer", "medium"),
            opening("Sales Representative", "Sales", 8, "hired", "low")
        ],
        "now": "2024-02-14T09:00:00Z"
    })
}

fn section<'a>(report: &'a Value, page: &str, index: usize) -> &'a Value {
    let page = report["pages"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["kind"] == page)
        .unwrap_or_else(|| panic!("page {page} missing"));
    &page["sections"][index]
}

fn entry<'a>(block: &'a Value, key: &str) -> &'a str {
    block["entries"]
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["key"] == key)
        .and_then(|e| e["value"].as_str())
        .unwrap_or_else(|| panic!("entry {key} missing"))
}

// =============================================================================
// SECTION 1: Live Metrics
// =============================================================================

#[tokio::test]
async fn test_metrics_headcounts_and_averages() {
    let dir = tempfile::tempdir().unwrap();
    let (status, body) = post_json(create_router_for_test(dir.path()), "/metrics", fixture()).await;

    assert_eq!(status, StatusCode::OK);
    let metrics = &body["metrics"];
    assert_eq!(metrics["total_staff"], 6);
    assert_eq!(metrics["active_staff"], 5);
    assert_eq!(metrics["inactive_staff"], 1);
    // 410000 / 6 = 68333.33
    assert_eq!(metrics["average_salary"], 68333);
    // 551 / 6 = 91.83
    assert_eq!(metrics["average_attendance"], 92);
    assert_eq!(metrics["performance_percent"], 86);
    assert_eq!(metrics["recent_hires"], 2);
    assert_eq!(metrics["high_performers"], 3);
    assert_eq!(metrics["high_performer_percent"], 50);
    assert_eq!(metrics["low_attendance"], 2);
    assert_eq!(metrics["pending_reviews"], 1);
    assert_eq!(metrics["open_positions"], 2);
    assert_eq!(metrics["recruiting_departments"], 3);
}

#[tokio::test]
async fn test_metrics_departments_keep_first_appearance_order() {
    let dir = tempfile::tempdir().unwrap();
    let (_, body) = post_json(create_router_for_test(dir.path()), "/metrics", fixture()).await;

    let names: Vec<&str> = body["metrics"]["departments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["department"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Engineering", "Marketing", "Sales", "HR"]);

    let total: u64 = body["metrics"]["departments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["staff_count"].as_u64().unwrap())
        .sum();
    assert_eq!(total, 6);
}

#[tokio::test]
async fn test_metrics_salary_distribution_counts_every_record() {
    let dir = tempfile::tempdir().unwrap();
    let (_, body) = post_json(create_router_for_test(dir.path()), "/metrics", fixture()).await;

    let counts: Vec<u64> = body["metrics"]["salary_distribution"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["count"].as_u64().unwrap())
        .collect();
    assert_eq!(counts, vec![1, 2, 2, 1]);
}

#[tokio::test]
async fn test_metrics_top_performers_ranked() {
    let dir = tempfile::tempdir().unwrap();
    let (_, body) = post_json(create_router_for_test(dir.path()), "/metrics", fixture()).await;

    let ranked: Vec<&str> = body["metrics"]["top_performers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ranked,
        vec!["emp_001", "emp_002", "emp_005", "emp_004", "emp_006"]
    );
}

#[tokio::test]
async fn test_metrics_attendance_window_is_latest_seven_days() {
    let dir = tempfile::tempdir().unwrap();
    let (_, body) = post_json(create_router_for_test(dir.path()), "/metrics", fixture()).await;

    let days = body["metrics"]["attendance_window"]["days"].as_array().unwrap();
    assert_eq!(days.len(), 7);
    assert_eq!(days[0]["date"], "2024-02-06");
    assert_eq!(days[6]["date"], "2024-02-12");
    assert_eq!(days[6]["rate_percent"], 90);
    assert_eq!(days[6]["total"], 21);
}

#[tokio::test]
async fn test_metrics_insights_name_top_department() {
    let dir = tempfile::tempdir().unwrap();
    let (_, body) = post_json(create_router_for_test(dir.path()), "/metrics", fixture()).await;

    let insights = body["insights"].as_array().unwrap();
    assert_eq!(insights.len(), 6);
    assert_eq!(insights[0]["kind"], "top_department");
    assert_eq!(insights[0]["value"], "Marketing");
}

#[tokio::test]
async fn test_metrics_trends_only_with_baseline() {
    let dir = tempfile::tempdir().unwrap();
    let (_, without) =
        post_json(create_router_for_test(dir.path()), "/metrics", fixture()).await;
    assert!(without["metrics"]["trends"].is_null());

    let mut request = fixture();
    request["baseline"] = json!({
        "total_staff": 5,
        "average_salary": 65000,
        "average_attendance": 92.0,
        "average_performance": 4.0
    });
    let (_, with) = post_json(create_router_for_test(dir.path()), "/metrics", request).await;

    let trends = &with["metrics"]["trends"];
    assert_eq!(trends["total_staff"]["percent"], 20);
    assert_eq!(trends["total_staff"]["is_positive"], true);
    assert_eq!(trends["average_salary"]["percent"], 5);
}

#[tokio::test]
async fn test_metrics_empty_roster_is_all_zero() {
    let dir = tempfile::tempdir().unwrap();
    let (status, body) = post_json(
        create_router_for_test(dir.path()),
        "/metrics",
        json!({ "staff": [], "now": "2024-02-14T09:00:00Z" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["metrics"]["total_staff"], 0);
    assert_eq!(body["metrics"]["average_salary"], 0);
    assert!(body["metrics"]["salary_range"].is_null());
    assert_eq!(body["insights"][0]["value"], "N/A");
}

// =============================================================================
// SECTION 2: Report Structure
// =============================================================================

#[tokio::test]
async fn test_report_has_seven_pages_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let (status, report) =
        post_json(create_router_for_test(dir.path()), "/report", fixture()).await;

    assert_eq!(status, StatusCode::OK);
    let kinds: Vec<&str> = report["pages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["kind"].as_str().unwrap())
        .collect();
    assert_eq!(
        kinds,
        vec![
            "executive_summary",
            "department_performance",
            "top_performers",
            "weekly_attendance",
            "recruitment_pipeline",
            "key_insights",
            "closing"
        ]
    );
    assert_eq!(report["file_name"], "HR-Dashboard-Report-2024-02-14.json");
}

#[tokio::test]
async fn test_report_executive_summary_lines() {
    let dir = tempfile::tempdir().unwrap();
    let (_, report) = post_json(create_router_for_test(dir.path()), "/report", fixture()).await;
    let block = section(&report, "executive_summary", 1);

    assert_eq!(block["type"], "summary");
    assert_eq!(
        entry(block, "Total Workforce"),
        "6 employees (5 active, 1 inactive)"
    );
    assert_eq!(
        entry(block, "Average Annual Salary"),
        "$68,333 (Range: $48,000 - $95,000)"
    );
    assert_eq!(entry(block, "Overall Attendance Rate"), "92% (Target: 95%)");
    assert_eq!(entry(block, "Average Performance Score"), "4.3/5.0 (86%)");
    assert_eq!(
        entry(block, "Open Positions"),
        "2 active recruitments across 3 departments"
    );
}

#[tokio::test]
async fn test_report_department_table_rows() {
    let dir = tempfile::tempdir().unwrap();
    let (_, report) = post_json(create_router_for_test(dir.path()), "/report", fixture()).await;
    let table = section(&report, "department_performance", 0);

    assert_eq!(table["type"], "table");
    assert_eq!(table["columns"].as_array().unwrap().len(), 6);
    assert_eq!(
        table["rows"][0],
        json!(["Engineering", "2", "$83,500", "4.5/5.0", "94%", "A+"])
    );
    assert_eq!(
        table["rows"][2],
        json!(["Sales", "2", "$58,500", "3.9/5.0", "87%", "B+"])
    );
}

#[tokio::test]
async fn test_report_attendance_row_formatting() {
    let dir = tempfile::tempdir().unwrap();
    let (_, report) = post_json(create_router_for_test(dir.path()), "/report", fixture()).await;
    let table = section(&report, "weekly_attendance", 0);

    assert_eq!(
        table["rows"][6],
        json!(["Monday, Feb 12", "18", "2", "1", "90%", "21"])
    );
}

#[tokio::test]
async fn test_report_recruitment_status_column() {
    let dir = tempfile::tempdir().unwrap();
    let (_, report) = post_json(create_router_for_test(dir.path()), "/report", fixture()).await;
    let table = section(&report, "recruitment_pipeline", 0);

    let statuses: Vec<&str> = table["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row[5].as_str().unwrap())
        .collect();
    assert_eq!(statuses, vec!["In Progress", "In Progress", "Complete"]);
}

#[tokio::test]
async fn test_report_closing_metadata() {
    let dir = tempfile::tempdir().unwrap();
    let (_, report) = post_json(create_router_for_test(dir.path()), "/report", fixture()).await;
    let block = section(&report, "closing", 1);

    assert_eq!(entry(block, "Report Classification"), "Internal Use Only");
    assert_eq!(entry(block, "Next Review Date"), "3/15/2024");
    assert_eq!(
        report["pages"][6]["footer"]["pagination"],
        "HR Dashboard Analytics Report - Page 7 of 7"
    );
    assert_eq!(
        report["pages"][6]["footer"]["stamp"],
        "Generated: February 14, 2024 | Confidential"
    );
}

#[tokio::test]
async fn test_report_at_end_of_calendar_has_no_next_review() {
    let dir = tempfile::tempdir().unwrap();
    let mut body = fixture();
    body["now"] = json!("+262142-12-31T00:00:00Z");

    let (status, report) = post_json(create_router_for_test(dir.path()), "/report", body).await;

    assert_eq!(status, StatusCode::OK);
    let block = section(&report, "closing", 1);
    assert_eq!(entry(block, "Next Review Date"), "N/A");
}

// =============================================================================
// SECTION 3: Export
// =============================================================================

#[tokio::test]
async fn test_export_writes_document() {
    let dir = tempfile::tempdir().unwrap();
    let (status, body) = post_json(
        create_router_for_test(dir.path()),
        "/report/export",
        fixture(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    let written = dir.path().join("HR-Dashboard-Report-2024-02-14.json");
    assert!(written.exists());

    let document: Value = serde_json::from_slice(&std::fs::read(written).unwrap()).unwrap();
    assert_eq!(document["pages"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn test_export_to_missing_directory_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("not-created");
    let (status, body) =
        post_json(create_router_for_test(&missing), "/report/export", fixture()).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "EXPORTER_UNAVAILABLE");
}

// =============================================================================
// SECTION 4: Error Cases
// =============================================================================

#[tokio::test]
async fn test_duplicate_attendance_date_returns_400() {
    let dir = tempfile::tempdir().unwrap();
    let mut request = fixture();
    request["attendance"]
        .as_array_mut()
        .unwrap()
        .push(attendance("2024-02-12", 1, 1, 1));

    let (status, body) = post_json(create_router_for_test(dir.path()), "/report", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "DUPLICATE_ATTENDANCE_DATE");
}

#[tokio::test]
async fn test_blank_recruitment_position_returns_400() {
    let dir = tempfile::tempdir().unwrap();
    let mut request = fixture();
    request["recruitment"][0]["position"] = json!("   ");

    let (status, body) = post_json(create_router_for_test(dir.path()), "/metrics", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_RECRUITMENT");
}

#[tokio::test]
async fn test_unknown_stage_returns_400() {
    let dir = tempfile::tempdir().unwrap();
    let mut request = fixture();
    request["recruitment"][0]["stage"] = json!("onboarding");

    let (status, body) = post_json(create_router_for_test(dir.path()), "/metrics", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MALFORMED_JSON");
}
