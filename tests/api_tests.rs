//! API integration tests, run in-process against the router

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use checkpoint_staffing::{api::create_router, AppConfig, AppState};

fn app() -> Router {
    create_router(AppState::new(AppConfig::default()))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    let request = match body {
        Some(body) => request.body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to send request");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response")
    };
    (status, body)
}

fn hour(start: u32, arrival: [i64; 4], departure: [i64; 4]) -> Value {
    json!({
        "hourLabel": format!("{:02}~{:02}", start, start + 1),
        "hourStart": start,
        "arrivalByZone": { "AB": arrival[0], "C": arrival[1], "D": arrival[2], "EF": arrival[3] },
        "departureByZone": { "AB": departure[0], "C": departure[1], "D": departure[2], "EF": departure[3] }
    })
}

fn forecast() -> Value {
    json!({
        "id": "fc-2025-12-01",
        "date": "2025-12-01",
        "terminal": "T1",
        "hourlyData": [
            hour(7, [1000, 800, 600, 400], [500, 400, 300, 200]),
            hour(8, [2100, 2100, 2100, 2000], [0, 0, 0, 0]),
            hour(9, [2100, 2100, 2050, 2050], [0, 0, 0, 0]),
            hour(10, [0, 0, 0, 0], [0, 0, 0, 0])
        ]
    })
}

#[tokio::test]
async fn test_health_check() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/v1/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(&app, Method::GET, "/api/v1/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_compute_report_with_current_settings() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/staffing/report",
        Some(json!({ "forecast": forecast() })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["forecastId"], "fc-2025-12-01");
    assert_eq!(body["parameters"]["targetUtilization"], 0.85);

    let hours = body["hourlyRequirement"].as_array().unwrap();
    assert_eq!(hours.len(), 4);
    assert_eq!(hours[0]["arrival"]["AB"]["passengers"], 1000);
    assert_eq!(hours[0]["arrivalPassengers"], 2800);
    assert_eq!(hours[1]["alertLevel"], "orange");
    assert_eq!(hours[2]["alertLevel"], "red");
    assert_eq!(hours[3]["totalArrivalStaff"], 0);

    let summary = &body["summary"];
    assert_eq!(summary["peakHour"], "08~09");
    assert_eq!(summary["alertHours"], json!(["08~09", "09~10"]));
    assert_eq!(summary["totalDailyDeparture"], 1400);
}

#[tokio::test]
async fn test_compute_report_rejects_zero_utilization() {
    let app = app();
    let (_, mut params) = send(&app, Method::GET, "/api/v1/settings", None).await;
    params["targetUtilization"] = json!(0.0);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/staffing/report",
        Some(json!({ "forecast": forecast(), "parameters": params })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_zone_requirement() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/staffing/zone",
        Some(json!({ "passengers": 1000, "direction": "arrival" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["requiredStaff"], 18);
    assert_eq!(body["effectiveServiceRate"], 48.0);

    let (_, body) = send(
        &app,
        Method::POST,
        "/api/v1/staffing/zone",
        Some(json!({ "passengers": -20, "direction": "departure" })),
    )
    .await;
    assert_eq!(body["requiredStaff"], 0);
}

#[tokio::test]
async fn test_cross_check() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/staffing/cross-check",
        Some(json!({ "forecast": forecast(), "targetWaitMinutes": 10.0 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["crossCheck"]["targetWaitMinutes"], 10.0);

    let rows = body["crossCheck"]["rows"].as_array().unwrap();
    // hour 7: 4 + 4 loaded zones, hours 8 and 9: 4 arrival zones each
    assert_eq!(rows.len(), 16);
    assert!(rows
        .iter()
        .all(|r| r["heuristicStaff"].as_u64().unwrap() >= 1));
}

#[tokio::test]
async fn test_settings_update_and_reset() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/v1/settings",
        Some(json!({ "autoGateRatio": 0.5, "foreignRatio": { "arrival": 0.4 } })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["autoGateRatio"], 0.5);
    assert_eq!(body["foreignRatio"]["arrival"], 0.4);
    assert_eq!(body["foreignRatio"]["departure"], 0.3);

    let (_, body) = send(&app, Method::GET, "/api/v1/settings", None).await;
    assert_eq!(body["autoGateRatio"], 0.5);

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/v1/settings",
        Some(json!({ "alertThresholds": { "blue": 9000.0 } })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");

    let (status, body) = send(&app, Method::POST, "/api/v1/settings/reset", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["autoGateRatio"], 0.3);
}

#[tokio::test]
async fn test_manual_forecast() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/forecasts/manual",
        Some(json!({ "date": "2025-12-01", "arrivals": [400, 1003], "departures": [100] })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["source"], "manual");
    assert_eq!(body["hourlyData"][1]["hourLabel"], "01~02");
    assert_eq!(body["hourlyData"][1]["arrivalByZone"]["EF"], 250);
    assert_eq!(body["hourlyData"][1]["arrivalTotal"], 1003);
    assert_eq!(body["hourlyData"][1]["departureTotal"], 0);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/forecasts/manual",
        Some(json!({ "date": "2025-12-01", "arrivals": [2], "departures": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["hourlyData"][0]["arrivalByZone"]["AB"], 0);
    assert_eq!(body["hourlyData"][0]["arrivalByZone"]["EF"], 2);
    assert_eq!(body["hourlyData"][0]["arrivalTotal"], 2);

    let too_many: Vec<u64> = vec![10; 25];
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/forecasts/manual",
        Some(json!({ "date": "2025-12-01", "arrivals": too_many, "departures": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/forecasts/manual",
        Some(json!({ "date": "not-a-date", "arrivals": [1], "departures": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_alert_classification() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/alerts/classify",
        Some(json!({ "passengers": 7700 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["alertLevel"], "yellow");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/alerts/sequence",
        Some(json!({
            "hours": [
                { "hourLabel": "07~08", "total": 7300 },
                { "hourLabel": "08~09", "total": 7700 },
                { "hourLabel": "09~10", "total": 8300 },
                { "hourLabel": "10~11", "total": 8300 },
                { "hourLabel": "11~12" }
            ]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["levels"]["07~08"], "blue");
    assert_eq!(body["levels"]["08~09"], "yellow");
    assert_eq!(body["levels"]["09~10"], "orange");
    assert_eq!(body["levels"]["10~11"], "red");
    assert_eq!(body["levels"]["11~12"], "normal");
    assert_eq!(body["alertHours"], json!(["07~08", "08~09", "09~10", "10~11"]));
}

#[tokio::test]
async fn test_queue_metrics() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/queue/metrics",
        Some(json!({ "lambda": 100.0, "mu": 60.0, "servers": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stable"], true);
    let wq = body["wq"].as_f64().unwrap();
    assert!((wq - 2.2727).abs() < 1e-3);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/queue/metrics",
        Some(json!({ "lambda": 200.0, "mu": 60.0, "servers": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stable"], false);
    assert!(body["wq"].is_null());

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/queue/metrics",
        Some(json!({ "lambda": 100.0, "mu": 0.0, "servers": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "InvalidQueueParameter");
}

#[tokio::test]
async fn test_minimum_servers() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/queue/minimum-servers",
        Some(json!({ "lambda": 100.0, "mu": 60.0, "targetWaitMinutes": 1.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["servers"], 3);
    assert_eq!(body["targetMet"], true);
    assert_eq!(body["maxServers"], 100);

    let (_, body) = send(
        &app,
        Method::POST,
        "/api/v1/queue/minimum-servers",
        Some(json!({ "lambda": 0.0, "mu": 60.0 })),
    )
    .await;
    assert_eq!(body["servers"], 0);
    assert_eq!(body["targetWaitMinutes"], 15.0);
    assert!(body["metrics"].is_null());
}
