use axum::http::{StatusCode, header};
use serde_json::{Value, json};
use tokio_stream::StreamExt;

mod common;
use common::mock_app::{MockApp, body_string};

#[tokio::test]
async fn test_get_sensors() {
    let app = MockApp::new();

    let response = app.get("/api/sensors").await;
    assert_eq!(response.status(), StatusCode::OK);

    let sensors: Vec<Value> = serde_json::from_str(&body_string(response).await).unwrap();
    let kinds: Vec<Value> = sensors.iter().map(|s| s["kind"].clone()).collect();
    assert_eq!(kinds, vec![json!("temperature"), json!("noise"), json!("light"), json!("air")]);
}

#[tokio::test]
async fn test_get_sensor_by_kind() {
    let app = MockApp::new();

    let response = app.get("/api/sensors/light").await;
    assert_eq!(response.status(), StatusCode::OK);

    let sensor: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(sensor["title"], json!("Sensor de Luz"));
    assert_eq!(sensor["unit"], json!(" lux"));
    assert_eq!(sensor["thresholds"].as_array().unwrap().len(), 4);
    assert_eq!(sensor["thresholds"][3]["label"], json!("Tenue"));
    assert_eq!(sensor["thresholds"][0]["band"], json!("red"));
}

#[tokio::test]
async fn test_unknown_sensor_is_json_404() {
    let app = MockApp::new();

    for uri in ["/api/sensors/humidity", "/api/sensors/humidity/stream"] {
        let response = app.get(uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");

        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"]["code"], json!(404));
        assert_eq!(body["error"]["message"], json!("Sensor not found"));
    }
}

#[tokio::test]
async fn test_stream_starts_with_initial_snapshot() {
    let app = MockApp::new();

    let response = app.get("/api/sensors/temperature/stream").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/event-stream");

    let mut body = response.into_body().into_data_stream();
    let chunk = body.next().await.unwrap().unwrap();
    let event = String::from_utf8(chunk.to_vec()).unwrap();

    assert!(event.contains("event: snapshot"));

    let data = event
        .lines()
        .find_map(|line| line.strip_prefix("data: "))
        .unwrap();
    let snapshot: Value = serde_json::from_str(data).unwrap();
    assert_eq!(snapshot["kind"], json!("temperature"));
    assert_eq!(snapshot["ready"], json!(false));
    assert_eq!(snapshot["current"], Value::Null);
    assert_eq!(snapshot["history"], json!([]));
}
