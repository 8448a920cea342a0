//! End-to-end tests of the REST API against in-process lookups.

#![cfg(feature = "http-server")]

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::NaiveTime;
use serde_json::{json, Value};
use tower::ServiceExt;

use janma_rust::http::{create_router, create_router_with_timeout, AppState};
use janma_rust::lookup::{
    FixedEphemeris, FixedSunrise, Geocoder, LookupFactory, LookupProviders, LookupResult,
    StaticGeocoder,
};
use janma_rust::models::GeoCoordinate;
use janma_rust::services::Calculator;

fn app(sunrise: FixedSunrise, longitude: Option<f64>) -> Router {
    let geocoder = StaticGeocoder::new()
        .with_place("Pune", 18.5204, 73.8567)
        .with_place("Varanasi", 25.3176, 82.9739);
    let ephemeris = longitude.map(FixedEphemeris::degrees);
    let providers = LookupFactory::create_local(geocoder, sunrise, ephemeris);
    create_router(AppState::new(Calculator::new(
        providers,
        chrono_tz::Asia::Kolkata,
    )))
}

fn sunrise_at(h: u32, m: u32) -> FixedSunrise {
    FixedSunrise::at(NaiveTime::from_hms_opt(h, m, 0).unwrap())
}

async fn post(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn birth(dob: &str, time: &str, place: &str) -> Value {
    json!({
        "name": "Asha",
        "dob": dob,
        "birthTime": time,
        "birthPlace": place,
    })
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app(FixedSunrise::unavailable(), None)
        .oneshot(request)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["timezone"], "Asia/Kolkata");
}

#[tokio::test]
async fn test_calculate_isthkaal() {
    // 00:30 UTC is 06:00 IST
    let (status, body) = post(
        app(sunrise_at(0, 30), None),
        "/calculate",
        birth("2024-01-15", "08:00", "Pune"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Asha");
    assert_eq!(body["dob"], "2024-01-15");
    assert_eq!(body["sunrise"], "06:00:00");
    assert_eq!(body["isthkaal"], "5 घटी 0 पल");
}

#[tokio::test]
async fn test_response_echoes_submitted_name_and_date() {
    let (status, body) = post(
        app(sunrise_at(0, 30), None),
        "/calculate",
        json!({
            "name": "Asha Rao ",
            "dob": "2024-1-15",
            "birthTime": "06:24",
            "birthPlace": "Pune",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Asha Rao ");
    assert_eq!(body["dob"], "2024-1-15");
}

#[tokio::test]
async fn test_calculate_isthkaal_before_sunrise_wraps() {
    let (status, body) = post(
        app(sunrise_at(0, 30), None),
        "/calculate",
        birth("2024-01-15", "05:36:00", "Pune"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    // 23h36m after the previous sunrise
    assert_eq!(body["isthkaal"], "59 घटी 0 पल");
}

#[tokio::test]
async fn test_calculate_nakshatra() {
    let (status, body) = post(
        app(FixedSunrise::unavailable(), Some(13.3333)),
        "/calculate-nakshatra",
        birth("1990-05-17", "06:30", "Varanasi"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nakshatra"], "Bharani");
    assert_eq!(body["nakshatra_pada"], "Pada 1");
    assert_eq!(body["rashi"], "Mesha");
    assert_eq!(body["rashi_naam"], "Chu, Che, Cho, La, Li, Lu, Le, Lo, A");
    assert!(body["rashi_reason"].as_str().unwrap().contains("Mesha"));
}

#[tokio::test]
async fn test_missing_fields() {
    let (status, body) = post(
        app(sunrise_at(0, 30), None),
        "/calculate",
        json!({"name": "Asha", "dob": "2024-01-15"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields");
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_bad_date() {
    let (status, body) = post(
        app(sunrise_at(0, 30), None),
        "/calculate-nakshatra",
        birth("2024-02-30", "06:30", "Pune"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_unknown_place() {
    let (status, body) = post(
        app(sunrise_at(0, 30), None),
        "/calculate",
        birth("2024-01-15", "06:30", "Atlantis"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid birth place");
    assert_eq!(body["code"], "RESOLUTION_FAILED");
}

#[tokio::test]
async fn test_sunrise_unavailable() {
    let (status, body) = post(
        app(FixedSunrise::unavailable(), None),
        "/calculate",
        birth("2024-01-15", "06:30", "Pune"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "Could not fetch sunrise time");
    assert_eq!(body["code"], "UPSTREAM_UNAVAILABLE");
}

#[tokio::test]
async fn test_malformed_json() {
    let request = Request::builder()
        .method("POST")
        .uri("/calculate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app(sunrise_at(0, 30), None)
        .oneshot(request)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let request = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "https://example.org")
        .body(Body::empty())
        .unwrap();
    let response = app(FixedSunrise::unavailable(), None)
        .oneshot(request)
        .await
        .unwrap();
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn test_unknown_route() {
    let request = Request::builder()
        .uri("/calculate-rashi")
        .body(Body::empty())
        .unwrap();
    let response = app(FixedSunrise::unavailable(), None)
        .oneshot(request)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

struct StalledGeocoder;

#[async_trait::async_trait]
impl Geocoder for StalledGeocoder {
    async fn locate(&self, _place: &str) -> LookupResult<Option<GeoCoordinate>> {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Ok(GeoCoordinate::new(18.5204, 73.8567))
    }
}

#[tokio::test]
async fn test_slow_lookup_times_out_with_json_body() {
    let providers = LookupProviders {
        geocoder: Arc::new(StalledGeocoder),
        sunrise: Arc::new(sunrise_at(0, 30)),
        ephemeris: Arc::new(FixedEphemeris::degrees(10.0)),
    };
    let state = AppState::new(Calculator::new(providers, chrono_tz::Asia::Kolkata));
    let app = create_router_with_timeout(state, Duration::from_millis(50));

    let (status, body) = post(app, "/calculate", birth("2024-01-15", "06:24", "Pune")).await;
    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(body["error"], "Request timed out");
    assert_eq!(body["code"], "UPSTREAM_UNAVAILABLE");
}
