mod common;

use std::time::Duration;

use common::{
    AIR_QUALITY_PATH, FORECAST_PATH, SEARCH_PATH, air_quality_body, detached_state,
    forecast_body, geocode_body, key, mock_cli, pump_until,
};
use crossterm::event::{Event, KeyCode};
use skycast::app::{
    animation::VisualState,
    events::AppEvent,
    state::StatusKind,
};
use tokio::sync::mpsc;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

async fn mount_weather(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(FORECAST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(48)))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(AIR_QUALITY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(air_quality_body()))
        .mount(server)
        .await;
}

#[tokio::test]
async fn city_argument_loads_the_dashboard() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("name", "Stockholm"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(geocode_body(&[("Stockholm", 59.3293, 18.0686)])),
        )
        .mount(&server)
        .await;
    mount_weather(&server).await;

    let cli = mock_cli(&server, &["Stockholm", "--no-animation", "--no-geolocation"]);
    let mut state = detached_state(&cli);
    let (tx, mut rx) = mpsc::channel(256);
    tx.send(AppEvent::Bootstrap).await.expect("send");

    pump_until(&mut state, &tx, &mut rx, |s| s.bundle.is_some()).await;

    let bundle = state.bundle.as_ref().expect("bundle");
    assert_eq!(bundle.location.name, "Stockholm");
    assert_eq!(bundle.hourly.len(), 48);
    assert_eq!(bundle.air_quality.us_aqi, Some(42));
    assert_eq!(state.status.kind, StatusKind::Info);
    assert!(!state.loading);
}

#[tokio::test]
async fn unknown_city_never_requests_a_forecast() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(FORECAST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(24)))
        .expect(0)
        .mount(&server)
        .await;

    let cli = mock_cli(
        &server,
        &["Nowhere12345", "--no-animation", "--no-geolocation"],
    );
    let mut state = detached_state(&cli);
    let (tx, mut rx) = mpsc::channel(256);
    tx.send(AppEvent::Bootstrap).await.expect("send");

    pump_until(&mut state, &tx, &mut rx, |s| s.status.kind == StatusKind::Error).await;

    assert!(state.bundle.is_none());
    assert!(state.status.message.contains("Nowhere12345"));
}

#[tokio::test]
async fn malformed_refresh_keeps_previous_weather() {
    let server = MockServer::start().await;
    mount_weather(&server).await;

    let cli = mock_cli(
        &server,
        &["--lat", "59.33", "--lon", "18.07", "--no-animation", "--no-geolocation"],
    );
    let mut state = detached_state(&cli);
    let (tx, mut rx) = mpsc::channel(256);
    tx.send(AppEvent::Bootstrap).await.expect("send");
    pump_until(&mut state, &tx, &mut rx, |s| s.bundle.is_some()).await;
    let before = state.bundle.as_ref().expect("bundle").current.temperature_c;

    server.reset().await;
    Mock::given(method("GET"))
        .and(path(FORECAST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"current\": nope"))
        .mount(&server)
        .await;

    tx.send(key(KeyCode::Char('r'))).await.expect("send");
    pump_until(&mut state, &tx, &mut rx, |s| s.status.kind == StatusKind::Error).await;

    let bundle = state.bundle.as_ref().expect("previous bundle kept");
    assert!((bundle.current.temperature_c - before).abs() < f32::EPSILON);
    assert!(state.status.message.starts_with("Invalid weather data"));
}

#[tokio::test]
async fn upstream_outage_is_reported_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(FORECAST_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let cli = mock_cli(
        &server,
        &["--lat", "1", "--lon", "2", "--no-animation", "--no-geolocation"],
    );
    let mut state = detached_state(&cli);
    let (tx, mut rx) = mpsc::channel(256);
    tx.send(AppEvent::Bootstrap).await.expect("send");

    pump_until(&mut state, &tx, &mut rx, |s| s.status.kind == StatusKind::Error).await;
    assert!(state.status.message.contains("HTTP 503"));
}

#[tokio::test]
async fn resizing_while_raining_keeps_one_loop_per_canvas() {
    let server = MockServer::start().await;
    mount_weather(&server).await;

    let cli = mock_cli(&server, &["--lat", "59.33", "--lon", "18.07", "--no-geolocation"]);
    let mut state = detached_state(&cli);
    let (tx, mut rx) = mpsc::channel(256);
    tx.send(AppEvent::Input(Event::Resize(120, 40))).await.expect("send");
    tx.send(AppEvent::Bootstrap).await.expect("send");
    pump_until(&mut state, &tx, &mut rx, |s| s.bundle.is_some()).await;
    assert_eq!(state.precipitation.state(), VisualState::Active);

    for (width, height) in [(100, 30), (140, 48), (90, 26)] {
        tx.send(AppEvent::Input(Event::Resize(width, height)))
            .await
            .expect("send");
    }
    pump_until(&mut state, &tx, &mut rx, |s| s.viewport == (90, 26)).await;
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert!(state.precipitation.has_loop());
    assert!(state.wind.has_loop());
    assert_eq!(state.live_frame_loops(), 2);

    let generation = state.precipitation.generation();
    state
        .handle_event(AppEvent::Input(Event::Resize(90, 26)), &tx)
        .await
        .expect("resize");
    assert_eq!(state.precipitation.generation(), generation);

    state.handle_event(AppEvent::Quit, &tx).await.expect("quit");
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(state.live_frame_loops(), 0);
}

#[tokio::test]
async fn typing_a_city_offers_suggestions() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(geocode_body(&[
            ("Paris", 48.85, 2.35),
            ("Paris", 33.66, -95.55),
        ])))
        .mount(&server)
        .await;
    mount_weather(&server).await;

    let cli = mock_cli(&server, &["--no-animation", "--no-geolocation"]);
    let mut state = detached_state(&cli);
    let (tx, mut rx) = mpsc::channel(256);

    for event in [
        key(KeyCode::Char('/')),
        key(KeyCode::Char('P')),
        key(KeyCode::Char('a')),
        key(KeyCode::Char('r')),
    ] {
        state.handle_event(event, &tx).await.expect("key");
    }
    pump_until(&mut state, &tx, &mut rx, |s| s.search.suggestions.len() == 2).await;

    for event in [key(KeyCode::Down), key(KeyCode::Down), key(KeyCode::Enter)] {
        state.handle_event(event, &tx).await.expect("key");
    }
    assert!(!state.search.active);
    pump_until(&mut state, &tx, &mut rx, |s| s.bundle.is_some()).await;

    let location = &state.bundle.as_ref().expect("bundle").location;
    assert!((location.latitude - 33.66).abs() < 1e-9);
}
