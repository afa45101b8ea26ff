use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::{build_app, config::Config};

fn setup_app() -> Router {
    let config = Config {
        base_api_path: "/api/uav-service".to_string(),
        ..Config::default()
    };
    build_app(config)
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse json")
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn compute_with_explicit_fleet() {
    let app = setup_app();

    let req = post_json(
        "/api/uav-service/uav/compute/",
        json!({
            "user": { "x": 30.0, "y": 0.0 },
            "base": { "x": 0.0, "y": 0.0, "z": 10.0 },
            "step_size": 3.0,
            "initial_drone_positions": [
                { "label": "UAV1", "coordinates": { "x": 10.0, "y": 0.5, "z": 0.3, "yaw": 45.0 } },
                { "label": "UAV2", "coordinates": { "x": 20.0, "y": 0.5, "z": 0.3, "yaw": 0.0 } },
                { "label": "UAV3", "coordinates": { "x": 30.0, "y": 0.5, "z": 0.3, "yaw": 0.0 } },
                { "label": "UAV4", "coordinates": { "x": 40.0, "y": 0.5, "z": 0.3, "yaw": 0.0 } },
                { "label": "UAV5", "coordinates": { "x": 50.0, "y": 0.5, "z": 0.3, "yaw": 0.0 } }
            ]
        }),
    );

    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key("x-request-id"));
    let body = read_json(res).await;

    let positions = body["drone_positions"].as_object().expect("drone positions");
    assert_eq!(positions.len(), 4);
    assert!(!positions.contains_key("UAV5"));

    let first = positions["UAV1"].as_array().unwrap();
    assert_eq!(first[0]["yaw"], json!(45.0));
    let last = first.last().unwrap();
    assert!((last["x"].as_f64().unwrap() - 6.0).abs() < 1e-9);
    assert!((last["z"].as_f64().unwrap() - 8.0).abs() < 1e-9);

    assert_eq!(body["base_coordinates"]["z"], json!(10.0));
    assert_eq!(body["user_coordinates"]["x"], json!(30.0));
    assert_eq!(body["simulation_id"], json!(1));
}

#[tokio::test]
async fn compute_defaults_base_and_fleet() {
    let app = setup_app();

    let req = post_json(
        "/api/uav-service/uav/compute",
        json!({ "user": { "x": 20.0, "y": 0.0 } }),
    );
    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;

    assert_eq!(body["base_coordinates"], json!({ "x": 0.0, "y": 0.0, "z": 0.0 }));
    // ceil(20 / 7) - 1 = 2 relays out of the five sample drones
    assert_eq!(body["drone_positions"].as_object().unwrap().len(), 2);
}

#[tokio::test]
async fn insufficient_drones_is_a_client_error() {
    let app = setup_app();

    let req = post_json(
        "/api/uav-service/uav/compute/",
        json!({
            "user": { "x": 100.0, "y": 0.0 },
            "initial_drone_positions": [
                { "label": "A", "coordinates": { "x": 1.0, "y": 0.0, "z": 0.0 } }
            ]
        }),
    );
    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = read_json(res).await;
    assert_eq!(body["needed"], json!(14));
    assert_eq!(body["available"], json!(1));
}

#[tokio::test]
async fn invalid_parameters_are_client_errors() {
    let app = setup_app();

    let req = post_json(
        "/api/uav-service/uav/compute/",
        json!({ "user": { "x": 10.0, "y": 0.0 }, "step_size": -1.0 }),
    );
    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = read_json(res).await;
    assert_eq!(body["error"], json!("Invalid computation request"));

    let dup = post_json(
        "/api/uav-service/uav/compute/",
        json!({
            "user": { "x": 10.0, "y": 0.0 },
            "initial_drone_positions": [
                { "label": "A", "coordinates": { "x": 1.0, "y": 0.0, "z": 0.0 } },
                { "label": "A", "coordinates": { "x": 2.0, "y": 0.0, "z": 0.0 } }
            ]
        }),
    );
    let res = app.clone().oneshot(dup).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn computed_simulation_can_be_fetched() {
    let app = setup_app();

    let req = post_json(
        "/api/uav-service/uav/compute/",
        json!({ "user": { "x": 12.0, "y": 5.0 }, "base": { "x": 0.0, "y": 0.0, "z": 8.0 } }),
    );
    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let computed = read_json(res).await;
    let id = computed["simulation_id"].as_u64().unwrap();

    let res = app
        .clone()
        .oneshot(get(&format!("/api/uav-service/uav/simulations/{id}")))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let stored = read_json(res).await;
    assert_eq!(stored["drone_positions"], computed["drone_positions"]);
    assert_eq!(stored["drones"].as_array().unwrap().len(), 5);
    assert_eq!(stored["step_size"], json!(3.0));

    let res = app
        .clone()
        .oneshot(get("/api/uav-service/uav/simulations"))
        .await
        .unwrap();
    let list = read_json(res).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["simulation_id"], json!(id));

    let res = app
        .clone()
        .oneshot(get("/api/uav-service/uav/simulations/999"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn tiny_step_size_is_rejected() {
    let app = setup_app();

    let req = post_json(
        "/api/uav-service/uav/compute/",
        json!({ "user": { "x": 30.0, "y": 0.0 }, "step_size": 1e-300 }),
    );
    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = read_json(res).await;
    assert_eq!(body["error"], json!("Invalid computation request"));
    assert!(body["details"].as_str().unwrap().contains("step_size"));

    let res = app
        .clone()
        .oneshot(get("/api/uav-service/uav/simulations"))
        .await
        .unwrap();
    assert!(read_json(res).await.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn simulation_remembers_request_id() {
    let app = setup_app();

    let req = Request::builder()
        .method("POST")
        .uri("/api/uav-service/uav/compute/")
        .header("content-type", "application/json")
        .header("x-request-id", "sim-trace-1")
        .body(Body::from(json!({ "user": { "x": 14.0, "y": 0.0 } }).to_string()))
        .unwrap();
    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["x-request-id"], "sim-trace-1");
    let id = read_json(res).await["simulation_id"].as_u64().unwrap();

    let res = app
        .clone()
        .oneshot(get(&format!("/api/uav-service/uav/simulations/{id}")))
        .await
        .unwrap();
    assert_eq!(read_json(res).await["request_id"], json!("sim-trace-1"));

    let res = app
        .clone()
        .oneshot(get("/api/uav-service/uav/simulations"))
        .await
        .unwrap();
    assert_eq!(read_json(res).await[0]["request_id"], json!("sim-trace-1"));
}

#[tokio::test]
async fn health_and_request_id_echo() {
    let app = setup_app();

    let req = Request::builder()
        .uri("/health")
        .header("x-request-id", "trace-me")
        .body(Body::empty())
        .unwrap();
    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["x-request-id"], "trace-me");
}
