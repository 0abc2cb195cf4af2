#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
};
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::Value;
use tower::ServiceExt;

use pizza_server::{db::entities::prelude::RestaurantPizza, state::AppState, test_helpers};

pub async fn send(state: &Arc<AppState>, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = test_helpers::test_app(state)
        .oneshot(request)
        .await
        .expect("request should succeed");
    let status = response.status();
    let body = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should read");
    (status, body.to_vec())
}

pub async fn json_response(state: &Arc<AppState>, request: Request<Body>) -> (StatusCode, Value) {
    let (status, body) = send(state, request).await;
    let json = serde_json::from_slice(&body).expect("body should be json");
    (status, json)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn create_restaurant_pizza(state: &Arc<AppState>, body: Value) -> (StatusCode, Value) {
    json_response(state, post_json("/restaurant_pizzas", &body)).await
}

pub async fn association_count(state: &Arc<AppState>) -> u64 {
    RestaurantPizza::find()
        .count(&state.db)
        .await
        .expect("count should succeed")
}
