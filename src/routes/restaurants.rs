use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    routing::get,
};
use serde::Serialize;

use crate::{
    db::entities::{restaurant, restaurant_pizza},
    response::{ApiResponse, ApiResult},
    services::{ServiceContext, restaurant_service::RestaurantWithPizzas},
    state::AppState,
};

#[derive(Debug, Serialize)]
pub struct RestaurantResponse {
    pub id: i32,
    pub name: String,
    pub address: String,
}

#[derive(Debug, Serialize)]
pub struct RestaurantPizzaResponse {
    pub id: i32,
    pub price: i32,
    pub pizza_id: i32,
    pub restaurant_id: i32,
}

#[derive(Debug, Serialize)]
pub struct RestaurantDetailResponse {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<RestaurantPizzaResponse>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/restaurants", get(list_restaurants))
        .route(
            "/restaurants/{id}",
            get(get_restaurant).delete(delete_restaurant),
        )
        .with_state(state)
}

async fn list_restaurants(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Vec<RestaurantResponse>> {
    tracing::debug!("GET /restaurants route accessed");
    let restaurants = ServiceContext::from_state(&state)
        .restaurant()
        .list_restaurants()
        .await?;
    ApiResponse::ok(restaurants.into_iter().map(RestaurantResponse::from).collect())
}

async fn get_restaurant(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> ApiResult<RestaurantDetailResponse> {
    tracing::debug!("GET /restaurants/{id} route accessed");
    let detail = ServiceContext::from_state(&state)
        .restaurant()
        .get_with_pizzas(id)
        .await?;
    ApiResponse::ok(detail.into())
}

async fn delete_restaurant(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> ApiResult<()> {
    tracing::debug!("DELETE /restaurants/{id} route accessed");
    ServiceContext::from_state(&state)
        .restaurant()
        .delete(id)
        .await?;
    ApiResponse::no_content()
}

impl From<restaurant::Model> for RestaurantResponse {
    fn from(model: restaurant::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            address: model.address,
        }
    }
}

impl From<restaurant_pizza::Model> for RestaurantPizzaResponse {
    fn from(model: restaurant_pizza::Model) -> Self {
        Self {
            id: model.id,
            price: model.price,
            pizza_id: model.pizza_id,
            restaurant_id: model.restaurant_id,
        }
    }
}

impl From<RestaurantWithPizzas> for RestaurantDetailResponse {
    fn from(detail: RestaurantWithPizzas) -> Self {
        let RestaurantWithPizzas {
            restaurant,
            restaurant_pizzas,
        } = detail;
        Self {
            id: restaurant.id,
            name: restaurant.name,
            address: restaurant.address,
            restaurant_pizzas: restaurant_pizzas
                .into_iter()
                .map(RestaurantPizzaResponse::from)
                .collect(),
        }
    }
}
