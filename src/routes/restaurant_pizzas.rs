use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{pizzas::PizzaResponse, restaurants::RestaurantResponse};
use crate::{
    error::AppError,
    response::{ApiResponse, ApiResult},
    services::{
        ServiceContext,
        restaurant_pizza_service::{CreatedRestaurantPizza, RestaurantPizzaDraft},
    },
    state::AppState,
};

const INVALID_REQUEST_DATA: &str = "Invalid request data";

/// Body of `POST /restaurant_pizzas`.
///
/// Every field is optional at the serde level so that a missing field is
/// reported by [`CreateRestaurantPizzaRequest::validate`] by name. `price` is
/// kept as raw JSON: its kind and range are checked only after the referenced
/// rows are found.
#[derive(Debug, Deserialize)]
pub struct CreateRestaurantPizzaRequest {
    pub price: Option<Value>,
    pub pizza_id: Option<i32>,
    pub restaurant_id: Option<i32>,
}

impl CreateRestaurantPizzaRequest {
    /// Decodes a JSON object. Field type errors (e.g. a string id) are malformed requests.
    pub fn from_object(object: Map<String, Value>) -> Result<Self, AppError> {
        serde_json::from_value(Value::Object(object))
            .map_err(|err| AppError::malformed_request(format!("{INVALID_REQUEST_DATA}: {err}")))
    }

    pub fn validate(self) -> Result<RestaurantPizzaDraft, AppError> {
        let price = self.price.ok_or_else(|| missing_field("price"))?;
        let pizza_id = self.pizza_id.ok_or_else(|| missing_field("pizza_id"))?;
        let restaurant_id = self
            .restaurant_id
            .ok_or_else(|| missing_field("restaurant_id"))?;

        Ok(RestaurantPizzaDraft {
            price,
            pizza_id,
            restaurant_id,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedRestaurantPizzaResponse {
    pub id: i32,
    pub price: i32,
    pub pizza_id: i32,
    pub restaurant_id: i32,
    pub pizza: PizzaResponse,
    pub restaurant: RestaurantResponse,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/restaurant_pizzas", post(create_restaurant_pizza))
        .with_state(state)
}

async fn create_restaurant_pizza(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> ApiResult<CreatedRestaurantPizzaResponse> {
    tracing::debug!("POST /restaurant_pizzas route accessed");
    let Json(object) = payload.map_err(|rejection| {
        AppError::malformed_request(format!(
            "{INVALID_REQUEST_DATA}: {}",
            rejection.body_text()
        ))
    })?;
    let draft = CreateRestaurantPizzaRequest::from_object(object)?.validate()?;

    let created = ServiceContext::from_state(&state)
        .restaurant_pizza()
        .create(draft)
        .await?;
    ApiResponse::created(created.into())
}

fn missing_field(name: &str) -> AppError {
    AppError::malformed_request(format!("{INVALID_REQUEST_DATA}: missing field `{name}`"))
}

impl From<CreatedRestaurantPizza> for CreatedRestaurantPizzaResponse {
    fn from(created: CreatedRestaurantPizza) -> Self {
        let CreatedRestaurantPizza {
            association,
            pizza,
            restaurant,
        } = created;
        Self {
            id: association.id,
            price: association.price,
            pizza_id: association.pizza_id,
            restaurant_id: association.restaurant_id,
            pizza: pizza.into(),
            restaurant: restaurant.into(),
        }
    }
}
