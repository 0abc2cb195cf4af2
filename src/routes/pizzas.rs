use std::sync::Arc;

use axum::{Router, extract::State, routing::get};
use serde::Serialize;

use crate::{
    db::entities::pizza,
    response::{ApiResponse, ApiResult},
    services::ServiceContext,
    state::AppState,
};

#[derive(Debug, Serialize)]
pub struct PizzaResponse {
    pub id: i32,
    pub name: String,
    pub ingredients: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/pizzas", get(list_pizzas))
        .with_state(state)
}

async fn list_pizzas(State(state): State<Arc<AppState>>) -> ApiResult<Vec<PizzaResponse>> {
    tracing::debug!("GET /pizzas route accessed");
    let pizzas = ServiceContext::from_state(&state).pizza().list_pizzas().await?;
    ApiResponse::ok(pizzas.into_iter().map(PizzaResponse::from).collect())
}

impl From<pizza::Model> for PizzaResponse {
    fn from(model: pizza::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            ingredients: model.ingredients,
        }
    }
}
