use sea_orm::DatabaseConnection;

use crate::{
    db::dao::DaoContext,
    services::{
        pizza_service::PizzaService, restaurant_pizza_service::RestaurantPizzaService,
        restaurant_service::RestaurantService,
    },
    state::AppState,
};

#[derive(Clone)]
pub struct ServiceContext {
    daos: DaoContext,
}

impl ServiceContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self {
            daos: DaoContext::new(db),
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(&state.db)
    }

    pub fn restaurant(&self) -> RestaurantService {
        RestaurantService::new(self.daos.restaurant(), self.daos.restaurant_pizza())
    }

    pub fn pizza(&self) -> PizzaService {
        PizzaService::new(self.daos.pizza())
    }

    pub fn restaurant_pizza(&self) -> RestaurantPizzaService {
        RestaurantPizzaService::new(
            self.daos.restaurant_pizza(),
            self.daos.pizza(),
            self.daos.restaurant(),
        )
    }
}
