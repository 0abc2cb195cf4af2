use crate::{
    db::dao::{DaoLayerError, RestaurantDao, RestaurantPizzaDao},
    db::entities::{restaurant, restaurant_pizza},
    error::AppError,
};

pub const RESTAURANT_NOT_FOUND: &str = "Restaurant not found";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantWithPizzas {
    pub restaurant: restaurant::Model,
    /// Ordered by association id.
    pub restaurant_pizzas: Vec<restaurant_pizza::Model>,
}

#[derive(Clone)]
pub struct RestaurantService {
    restaurant_dao: RestaurantDao,
    restaurant_pizza_dao: RestaurantPizzaDao,
}

impl RestaurantService {
    pub fn new(restaurant_dao: RestaurantDao, restaurant_pizza_dao: RestaurantPizzaDao) -> Self {
        Self {
            restaurant_dao,
            restaurant_pizza_dao,
        }
    }

    pub async fn list_restaurants(&self) -> Result<Vec<restaurant::Model>, AppError> {
        Ok(self.restaurant_dao.list_restaurants().await?)
    }

    pub async fn require_restaurant(&self, id: i32) -> Result<restaurant::Model, AppError> {
        self.restaurant_dao
            .find_restaurant(id)
            .await?
            .ok_or_else(|| AppError::not_found(RESTAURANT_NOT_FOUND))
    }

    pub async fn get_with_pizzas(&self, id: i32) -> Result<RestaurantWithPizzas, AppError> {
        let restaurant = self.require_restaurant(id).await?;
        let restaurant_pizzas = self.restaurant_pizza_dao.list_by_restaurant(id).await?;
        Ok(RestaurantWithPizzas {
            restaurant,
            restaurant_pizzas,
        })
    }

    /// Removes the restaurant together with every association pointing at it.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.require_restaurant(id).await?;
        match self.restaurant_dao.delete_with_pizzas(id).await {
            Ok(removed) => {
                tracing::debug!(restaurant_id = id, removed, "restaurant deleted");
                Ok(())
            }
            // lost a race with another delete
            Err(DaoLayerError::NotFound { .. }) => Err(AppError::not_found(RESTAURANT_NOT_FOUND)),
            Err(err) => Err(err.into()),
        }
    }
}
