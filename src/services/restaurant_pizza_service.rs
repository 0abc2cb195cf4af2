use serde_json::Value;

use crate::{
    db::dao::{NewRestaurantPizza, PizzaDao, RestaurantDao, RestaurantPizzaDao},
    db::entities::{pizza, restaurant, restaurant_pizza},
    error::AppError,
};

pub const REFERENCE_NOT_FOUND: &str = "Pizza or Restaurant not found";
pub const PRICE_OUT_OF_RANGE: &str = "Price must be between 1 and 30";

/// Price of a pizza at a restaurant, in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Price(i32);

impl Price {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 30;

    /// Accepts JSON integers in `MIN..=MAX` only. Floats (even `15.0`),
    /// strings and other kinds are rejected rather than coerced.
    pub fn parse(value: &Value) -> Result<Self, AppError> {
        value
            .as_i64()
            .and_then(|raw| i32::try_from(raw).ok())
            .filter(|raw| (Self::MIN..=Self::MAX).contains(raw))
            .map(Self)
            .ok_or_else(|| AppError::invalid_domain_value(PRICE_OUT_OF_RANGE))
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

/// A creation request with every field present and integer ids.
///
/// `price` stays unchecked until both referenced rows are known to exist, so a
/// request naming a missing pizza is reported as not found even when its price
/// is also wrong.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantPizzaDraft {
    pub price: Value,
    pub pizza_id: i32,
    pub restaurant_id: i32,
}

/// The stored association plus the rows it references, as read before the insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedRestaurantPizza {
    pub association: restaurant_pizza::Model,
    pub pizza: pizza::Model,
    pub restaurant: restaurant::Model,
}

#[derive(Clone)]
pub struct RestaurantPizzaService {
    restaurant_pizza_dao: RestaurantPizzaDao,
    pizza_dao: PizzaDao,
    restaurant_dao: RestaurantDao,
}

impl RestaurantPizzaService {
    pub fn new(
        restaurant_pizza_dao: RestaurantPizzaDao,
        pizza_dao: PizzaDao,
        restaurant_dao: RestaurantDao,
    ) -> Self {
        Self {
            restaurant_pizza_dao,
            pizza_dao,
            restaurant_dao,
        }
    }

    pub async fn create(
        &self,
        draft: RestaurantPizzaDraft,
    ) -> Result<CreatedRestaurantPizza, AppError> {
        let pizza = self.pizza_dao.find_pizza(draft.pizza_id).await?;
        let restaurant = self.restaurant_dao.find_restaurant(draft.restaurant_id).await?;
        let (Some(pizza), Some(restaurant)) = (pizza, restaurant) else {
            return Err(AppError::not_found(REFERENCE_NOT_FOUND));
        };

        let price = Price::parse(&draft.price)?;

        let association = self
            .restaurant_pizza_dao
            .create_association(NewRestaurantPizza {
                price: price.get(),
                pizza_id: pizza.id,
                restaurant_id: restaurant.id,
            })
            .await?;

        Ok(CreatedRestaurantPizza {
            association,
            pizza,
            restaurant,
        })
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
    use serde_json::{Value, json};

    use super::{PRICE_OUT_OF_RANGE, Price, REFERENCE_NOT_FOUND, RestaurantPizzaDraft};
    use crate::db::dao::transaction::assert_rolled_back;
    use crate::db::entities::{pizza, restaurant, restaurant_pizza};
    use crate::error::AppError;
    use crate::services::ServiceContext;

    fn pizza_model() -> pizza::Model {
        pizza::Model {
            id: 1,
            name: "Emma".to_string(),
            ingredients: "Dough, Tomato Sauce, Cheese".to_string(),
        }
    }

    fn restaurant_model() -> restaurant::Model {
        restaurant::Model {
            id: 2,
            name: "Sanjay's Pizza".to_string(),
            address: "address2".to_string(),
        }
    }

    fn draft(price: Value) -> RestaurantPizzaDraft {
        RestaurantPizzaDraft {
            price,
            pizza_id: 1,
            restaurant_id: 2,
        }
    }

    #[test]
    fn price_accepts_inclusive_bounds() {
        assert_eq!(Price::parse(&json!(1)).map(Price::get).ok(), Some(1));
        assert_eq!(Price::parse(&json!(30)).map(Price::get).ok(), Some(30));
    }

    #[test]
    fn price_rejects_out_of_range_and_wrong_kinds() {
        for value in [
            json!(0),
            json!(31),
            json!(-5),
            json!(15.5),
            json!(15.0),
            json!("15"),
            json!(true),
            json!([15]),
            json!(u64::MAX),
        ] {
            let err = Price::parse(&value).expect_err("price should be rejected");
            assert!(
                matches!(err, AppError::InvalidDomainValue(ref message) if message == PRICE_OUT_OF_RANGE),
                "unexpected result for {value}"
            );
        }
    }

    #[tokio::test]
    async fn create_returns_association_with_snapshots() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[pizza_model()]])
            .append_query_results([[restaurant_model()]])
            .append_query_results([[restaurant_pizza::Model {
                id: 11,
                price: 15,
                pizza_id: 1,
                restaurant_id: 2,
            }]])
            .into_connection();
        let service = ServiceContext::new(&db).restaurant_pizza();

        let created = service
            .create(draft(json!(15)))
            .await
            .expect("creation should succeed");
        assert_eq!(created.association.id, 11);
        assert_eq!(created.pizza, pizza_model());
        assert_eq!(created.restaurant, restaurant_model());
    }

    #[tokio::test]
    async fn missing_reference_wins_over_invalid_price() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<pizza::Model>::new()])
            .append_query_results([[restaurant_model()]])
            .into_connection();
        let service = ServiceContext::new(&db).restaurant_pizza();

        let err = service
            .create(draft(json!(99)))
            .await
            .expect_err("missing pizza should fail");
        assert!(matches!(err, AppError::NotFound(ref message) if message == REFERENCE_NOT_FOUND));
    }

    #[tokio::test]
    async fn invalid_price_never_reaches_the_insert() {
        // no result queued for an insert: reaching it would surface as an internal error
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[pizza_model()]])
            .append_query_results([[restaurant_model()]])
            .into_connection();
        let service = ServiceContext::new(&db).restaurant_pizza();

        let err = service
            .create(draft(json!(31)))
            .await
            .expect_err("price should be rejected");
        assert!(matches!(err, AppError::InvalidDomainValue(_)));
    }

    #[tokio::test]
    async fn insert_failure_is_internal() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[pizza_model()]])
            .append_query_results([[restaurant_model()]])
            .append_query_errors([DbErr::Custom("constraint violated".to_string())])
            .into_connection();
        let service = ServiceContext::new(&db).restaurant_pizza();

        let err = service
            .create(draft(json!(15)))
            .await
            .expect_err("insert should fail");
        assert!(err.is_internal());
        assert_rolled_back(db);
    }
}
