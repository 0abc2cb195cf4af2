use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use super::{DaoBase, DaoLayerError, DaoResult, transaction};
use crate::db::entities::{prelude::RestaurantPizza, restaurant_pizza};

/// Association values that already passed the referential and price checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewRestaurantPizza {
    pub price: i32,
    pub pizza_id: i32,
    pub restaurant_id: i32,
}

#[derive(Clone)]
pub struct RestaurantPizzaDao {
    db: DatabaseConnection,
}

impl DaoBase for RestaurantPizzaDao {
    type Entity = RestaurantPizza;
    const ENTITY_NAME: &'static str = "restaurant_pizza";

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl RestaurantPizzaDao {
    /// Inserts the association in its own transaction; any failure rolls it back.
    pub async fn create_association(
        &self,
        data: NewRestaurantPizza,
    ) -> DaoResult<restaurant_pizza::Model> {
        let model = restaurant_pizza::ActiveModel {
            price: Set(data.price),
            pizza_id: Set(data.pizza_id),
            restaurant_id: Set(data.restaurant_id),
            ..Default::default()
        };

        let txn = self.db.begin().await.map_err(DaoLayerError::Db)?;
        let result = model.insert(&txn).await.map_err(DaoLayerError::Db);
        transaction::finish(txn, result).await
    }

    pub async fn list_by_restaurant(
        &self,
        restaurant_id: i32,
    ) -> DaoResult<Vec<restaurant_pizza::Model>> {
        RestaurantPizza::find()
            .filter(restaurant_pizza::Column::RestaurantId.eq(restaurant_id))
            .order_by_asc(restaurant_pizza::Column::Id)
            .all(&self.db)
            .await
            .map_err(DaoLayerError::Db)
    }

    /// Removes every association of a restaurant on `conn`, usually an open transaction.
    pub(crate) async fn delete_by_restaurant_in<C>(conn: &C, restaurant_id: i32) -> DaoResult<u64>
    where
        C: ConnectionTrait,
    {
        let result = RestaurantPizza::delete_many()
            .filter(restaurant_pizza::Column::RestaurantId.eq(restaurant_id))
            .exec(conn)
            .await
            .map_err(DaoLayerError::Db)?;
        Ok(result.rows_affected)
    }
}
