use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, TransactionTrait};

use super::{DaoBase, DaoLayerError, DaoResult, RestaurantPizzaDao, transaction};
use crate::db::entities::{prelude::Restaurant, restaurant};

#[derive(Clone)]
pub struct RestaurantDao {
    db: DatabaseConnection,
}

impl DaoBase for RestaurantDao {
    type Entity = Restaurant;
    const ENTITY_NAME: &'static str = "restaurant";

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl RestaurantDao {
    pub async fn list_restaurants(&self) -> DaoResult<Vec<restaurant::Model>> {
        self.find_all().await
    }

    pub async fn find_restaurant(&self, id: i32) -> DaoResult<Option<restaurant::Model>> {
        self.find_optional(id).await
    }

    /// Deletes the restaurant and all of its associations as one unit.
    ///
    /// Returns how many associations were removed. If the restaurant row is
    /// already gone the whole transaction is rolled back with `NotFound`.
    pub async fn delete_with_pizzas(&self, id: i32) -> DaoResult<u64> {
        let txn = self.db.begin().await.map_err(DaoLayerError::Db)?;
        let result = Self::delete_with_pizzas_in(&txn, id).await;
        transaction::finish(txn, result).await
    }

    async fn delete_with_pizzas_in<C>(conn: &C, id: i32) -> DaoResult<u64>
    where
        C: ConnectionTrait,
    {
        let removed = RestaurantPizzaDao::delete_by_restaurant_in(conn, id).await?;
        let result = Restaurant::delete_by_id(id)
            .exec(conn)
            .await
            .map_err(DaoLayerError::Db)?;

        if result.rows_affected == 0 {
            return Err(DaoLayerError::NotFound {
                entity: Self::ENTITY_NAME,
                id,
            });
        }

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    use super::RestaurantDao;
    use crate::db::dao::transaction::{assert_rolled_back, executed_sql};
    use crate::db::dao::{DaoBase, DaoLayerError};
    use crate::db::entities::restaurant;

    fn exec(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    #[tokio::test]
    async fn find_restaurant_returns_none_when_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<restaurant::Model>::new()])
            .into_connection();
        let dao = RestaurantDao::new(&db);

        let result = dao
            .find_restaurant(999)
            .await
            .expect("query should succeed");
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn delete_with_pizzas_reports_removed_associations() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(3), exec(1)])
            .into_connection();
        let dao = RestaurantDao::new(&db);

        let removed = dao
            .delete_with_pizzas(1)
            .await
            .expect("delete should succeed");
        assert_eq!(removed, 3);
        assert_eq!(executed_sql(db).last().map(String::as_str), Some("COMMIT"));
    }

    #[tokio::test]
    async fn delete_with_pizzas_fails_when_parent_already_gone() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(2), exec(0)])
            .into_connection();
        let dao = RestaurantDao::new(&db);

        let err = dao
            .delete_with_pizzas(5)
            .await
            .expect_err("missing parent should abort the delete");
        assert!(matches!(
            err,
            DaoLayerError::NotFound { entity: "restaurant", id: 5 }
        ));
        assert_rolled_back(db);
    }

    #[tokio::test]
    async fn delete_with_pizzas_propagates_parent_delete_failure() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(2)])
            .append_exec_errors([DbErr::Custom("delete failed".to_string())])
            .into_connection();
        let dao = RestaurantDao::new(&db);

        let err = dao
            .delete_with_pizzas(1)
            .await
            .expect_err("delete should fail");
        assert!(matches!(err, DaoLayerError::Db(_)));
        assert_rolled_back(db);
    }
}
