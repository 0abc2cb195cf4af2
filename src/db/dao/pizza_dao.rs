use sea_orm::DatabaseConnection;

use super::{DaoBase, DaoResult};
use crate::db::entities::{pizza, prelude::Pizza};

#[derive(Clone)]
pub struct PizzaDao {
    db: DatabaseConnection,
}

impl DaoBase for PizzaDao {
    type Entity = Pizza;
    const ENTITY_NAME: &'static str = "pizza";

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl PizzaDao {
    pub async fn list_pizzas(&self) -> DaoResult<Vec<pizza::Model>> {
        self.find_all().await
    }

    pub async fn find_pizza(&self, id: i32) -> DaoResult<Option<pizza::Model>> {
        self.find_optional(id).await
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    use super::PizzaDao;
    use crate::db::dao::{DaoBase, DaoLayerError};
    use crate::db::entities::pizza;

    fn pizza_model(id: i32, name: &str) -> pizza::Model {
        pizza::Model {
            id,
            name: name.to_string(),
            ingredients: "Dough, Tomato Sauce, Cheese".to_string(),
        }
    }

    #[tokio::test]
    async fn list_pizzas_returns_rows_in_query_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[pizza_model(1, "Emma"), pizza_model(2, "Geri")]])
            .into_connection();
        let dao = PizzaDao::new(&db);

        let pizzas = dao.list_pizzas().await.expect("query should succeed");
        let names: Vec<_> = pizzas.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Emma", "Geri"]);
    }

    #[tokio::test]
    async fn find_pizza_maps_database_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("select failed".to_string())])
            .into_connection();
        let dao = PizzaDao::new(&db);

        let err = dao.find_pizza(1).await.expect_err("query should fail");
        assert!(matches!(err, DaoLayerError::Db(_)));
    }
}
