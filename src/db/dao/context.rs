use sea_orm::DatabaseConnection;

use super::{DaoBase, PizzaDao, RestaurantDao, RestaurantPizzaDao};

#[derive(Clone)]
pub struct DaoContext {
    db: DatabaseConnection,
}

impl DaoContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub fn restaurant(&self) -> RestaurantDao {
        DaoBase::new(&self.db)
    }

    pub fn pizza(&self) -> PizzaDao {
        DaoBase::new(&self.db)
    }

    pub fn restaurant_pizza(&self) -> RestaurantPizzaDao {
        DaoBase::new(&self.db)
    }
}
