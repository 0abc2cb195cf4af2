use crate::{db::dao::PizzaDao, db::entities::pizza, error::AppError};

#[derive(Clone)]
pub struct PizzaService {
    pizza_dao: PizzaDao,
}

impl PizzaService {
    pub fn new(pizza_dao: PizzaDao) -> Self {
        Self { pizza_dao }
    }

    pub async fn list_pizzas(&self) -> Result<Vec<pizza::Model>, AppError> {
        Ok(self.pizza_dao.list_pizzas().await?)
    }
}
