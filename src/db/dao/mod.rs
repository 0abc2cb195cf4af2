pub mod base;
pub mod base_traits;
mod context;
pub mod error;
pub mod pizza_dao;
pub mod restaurant_dao;
pub mod restaurant_pizza_dao;
pub(crate) mod transaction;

pub use base::DaoBase;
pub use base_traits::HasIdColumn;
pub use context::DaoContext;
pub use error::{DaoLayerError, DaoResult};
pub use pizza_dao::PizzaDao;
pub use restaurant_dao::RestaurantDao;
pub use restaurant_pizza_dao::{NewRestaurantPizza, RestaurantPizzaDao};
