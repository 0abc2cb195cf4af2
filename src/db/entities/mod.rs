#[allow(unused_imports)]
pub mod prelude {
    pub use super::pizza::Entity as Pizza;
    pub use super::restaurant::Entity as Restaurant;
    pub use super::restaurant_pizza::Entity as RestaurantPizza;
}

pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;
