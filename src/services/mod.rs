pub mod context;
pub mod pizza_service;
pub mod restaurant_pizza_service;
pub mod restaurant_service;

pub use context::ServiceContext;
