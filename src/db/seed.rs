use sea_orm::{DatabaseConnection, EntityTrait, Set, TransactionTrait};

use super::dao::{DaoBase, DaoContext, DaoLayerError, DaoResult, transaction};
use super::entities::{pizza, prelude::*, restaurant};

const RESTAURANTS: &[(&str, &str)] = &[
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

const PIZZAS: &[(&str, &str)] = &[
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

/// Inserts the sample restaurants and pizzas when both tables are empty.
///
/// Returns `true` when rows were written.
pub async fn seed_if_empty(db: &DatabaseConnection) -> DaoResult<bool> {
    let daos = DaoContext::new(db);
    if daos.restaurant().count().await? > 0 || daos.pizza().count().await? > 0 {
        tracing::debug!("tables already populated, skipping seed");
        return Ok(false);
    }

    let restaurants = RESTAURANTS.iter().map(|(name, address)| restaurant::ActiveModel {
        name: Set((*name).to_string()),
        address: Set((*address).to_string()),
        ..Default::default()
    });
    let pizzas = PIZZAS.iter().map(|(name, ingredients)| pizza::ActiveModel {
        name: Set((*name).to_string()),
        ingredients: Set((*ingredients).to_string()),
        ..Default::default()
    });

    let txn = db.begin().await.map_err(DaoLayerError::Db)?;
    let result: DaoResult<()> = async {
        Restaurant::insert_many(restaurants).exec(&txn).await?;
        Pizza::insert_many(pizzas).exec(&txn).await?;
        Ok(())
    }
    .await;
    transaction::finish(txn, result).await?;

    tracing::info!(
        restaurants = RESTAURANTS.len(),
        pizzas = PIZZAS.len(),
        "seeded sample data"
    );
    Ok(true)
}
