use sea_orm::entity::prelude::*;

use crate::db::dao::HasIdColumn;

/// "This pizza is offered by this restaurant at this price."
///
/// The foreign keys carry no `ON DELETE` action: removing a restaurant must go
/// through `RestaurantDao::delete_with_pizzas`, which clears these rows first.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "restaurant_pizzas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub price: i32,
    #[sea_orm(indexed)]
    pub pizza_id: i32,
    #[sea_orm(indexed)]
    pub restaurant_id: i32,
    #[sea_orm(belongs_to, from = "pizza_id", to = "id")]
    pub pizza: HasOne<super::pizza::Entity>,
    #[sea_orm(belongs_to, from = "restaurant_id", to = "id")]
    pub restaurant: HasOne<super::restaurant::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}

impl HasIdColumn for Entity {
    fn id_column() -> Self::Column {
        Column::Id
    }
}
