use sea_orm::{
    DatabaseConnection, EntityTrait, FromQueryResult, PaginatorTrait, PrimaryKeyTrait, QueryOrder,
};

use super::base_traits::HasIdColumn;
use super::error::{DaoLayerError, DaoResult};

/// Read access shared by every table keyed by an integer id.
#[async_trait::async_trait]
pub trait DaoBase: Clone + Send + Sync + Sized
where
    <Self::Entity as EntityTrait>::Model: FromQueryResult + Send + Sync,
    <<Self::Entity as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType:
        From<i32> + Send + Sync,
    Self::Entity: HasIdColumn,
{
    type Entity: EntityTrait + Send + Sync;
    /// Name used in `NotFound` errors.
    const ENTITY_NAME: &'static str;

    fn new(db: &DatabaseConnection) -> Self;

    fn db(&self) -> &DatabaseConnection;

    async fn find_optional(
        &self,
        id: i32,
    ) -> DaoResult<Option<<Self::Entity as EntityTrait>::Model>> {
        Self::Entity::find_by_id(id)
            .one(self.db())
            .await
            .map_err(DaoLayerError::Db)
    }

    async fn find_all(&self) -> DaoResult<Vec<<Self::Entity as EntityTrait>::Model>> {
        Self::Entity::find()
            .order_by_asc(Self::Entity::id_column())
            .all(self.db())
            .await
            .map_err(DaoLayerError::Db)
    }

    async fn count(&self) -> DaoResult<u64> {
        Self::Entity::find()
            .count(self.db())
            .await
            .map_err(DaoLayerError::Db)
    }
}
