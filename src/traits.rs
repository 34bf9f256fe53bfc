use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    entity::prelude::*,
};

/// Data access for a resource stored in one table with an integer key.
///
/// Every operation issues exactly one statement. Operations addressing a row
/// by id report a missing row as `None`, never as an error.
#[async_trait]
pub trait CRUDResource: Sized + Send + Sync
where
    Self::EntityType: EntityTrait + Sync,
    Self::ActiveModelType: ActiveModelTrait + ActiveModelBehavior + Send + Sync,
    <Self::EntityType as EntityTrait>::Model: Sync + IntoActiveModel<Self::ActiveModelType>,
    <<Self::EntityType as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i64>,
    Self: From<<Self::EntityType as EntityTrait>::Model>,
{
    type EntityType: EntityTrait + Sync;
    type ColumnType: ColumnTrait + std::fmt::Debug;
    type ActiveModelType: ActiveModelTrait<Entity = Self::EntityType>;

    const ID_COLUMN: Self::ColumnType;
    const RESOURCE_NAME_SINGULAR: &'static str;

    /// The writable columns of `self`. Storage-assigned columns stay unset.
    fn to_active_model(&self) -> Self::ActiveModelType;

    #[must_use]
    fn with_id(self, id: i64) -> Self;

    async fn get_all(db: &DatabaseConnection) -> Result<Vec<Self>, DbErr> {
        let models = Self::EntityType::find()
            .order_by(Self::ID_COLUMN, Order::Asc)
            .all(db)
            .await?;
        Ok(models.into_iter().map(Self::from).collect())
    }

    async fn get_page(
        db: &DatabaseConnection,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Self>, DbErr> {
        let models = Self::EntityType::find()
            .order_by(Self::ID_COLUMN, Order::Asc)
            .offset(offset)
            .limit(limit)
            .all(db)
            .await?;
        Ok(models.into_iter().map(Self::from).collect())
    }

    async fn get_one(db: &DatabaseConnection, id: i64) -> Result<Option<Self>, DbErr> {
        let model = Self::EntityType::find_by_id(id).one(db).await?;
        Ok(model.map(Self::from))
    }

    /// Inserts `item` and hands it back as submitted; the generated id is
    /// not read back.
    async fn create(db: &DatabaseConnection, item: Self) -> Result<Self, DbErr> {
        Self::EntityType::insert(item.to_active_model())
            .exec_without_returning(db)
            .await?;
        Ok(item)
    }

    async fn update(db: &DatabaseConnection, id: i64, item: Self) -> Result<Option<Self>, DbErr> {
        let result = Self::EntityType::update_many()
            .set(item.to_active_model())
            .filter(Self::ID_COLUMN.eq(id))
            .exec(db)
            .await?;
        Ok((result.rows_affected == 1).then(|| item.with_id(id)))
    }

    async fn delete(db: &DatabaseConnection, id: i64) -> Result<Option<i64>, DbErr> {
        let result = Self::EntityType::delete_by_id(id).exec(db).await?;
        Ok((result.rows_affected == 1).then_some(id))
    }

    async fn total_count(db: &DatabaseConnection) -> Result<u64, DbErr> {
        let query = Self::EntityType::find();
        PaginatorTrait::count(query, db).await
    }
}
