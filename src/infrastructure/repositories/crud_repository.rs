//! Generic SeaORM implementation of CrudRepository
//!
//! Every entity type shares the same upsert/find/count/delete logic. The
//! per-type parts (row conversion and association rows) come from
//! `EntityMapping`.

use async_trait::async_trait;
use sea_orm::{
    DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, PaginatorTrait, PrimaryKeyTrait,
    TransactionTrait,
};
use std::marker::PhantomData;

use crate::domain::{CrudRepository, DomainError, Identifiable};

type Row<T> = <<T as EntityMapping>::Entity as EntityTrait>::Model;

/// Storage mapping for one entity type
#[async_trait]
pub trait EntityMapping: Identifiable + Send + Sync + Sized + 'static {
    type Entity: EntityTrait;

    /// Human-readable name used in logs
    const NAME: &'static str;

    /// Build the entity from its row, resolving associations from the store
    async fn hydrate(db: &DatabaseConnection, row: Row<Self>) -> Result<Self, DbErr>;

    /// Insert a new row plus any association rows this side owns.
    /// Returns the generated identifier.
    async fn insert_row(&self, txn: &DatabaseTransaction) -> Result<i64, DbErr>;

    /// Overwrite the row with `id` plus any association rows this side owns
    async fn update_row(&self, txn: &DatabaseTransaction, id: i64) -> Result<(), DbErr>;

    fn with_assigned_id(self, id: i64) -> Self;
}

/// SeaORM-based implementation of CrudRepository, one instance per entity type
pub struct SeaOrmRepository<T> {
    db: DatabaseConnection,
    _entity: PhantomData<fn() -> T>,
}

impl<T> SeaOrmRepository<T> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<T> CrudRepository<T> for SeaOrmRepository<T>
where
    T: EntityMapping,
    Row<T>: Sync,
    <<T::Entity as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i64>,
{
    async fn save(&self, entity: T) -> Result<T, DomainError> {
        let txn = self.db.begin().await?;

        let id = match entity.id() {
            None => entity.insert_row(&txn).await?,
            Some(id) => {
                if T::Entity::find_by_id(id).one(&txn).await?.is_none() {
                    return Err(DomainError::NotFound);
                }
                entity.update_row(&txn, id).await?;
                id
            }
        };

        txn.commit().await?;
        tracing::debug!(entity = T::NAME, id, "saved");

        Ok(entity.with_assigned_id(id))
    }

    async fn find_all(&self) -> Result<Vec<T>, DomainError> {
        let rows = T::Entity::find().all(&self.db).await?;

        let mut entities = Vec::with_capacity(rows.len());
        for row in rows {
            entities.push(T::hydrate(&self.db, row).await?);
        }

        Ok(entities)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<T>, DomainError> {
        match T::Entity::find_by_id(id).one(&self.db).await? {
            Some(row) => Ok(Some(T::hydrate(&self.db, row).await?)),
            None => Ok(None),
        }
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(T::Entity::find().count(&self.db).await?)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DomainError> {
        let result = T::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        tracing::debug!(entity = T::NAME, id, "deleted");
        Ok(())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, DomainError> {
        Ok(T::Entity::find_by_id(id).one(&self.db).await?.is_some())
    }
}
