//! SeaORM mapping for Publisher

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DatabaseTransaction, DbErr, ModelTrait, Set,
};

use super::{EntityMapping, SeaOrmRepository};
use crate::domain::Publisher;
use crate::models::book::Entity as BookEntity;
use crate::models::publisher::{ActiveModel, Entity as PublisherEntity, Model};

pub type SeaOrmPublisherRepository = SeaOrmRepository<Publisher>;

impl Publisher {
    fn to_active_model(&self) -> ActiveModel {
        ActiveModel {
            name: Set(self.name.clone()),
            address_line1: Set(self.address_line1.clone()),
            city: Set(self.city.clone()),
            state: Set(self.state.clone()),
            zip: Set(self.zip.clone()),
            ..Default::default()
        }
    }
}

#[async_trait]
impl EntityMapping for Publisher {
    type Entity = PublisherEntity;

    const NAME: &'static str = "publisher";

    /// `books` is derived from `books.publisher_id`
    async fn hydrate(db: &DatabaseConnection, row: Model) -> Result<Self, DbErr> {
        let books = row.find_related(BookEntity).all(db).await?;

        let mut publisher = Publisher::default().with_id(row.id);
        publisher.name = row.name;
        publisher.address_line1 = row.address_line1;
        publisher.city = row.city;
        publisher.state = row.state;
        publisher.zip = row.zip;
        publisher.books = books.into_iter().map(|b| b.id).collect();
        Ok(publisher)
    }

    async fn insert_row(&self, txn: &DatabaseTransaction) -> Result<i64, DbErr> {
        Ok(self.to_active_model().insert(txn).await?.id)
    }

    async fn update_row(&self, txn: &DatabaseTransaction, id: i64) -> Result<(), DbErr> {
        let mut row = self.to_active_model();
        row.id = Set(id);
        row.update(txn).await?;

        Ok(())
    }

    fn with_assigned_id(self, id: i64) -> Self {
        self.with_id(id)
    }
}
