//! SeaORM mapping for Author

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DatabaseTransaction, DbErr, ModelTrait, Set,
};

use super::{EntityMapping, SeaOrmRepository};
use crate::domain::Author;
use crate::models::author::{ActiveModel, Entity as AuthorEntity, Model};
use crate::models::book::Entity as BookEntity;

pub type SeaOrmAuthorRepository = SeaOrmRepository<Author>;

#[async_trait]
impl EntityMapping for Author {
    type Entity = AuthorEntity;

    const NAME: &'static str = "author";

    async fn hydrate(db: &DatabaseConnection, row: Model) -> Result<Self, DbErr> {
        let books = row.find_related(BookEntity).all(db).await?;

        let mut author = Author::default().with_id(row.id);
        author.first_name = row.first_name;
        author.last_name = row.last_name;
        author.books = books.into_iter().map(|b| b.id).collect();
        Ok(author)
    }

    async fn insert_row(&self, txn: &DatabaseTransaction) -> Result<i64, DbErr> {
        let row = ActiveModel {
            first_name: Set(self.first_name.clone()),
            last_name: Set(self.last_name.clone()),
            ..Default::default()
        };

        Ok(row.insert(txn).await?.id)
    }

    // `books` is the inverse side; author_book rows are written by Book saves
    async fn update_row(&self, txn: &DatabaseTransaction, id: i64) -> Result<(), DbErr> {
        ActiveModel {
            id: Set(id),
            first_name: Set(self.first_name.clone()),
            last_name: Set(self.last_name.clone()),
        }
        .update(txn)
        .await?;

        Ok(())
    }

    fn with_assigned_id(self, id: i64) -> Self {
        self.with_id(id)
    }
}
