//! SeaORM mapping for Book
//!
//! Book owns both of its associations: the publisher reference is the
//! `publisher_id` column and the author set is stored in `author_book`.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    ModelTrait, QueryFilter, Set,
};
use std::collections::HashSet;

use super::{EntityMapping, SeaOrmRepository};
use crate::domain::Book;
use crate::models::author::Entity as AuthorEntity;
use crate::models::author_book;
use crate::models::book::{ActiveModel, Entity as BookEntity, Model};

pub type SeaOrmBookRepository = SeaOrmRepository<Book>;

impl Book {
    fn to_active_model(&self) -> ActiveModel {
        ActiveModel {
            title: Set(self.title.clone()),
            isbn: Set(self.isbn.clone()),
            publisher_id: Set(self.publisher),
            ..Default::default()
        }
    }
}

/// Replace the join rows of `book_id` with one row per author
async fn write_authors(
    txn: &DatabaseTransaction,
    book_id: i64,
    authors: &HashSet<i64>,
) -> Result<(), DbErr> {
    author_book::Entity::delete_many()
        .filter(author_book::Column::BookId.eq(book_id))
        .exec(txn)
        .await?;

    for &author_id in authors {
        author_book::ActiveModel {
            author_id: Set(author_id),
            book_id: Set(book_id),
        }
        .insert(txn)
        .await?;
    }

    Ok(())
}

#[async_trait]
impl EntityMapping for Book {
    type Entity = BookEntity;

    const NAME: &'static str = "book";

    async fn hydrate(db: &DatabaseConnection, row: Model) -> Result<Self, DbErr> {
        let authors = row.find_related(AuthorEntity).all(db).await?;

        let mut book = Book::default().with_id(row.id);
        book.title = row.title;
        book.isbn = row.isbn;
        book.publisher = row.publisher_id;
        book.authors = authors.into_iter().map(|a| a.id).collect();
        Ok(book)
    }

    async fn insert_row(&self, txn: &DatabaseTransaction) -> Result<i64, DbErr> {
        let id = self.to_active_model().insert(txn).await?.id;
        write_authors(txn, id, &self.authors).await?;

        Ok(id)
    }

    async fn update_row(&self, txn: &DatabaseTransaction, id: i64) -> Result<(), DbErr> {
        let mut row = self.to_active_model();
        row.id = Set(id);
        row.update(txn).await?;
        write_authors(txn, id, &self.authors).await?;

        Ok(())
    }

    fn with_assigned_id(self, id: i64) -> Self {
        self.with_id(id)
    }
}
