//! SeaORM row models, one per table

pub mod author;
pub mod author_book;
pub mod book;
pub mod publisher;
