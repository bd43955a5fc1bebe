//! Sample data inserted at startup
//!
//! Not idempotent: every run inserts fresh rows.

use crate::domain::{Author, Book, DomainError, Identifiable, Publisher};
use crate::infrastructure::AppState;

/// What the seeding run stored, with identifiers assigned
#[derive(Debug, Clone)]
pub struct SeedReport {
    pub authors: Vec<Author>,
    pub books: Vec<Book>,
    pub publisher: Publisher,
}

fn persisted_id(entity: &impl Identifiable) -> Result<i64, DomainError> {
    entity
        .id()
        .ok_or_else(|| DomainError::Database("save returned no identifier".to_string()))
}

pub async fn seed_sample_data(state: &AppState) -> Result<SeedReport, DomainError> {
    // 1. Author/Book pairs
    let pairs = vec![
        (
            Author::new("Eric", "Evans"),
            Book::new("Domain Driven Design", "123123"),
        ),
        (
            Author::new("Rod", "Johnson"),
            Book::new("J2EE Development without EJB", "22334455"),
        ),
    ];

    // 2. Publisher of both books
    let publisher = Publisher::new(
        "Write Way Printing",
        "123 One Way",
        "Los Angeles",
        "CA",
        "98765",
    );

    // 3. The publisher row has to exist before any book references it
    let mut publisher = state.publisher_repo.save(publisher).await?;
    let publisher_id = persisted_id(&publisher)?;

    let mut authors = Vec::with_capacity(pairs.len());
    let mut books = Vec::with_capacity(pairs.len());

    for (author, mut book) in pairs {
        // 4. Publisher reference
        book.publisher = Some(publisher_id);

        // 5. Author, then the book that owns the author link
        let mut author = state.author_repo.save(author).await?;
        book.authors.insert(persisted_id(&author)?);

        let book = state.book_repo.save(book).await?;
        let book_id = persisted_id(&book)?;
        author.books.insert(book_id);
        publisher.books.insert(book_id);

        authors.push(author);
        books.push(book);
    }

    // Publisher::books is read back from books.publisher_id, so the
    // publisher needs no second save here.

    tracing::info!("Started in bootstrap seeding");
    tracing::info!("Number of Books: {}", state.book_repo.count().await?);
    tracing::info!(
        "Number of Publishers: {}",
        state.publisher_repo.count().await?
    );
    tracing::info!("Publisher number of books: {}", publisher.books.len());

    Ok(SeedReport {
        authors,
        books,
        publisher,
    })
}
