use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};
use std::time::Duration;

// An in-memory sqlite database lives and dies with its connection
const MEMORY_CONNECTION_LIFETIME: Duration = Duration::from_secs(u32::MAX as u64);

pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url.to_owned());
    if database_url.contains(":memory:") || database_url.contains("mode=memory") {
        options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(MEMORY_CONNECTION_LIFETIME)
            .max_lifetime(MEMORY_CONNECTION_LIFETIME);
    }

    let db = Database::connect(options).await?;

    run_migrations(&db).await?;

    Ok(db)
}

async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    let statements = [
        "PRAGMA foreign_keys = ON",
        r#"
        CREATE TABLE IF NOT EXISTS publishers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            address_line1 TEXT,
            city TEXT,
            state TEXT,
            zip TEXT
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS authors (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name TEXT,
            last_name TEXT
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS books (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT,
            isbn TEXT,
            publisher_id INTEGER,
            FOREIGN KEY (publisher_id) REFERENCES publishers(id)
        )
        "#,
        // Join table for the author/book association, owned by books
        r#"
        CREATE TABLE IF NOT EXISTS author_book (
            author_id INTEGER NOT NULL,
            book_id INTEGER NOT NULL,
            PRIMARY KEY (author_id, book_id),
            FOREIGN KEY (author_id) REFERENCES authors(id) ON DELETE CASCADE,
            FOREIGN KEY (book_id) REFERENCES books(id) ON DELETE CASCADE
        )
        "#,
    ];

    for sql in statements {
        db.execute(Statement::from_string(
            db.get_database_backend(),
            sql.to_owned(),
        ))
        .await?;
    }

    tracing::debug!("Schema ready");
    Ok(())
}
