use bookshelf_web::db;
use bookshelf_web::domain::Identifiable;
use bookshelf_web::infrastructure::AppState;
use bookshelf_web::seed;
use std::collections::HashSet;

async fn setup_test_state() -> AppState {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    AppState::new(db)
}

#[tokio::test]
async fn test_seed_counts() {
    let state = setup_test_state().await;

    seed::seed_sample_data(&state)
        .await
        .expect("Failed to seed");

    assert_eq!(state.book_repo.count().await.unwrap(), 2);
    assert_eq!(state.publisher_repo.count().await.unwrap(), 1);
    assert_eq!(state.author_repo.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_seeded_publisher_has_both_books() {
    let state = setup_test_state().await;

    let report = seed::seed_sample_data(&state)
        .await
        .expect("Failed to seed");

    let book_ids: HashSet<i64> = report.books.iter().filter_map(|b| b.id()).collect();
    assert_eq!(book_ids.len(), 2);
    assert_eq!(report.publisher.books, book_ids);

    let publisher_id = report.publisher.id().expect("publisher persisted");
    let stored = state
        .publisher_repo
        .find_by_id(publisher_id)
        .await
        .unwrap()
        .expect("publisher exists");
    assert_eq!(stored.books.len(), 2);
    assert_eq!(stored.books, book_ids);
    assert_eq!(stored.name.as_deref(), Some("Write Way Printing"));
}

#[tokio::test]
async fn test_seeded_pairs_are_linked_both_ways() {
    let state = setup_test_state().await;

    let report = seed::seed_sample_data(&state)
        .await
        .expect("Failed to seed");

    for (author, book) in report.authors.iter().zip(report.books.iter()) {
        let author_id = author.id().unwrap();
        let book_id = book.id().unwrap();

        assert_eq!(author.books, HashSet::from([book_id]));
        assert_eq!(book.authors, HashSet::from([author_id]));

        let stored_author = state.author_repo.find_by_id(author_id).await.unwrap().unwrap();
        assert_eq!(stored_author.books, HashSet::from([book_id]));

        let stored_book = state.book_repo.find_by_id(book_id).await.unwrap().unwrap();
        assert_eq!(stored_book.authors, HashSet::from([author_id]));
        assert_eq!(stored_book.publisher, report.publisher.id());
    }

    let titles: HashSet<String> = state
        .book_repo
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .filter_map(|b| b.title)
        .collect();
    assert!(titles.contains("Domain Driven Design"));
    assert!(titles.contains("J2EE Development without EJB"));
}

#[tokio::test]
async fn test_seeding_twice_duplicates_rows() {
    let state = setup_test_state().await;

    seed::seed_sample_data(&state).await.unwrap();
    seed::seed_sample_data(&state).await.unwrap();

    assert_eq!(state.book_repo.count().await.unwrap(), 4);
    assert_eq!(state.publisher_repo.count().await.unwrap(), 2);
    assert_eq!(state.author_repo.count().await.unwrap(), 4);
}
