//! Entity records: Author, Book and Publisher
//!
//! Associations are kept as sets of identifiers rather than object links.
//! The owning side of each association is the one written by a save:
//! `Book::authors` for the author/book pairs and `Book::publisher` for the
//! publisher reference. `Author::books` and `Publisher::books` are rebuilt
//! from the store on every read and ignored on write.
//!
//! Equality compares the identifier and every scalar field, never the
//! association sets. Mutating a scalar field of an entity that already sits
//! in a `HashSet` breaks lookup for that entry.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};

const HASH_MULTIPLIER: u64 = 17;

/// Anything the storage layer hands out an identifier for.
pub trait Identifiable {
    /// `None` until the entity has been persisted once
    fn id(&self) -> Option<i64>;
}

fn contribution<T: Hash + ?Sized>(field: Option<&T>) -> u64 {
    match field {
        Some(value) => {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }
        None => 0,
    }
}

fn fold(contributions: &[u64]) -> u64 {
    contributions
        .iter()
        .fold(1u64, |acc, c| acc.wrapping_mul(HASH_MULTIPLIER).wrapping_add(*c))
}

fn or_null(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("null")
}

fn or_null_id(value: Option<i64>) -> String {
    value.map_or_else(|| "null".to_string(), |id| id.to_string())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Author {
    id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Books written by this author (inverse side)
    #[serde(default)]
    pub books: HashSet<i64>,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: None,
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            books: HashSet::new(),
        }
    }

    pub(crate) fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn hash_code(&self) -> u64 {
        fold(&[
            contribution(self.id.as_ref()),
            contribution(self.first_name.as_deref()),
            contribution(self.last_name.as_deref()),
        ])
    }
}

impl Identifiable for Author {
    fn id(&self) -> Option<i64> {
        self.id
    }
}

impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
            || (self.id == other.id
                && self.first_name == other.first_name
                && self.last_name == other.last_name)
    }
}

impl Eq for Author {}

impl Hash for Author {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Author{{id={}, firstName={}, lastName={}}}",
            or_null_id(self.id),
            or_null(&self.first_name),
            or_null(&self.last_name)
        )
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Book {
    id: Option<i64>,
    pub title: Option<String>,
    pub isbn: Option<String>,
    /// Authors of this book (owning side, persisted to `author_book`)
    #[serde(default)]
    pub authors: HashSet<i64>,
    /// Publisher reference (owning side, persisted to `books.publisher_id`)
    pub publisher: Option<i64>,
}

impl Book {
    pub fn new(title: impl Into<String>, isbn: impl Into<String>) -> Self {
        Self {
            id: None,
            title: Some(title.into()),
            isbn: Some(isbn.into()),
            authors: HashSet::new(),
            publisher: None,
        }
    }

    pub(crate) fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn hash_code(&self) -> u64 {
        fold(&[
            contribution(self.id.as_ref()),
            contribution(self.title.as_deref()),
            contribution(self.isbn.as_deref()),
        ])
    }
}

impl Identifiable for Book {
    fn id(&self) -> Option<i64> {
        self.id
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
            || (self.id == other.id && self.title == other.title && self.isbn == other.isbn)
    }
}

impl Eq for Book {}

impl Hash for Book {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl fmt::Display for Book {
    // authors are left out, as in the Author rendering
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Book{{id={}, title={}, isbn={}}}",
            or_null_id(self.id),
            or_null(&self.title),
            or_null(&self.isbn)
        )
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Publisher {
    id: Option<i64>,
    pub name: Option<String>,
    pub address_line1: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    /// Books carrying this publisher (inverse side)
    #[serde(default)]
    pub books: HashSet<i64>,
}

impl Publisher {
    pub fn new(
        name: impl Into<String>,
        address_line1: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            address_line1: Some(address_line1.into()),
            city: Some(city.into()),
            state: Some(state.into()),
            zip: Some(zip.into()),
            books: HashSet::new(),
        }
    }

    pub(crate) fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn hash_code(&self) -> u64 {
        fold(&[
            contribution(self.id.as_ref()),
            contribution(self.name.as_deref()),
            contribution(self.address_line1.as_deref()),
            contribution(self.city.as_deref()),
            contribution(self.state.as_deref()),
            contribution(self.zip.as_deref()),
        ])
    }
}

impl Identifiable for Publisher {
    fn id(&self) -> Option<i64> {
        self.id
    }
}

impl PartialEq for Publisher {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
            || (self.id == other.id
                && self.name == other.name
                && self.address_line1 == other.address_line1
                && self.city == other.city
                && self.state == other.state
                && self.zip == other.zip)
    }
}

impl Eq for Publisher {}

impl Hash for Publisher {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl fmt::Display for Publisher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut books: Vec<i64> = self.books.iter().copied().collect();
        books.sort_unstable();
        write!(
            f,
            "Publisher{{id={}, name={}, addressLine1={}, city={}, state={}, zip={}, books={:?}}}",
            or_null_id(self.id),
            or_null(&self.name),
            or_null(&self.address_line1),
            or_null(&self.city),
            or_null(&self.state),
            or_null(&self.zip),
            books
        )
    }
}
