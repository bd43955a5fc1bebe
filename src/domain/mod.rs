//! Domain layer - Pure business abstractions
//!
//! Entity records, the repository contract and domain error types.
//! Storage specifics live in the infrastructure layer.

pub mod entities;
pub mod errors;
pub mod repositories;

pub use entities::{Author, Book, Identifiable, Publisher};
pub use errors::DomainError;
pub use repositories::*;
