//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::DomainError;
use super::entities::Identifiable;

/// Generic create/read/update/delete access to one entity type
#[async_trait]
pub trait CrudRepository<T>: Send + Sync
where
    T: Identifiable + Send + Sync + 'static,
{
    /// Insert when the identifier is absent, otherwise update the row with
    /// that identifier. Returns the given entity with its identifier
    /// assigned; inverse association sets are not refreshed.
    async fn save(&self, entity: T) -> Result<T, DomainError>;

    /// All persisted rows, in no particular order
    async fn find_all(&self) -> Result<Vec<T>, DomainError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<T>, DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;

    /// Fails with `NotFound` when no row has this identifier
    async fn delete_by_id(&self, id: i64) -> Result<(), DomainError>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, DomainError>;
}
