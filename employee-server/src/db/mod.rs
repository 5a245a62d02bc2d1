//! Database access layer
//!
//! [`EmployeeRepository`] is the persistence gateway. It answers lookups by id,
//! email and name, and writes whole rows. It does not decide whether an email
//! may be used; that check belongs to the service. The storage layer only
//! refuses a write that would break the unique email column.

pub mod employees;
pub mod memory;

use async_trait::async_trait;
use shared::models::{Employee, EmployeeId};

pub use employees::PgEmployeeRepository;
pub use memory::MemoryEmployeeRepository;

/// Repository errors
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// The unique email constraint rejected a write
    #[error("Duplicate email: {0}")]
    DuplicateEmail(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence gateway for employee records
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Insert when `employee.id` is 0 or unknown, otherwise replace the row.
    /// Returns the stored record with its id.
    async fn save(&self, employee: &Employee) -> RepoResult<Employee>;

    /// Every stored record, ordered by id
    async fn find_all(&self) -> RepoResult<Vec<Employee>>;

    async fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>>;

    /// Exact match on email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Employee>>;

    /// Exact, case-sensitive match on both names (lowest id wins)
    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> RepoResult<Option<Employee>>;

    /// Remove a record; absent ids are ignored
    async fn delete_by_id(&self, id: EmployeeId) -> RepoResult<()>;

    /// Remove every record
    async fn delete_all(&self) -> RepoResult<()>;
}
