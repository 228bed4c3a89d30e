//! Repository Module
//!
//! The storage capability handlers work against, plus its implementations.

pub mod employee;
pub mod memory;

// Re-exports
pub use employee::MongoEmployeeRepository;
pub use memory::MemoryEmployeeRepository;

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use shared::models::Employee;
use thiserror::Error;

use crate::db::models::EmployeeId;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Operation timed out after {0:?}")]
    Timeout(Duration),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

impl From<mongodb::error::Error> for RepoError {
    fn from(err: mongodb::error::Error) -> Self {
        match *err.kind {
            mongodb::error::ErrorKind::BsonDeserialization(ref e) => {
                RepoError::InvalidDocument(e.to_string())
            }
            _ => RepoError::Database(err.to_string()),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Employee storage capability
///
/// The five operations the HTTP layer needs. Implementations must be safe
/// for concurrent use; there is no locking above this trait.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Every stored employee, in no particular order
    async fn find_all(&self) -> RepoResult<Vec<Employee>>;

    async fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>>;

    /// Store a new employee and return the id storage assigned to it
    async fn insert_one(&self, employee: &Employee) -> RepoResult<EmployeeId>;

    /// Overwrite name, age and salary; returns the number of matched records
    async fn update_one(&self, id: EmployeeId, employee: &Employee) -> RepoResult<u64>;

    /// Returns the number of deleted records (0 when already absent)
    async fn delete_one(&self, id: EmployeeId) -> RepoResult<u64>;
}

/// Run a storage future under a deadline
///
/// The future is dropped when the deadline passes, which lets the driver
/// abandon its pending I/O.
pub async fn with_deadline<T, F>(timeout: Duration, operation: F) -> RepoResult<T>
where
    F: Future<Output = RepoResult<T>>,
{
    tokio::time::timeout(timeout, operation)
        .await
        .map_err(|_| RepoError::Timeout(timeout))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_with_deadline_passes_result_through() {
        let ok = with_deadline(Duration::from_secs(1), async { Ok::<_, RepoError>(7) }).await;
        assert_eq!(ok.unwrap(), 7);

        let err = with_deadline(Duration::from_secs(1), async {
            Err::<(), _>(RepoError::Database("down".into()))
        })
        .await;
        assert!(matches!(err, Err(RepoError::Database(msg)) if msg == "down"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_with_deadline_times_out() {
        let result = with_deadline(Duration::from_secs(10), async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok::<_, RepoError>(())
        })
        .await;
        assert!(matches!(result, Err(RepoError::Timeout(d)) if d == Duration::from_secs(10)));
    }

    #[test]
    fn test_timeout_display() {
        let err = RepoError::Timeout(Duration::from_secs(10));
        assert_eq!(err.to_string(), "Operation timed out after 10s");
    }
}
