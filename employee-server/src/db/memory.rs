//! In-process employee repository
//!
//! Used when no `DATABASE_URL` is configured and by the API tests. Rows live
//! in a `BTreeMap` keyed by id, so listing order is id order like the
//! PostgreSQL repository. The email uniqueness backstop is checked under the
//! same write lock as the insert.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use shared::models::{Employee, EmployeeId};

use super::{EmployeeRepository, RepoError, RepoResult};

#[derive(Debug, Default)]
struct Table {
    last_id: EmployeeId,
    rows: BTreeMap<EmployeeId, Employee>,
}

impl Table {
    fn email_taken_by_other(&self, email: &str, id: EmployeeId) -> bool {
        self.rows
            .values()
            .any(|row| row.email == email && row.id != id)
    }
}

#[derive(Debug, Default)]
pub struct MemoryEmployeeRepository {
    table: RwLock<Table>,
}

impl MemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeRepository for MemoryEmployeeRepository {
    async fn save(&self, employee: &Employee) -> RepoResult<Employee> {
        let mut table = self.table.write();

        let id = if table.rows.contains_key(&employee.id) {
            employee.id
        } else {
            table.last_id += 1;
            table.last_id
        };

        if table.email_taken_by_other(&employee.email, id) {
            return Err(RepoError::DuplicateEmail(employee.email.clone()));
        }

        let stored = Employee {
            id,
            ..employee.clone()
        };
        table.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        Ok(self.table.read().rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        Ok(self.table.read().rows.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Employee>> {
        Ok(self
            .table
            .read()
            .rows
            .values()
            .find(|row| row.email == email)
            .cloned())
    }

    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> RepoResult<Option<Employee>> {
        Ok(self
            .table
            .read()
            .rows
            .values()
            .find(|row| row.first_name == first_name && row.last_name == last_name)
            .cloned())
    }

    async fn delete_by_id(&self, id: EmployeeId) -> RepoResult<()> {
        self.table.write().rows.remove(&id);
        Ok(())
    }

    async fn delete_all(&self) -> RepoResult<()> {
        self.table.write().rows.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> Employee {
        Employee::builder()
            .first_name("John")
            .last_name("Doe")
            .email("johndoe@email.com")
            .build()
    }

    fn jane() -> Employee {
        Employee::builder()
            .first_name("Jane")
            .last_name("Roe")
            .email("janeroe@email.com")
            .build()
    }

    #[tokio::test]
    async fn test_save_assigns_id() {
        let repo = MemoryEmployeeRepository::new();
        let saved = repo.save(&john()).await.unwrap();

        assert!(saved.id > 0);
        assert_eq!(saved.first_name, "John");
        assert_eq!(repo.find_by_id(saved.id).await.unwrap(), Some(saved));
    }

    #[tokio::test]
    async fn test_find_all_in_id_order() {
        let repo = MemoryEmployeeRepository::new();
        let first = repo.save(&john()).await.unwrap();
        let second = repo.save(&jane()).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all, vec![first, second]);
    }

    #[tokio::test]
    async fn test_save_existing_id_replaces_row() {
        let repo = MemoryEmployeeRepository::new();
        let saved = repo.save(&john()).await.unwrap();

        let changed = Employee {
            email: "john@email.com".into(),
            ..saved.clone()
        };
        let updated = repo.save(&changed).await.unwrap();

        assert_eq!(updated.id, saved.id);
        assert_eq!(updated.email, "john@email.com");
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_save_unknown_id_inserts_new_row() {
        let repo = MemoryEmployeeRepository::new();
        let saved = repo.save(&Employee { id: 99, ..john() }).await.unwrap();

        assert_ne!(saved.id, 99);
        assert!(repo.find_by_id(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ids_are_not_reused() {
        let repo = MemoryEmployeeRepository::new();
        let first = repo.save(&john()).await.unwrap();
        repo.delete_by_id(first.id).await.unwrap();

        let second = repo.save(&john()).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_find_by_email_and_name() {
        let repo = MemoryEmployeeRepository::new();
        let saved = repo.save(&john()).await.unwrap();

        assert_eq!(
            repo.find_by_email("johndoe@email.com").await.unwrap(),
            Some(saved.clone())
        );
        assert!(repo.find_by_email("JohnDoe@email.com").await.unwrap().is_none());

        assert_eq!(repo.find_by_name("John", "Doe").await.unwrap(), Some(saved));
        assert!(repo.find_by_name("john", "Doe").await.unwrap().is_none());
        assert!(repo.find_by_name("John", "Roe").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_absent_id_is_noop() {
        let repo = MemoryEmployeeRepository::new();
        repo.save(&john()).await.unwrap();

        repo.delete_by_id(12345).await.unwrap();
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_all() {
        let repo = MemoryEmployeeRepository::new();
        repo.save(&john()).await.unwrap();
        repo.save(&jane()).await.unwrap();

        repo.delete_all().await.unwrap();
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_email_backstop() {
        let repo = MemoryEmployeeRepository::new();
        repo.save(&john()).await.unwrap();

        let err = repo
            .save(&Employee {
                email: "johndoe@email.com".into(),
                ..jane()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::DuplicateEmail(email) if email == "johndoe@email.com"));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }
}
