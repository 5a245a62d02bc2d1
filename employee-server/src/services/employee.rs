//! Employee Service
//!
//! Owns the one business rule of the service: an email address belongs to at
//! most one employee. The check reads before it writes; the repository's
//! unique email backstop catches the race between two concurrent writers.

use std::sync::Arc;

use shared::models::{Employee, EmployeeId};

use crate::db::EmployeeRepository;
use crate::error::{ServiceError, ServiceResult};

#[derive(Clone)]
pub struct EmployeeService {
    repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }

    /// Store a new employee; its email must be unused
    ///
    /// Any id carried by the incoming record is ignored, so create always
    /// inserts a new row.
    pub async fn create(&self, employee: &Employee) -> ServiceResult<Employee> {
        tracing::debug!(email = %employee.email, "Creating employee");
        self.ensure_email_unused(&employee.email).await?;

        let new = Employee {
            id: 0,
            ..employee.clone()
        };
        let saved = self.repo.save(&new).await?;
        tracing::info!(employee_id = saved.id, email = %saved.email, "Employee created");
        Ok(saved)
    }

    pub async fn list_all(&self) -> ServiceResult<Vec<Employee>> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn get(&self, id: EmployeeId) -> ServiceResult<Option<Employee>> {
        Ok(self.repo.find_by_id(id).await?)
    }

    pub async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> ServiceResult<Option<Employee>> {
        Ok(self.repo.find_by_name(first_name, last_name).await?)
    }

    /// Replace every field of an existing employee
    ///
    /// The email check is skipped when the email is unchanged, otherwise the
    /// record would collide with itself.
    pub async fn update(&self, employee: &Employee) -> ServiceResult<Employee> {
        tracing::debug!(employee_id = employee.id, "Updating employee");
        let existing = self
            .repo
            .find_by_id(employee.id)
            .await?
            .ok_or(ServiceError::NotFound(employee.id))?;

        if existing.email != employee.email {
            self.ensure_email_unused(&employee.email).await?;
        }

        let saved = self.repo.save(employee).await?;
        tracing::info!(employee_id = saved.id, email = %saved.email, "Employee updated");
        Ok(saved)
    }

    /// Delete by id; absent ids are not an error
    pub async fn delete(&self, id: EmployeeId) -> ServiceResult<()> {
        self.repo.delete_by_id(id).await?;
        tracing::info!(employee_id = id, "Employee deleted");
        Ok(())
    }

    async fn ensure_email_unused(&self, email: &str) -> ServiceResult<()> {
        if self.repo.find_by_email(email).await?.is_some() {
            return Err(ServiceError::DuplicateEmail(email.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryEmployeeRepository;

    fn service() -> (EmployeeService, Arc<MemoryEmployeeRepository>) {
        let repo = Arc::new(MemoryEmployeeRepository::new());
        (EmployeeService::new(repo.clone()), repo)
    }

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
    async fn test_create_assigns_id_and_lists() {
        let (service, _) = service();
        let saved = service.create(&john()).await.unwrap();

        assert!(saved.id > 0);
        assert_eq!(service.list_all().await.unwrap(), vec![saved]);
    }

    #[tokio::test]
    async fn test_create_ignores_client_id() {
        let (service, _) = service();
        let first = service.create(&john()).await.unwrap();

        let second = service
            .create(&Employee {
                id: first.id,
                ..jane()
            })
            .await
            .unwrap();

        assert_ne!(second.id, first.id);
        assert_eq!(service.get(first.id).await.unwrap(), Some(first));
    }

    #[tokio::test]
    async fn test_create_duplicate_email_leaves_store_unchanged() {
        let (service, repo) = service();
        service.create(&john()).await.unwrap();

        let err = service
            .create(&Employee {
                email: "johndoe@email.com".into(),
                ..jane()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::DuplicateEmail(email) if email == "johndoe@email.com"));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let (service, repo) = service();
        service.create(&john()).await.unwrap();

        let err = service
            .update(&Employee { id: 404, ..jane() })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(404)));
        assert!(repo.find_by_email("janeroe@email.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_with_unchanged_email() {
        let (service, _) = service();
        let saved = service.create(&john()).await.unwrap();

        let updated = service
            .update(&Employee {
                first_name: "Johnny".into(),
                ..saved.clone()
            })
            .await
            .unwrap();

        assert_eq!(updated.id, saved.id);
        assert_eq!(updated.first_name, "Johnny");
        assert_eq!(updated.email, saved.email);
    }

    #[tokio::test]
    async fn test_update_to_email_of_other_employee() {
        let (service, _) = service();
        let john = service.create(&john()).await.unwrap();
        let jane = service.create(&jane()).await.unwrap();

        let err = service
            .update(&Employee {
                email: john.email.clone(),
                ..jane.clone()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::DuplicateEmail(_)));
        assert_eq!(service.get(jane.id).await.unwrap(), Some(jane));
    }

    #[tokio::test]
    async fn test_update_is_full_replace() {
        let (service, _) = service();
        let saved = service.create(&john()).await.unwrap();

        let updated = service
            .update(&Employee::builder().id(saved.id).email("new@email.com").build())
            .await
            .unwrap();

        assert_eq!(updated.first_name, "");
        assert_eq!(updated.last_name, "");
        assert_eq!(updated.email, "new@email.com");
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_noop() {
        let (service, _) = service();
        service.create(&john()).await.unwrap();

        service.delete(999).await.unwrap();
        assert_eq!(service.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_none() {
        let (service, _) = service();
        let saved = service.create(&john()).await.unwrap();

        service.delete(saved.id).await.unwrap();
        assert!(service.get(saved.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_name() {
        let (service, _) = service();
        let saved = service.create(&john()).await.unwrap();

        assert_eq!(service.find_by_name("John", "Doe").await.unwrap(), Some(saved));
        assert!(service.find_by_name("Jane", "Doe").await.unwrap().is_none());
    }
}
