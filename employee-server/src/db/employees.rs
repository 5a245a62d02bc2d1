//! PostgreSQL employee repository

use async_trait::async_trait;
use shared::models::{Employee, EmployeeId};
use sqlx::PgPool;

use super::{EmployeeRepository, RepoError, RepoResult};

const EMAIL_UNIQUE_CONSTRAINT: &str = "employees_email_key";

#[derive(Clone)]
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, employee: &Employee) -> Result<Employee, sqlx::Error> {
        sqlx::query_as(
            "INSERT INTO employees (first_name, last_name, email)
             VALUES ($1, $2, $3)
             RETURNING id, first_name, last_name, email",
        )
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .fetch_one(&self.pool)
        .await
    }

    async fn replace(&self, employee: &Employee) -> Result<Option<Employee>, sqlx::Error> {
        sqlx::query_as(
            "UPDATE employees SET first_name = $1, last_name = $2, email = $3
             WHERE id = $4
             RETURNING id, first_name, last_name, email",
        )
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .bind(employee.id)
        .fetch_optional(&self.pool)
        .await
    }
}

/// Translate a unique violation on the email column
fn map_write_error(err: sqlx::Error, email: &str) -> RepoError {
    if let sqlx::Error::Database(db_err) = &err
        && db_err.is_unique_violation()
        && db_err.constraint() == Some(EMAIL_UNIQUE_CONSTRAINT)
    {
        return RepoError::DuplicateEmail(email.to_string());
    }
    RepoError::Database(err)
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn save(&self, employee: &Employee) -> RepoResult<Employee> {
        if !employee.is_new()
            && let Some(updated) = self
                .replace(employee)
                .await
                .map_err(|e| map_write_error(e, &employee.email))?
        {
            return Ok(updated);
        }
        self.insert(employee)
            .await
            .map_err(|e| map_write_error(e, &employee.email))
    }

    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let rows: Vec<Employee> = sqlx::query_as(
            "SELECT id, first_name, last_name, email FROM employees ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        let row: Option<Employee> = sqlx::query_as(
            "SELECT id, first_name, last_name, email FROM employees WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Employee>> {
        let row: Option<Employee> = sqlx::query_as(
            "SELECT id, first_name, last_name, email FROM employees WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> RepoResult<Option<Employee>> {
        let row: Option<Employee> = sqlx::query_as(
            "SELECT id, first_name, last_name, email FROM employees
             WHERE first_name = $1 AND last_name = $2
             ORDER BY id
             LIMIT 1",
        )
        .bind(first_name)
        .bind(last_name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_by_id(&self, id: EmployeeId) -> RepoResult<()> {
        sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_all(&self) -> RepoResult<()> {
        sqlx::query("DELETE FROM employees")
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
