//! Employee API

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use shared::error::AppResult;
use shared::models::Employee;

use super::extract::{IdPath, ValidatedJson};
use crate::state::AppState;

pub const DELETED_MESSAGE: &str = "Employee deleted successfully!";

/// Employee router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/employees", get(list).post(create).put(update))
        .route("/employees/{id}", get(get_by_id).delete(delete))
}

/// Optional name filter for the list endpoint
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameFilter {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Create an employee
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(employee): ValidatedJson<Employee>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    let saved = state.employees.create(&employee).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// List employees
///
/// With both `firstName` and `lastName` given, returns the matching employee
/// (zero or one). A single name parameter is ignored.
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<NameFilter>,
) -> AppResult<Json<Vec<Employee>>> {
    let employees = match (filter.first_name, filter.last_name) {
        (Some(first_name), Some(last_name)) => state
            .employees
            .find_by_name(&first_name, &last_name)
            .await?
            .into_iter()
            .collect(),
        _ => state.employees.list_all().await?,
    };
    Ok(Json(employees))
}

/// Get employee by id; an unknown id is a bare 404
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Response> {
    let response = match state.employees.get(id).await? {
        Some(employee) => Json(employee).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    };
    Ok(response)
}

/// Replace an existing employee
pub async fn update(
    State(state): State<AppState>,
    ValidatedJson(employee): ValidatedJson<Employee>,
) -> AppResult<Json<Employee>> {
    let saved = state.employees.update(&employee).await?;
    Ok(Json(saved))
}

/// Delete an employee; unknown ids succeed too
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<(StatusCode, &'static str)> {
    state.employees.delete(id).await?;
    Ok((StatusCode::OK, DELETED_MESSAGE))
}
