//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::repository::employee;
use crate::utils::validation::{self, CreateEmployeeRequest};
use crate::utils::{AppError, AppResult};
use shared::models::{Employee, EmployeeUpdate};

/// `?search=<text>`
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub search: Option<String>,
}

/// Non-numeric ids can never match a row
fn parse_id(raw: &str) -> AppResult<i64> {
    raw.parse()
        .map_err(|_| AppError::not_found(employee::MSG_NOT_FOUND))
}

/// List employees, newest first, optionally filtered by name
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Employee>>> {
    let employees = employee::find_all(&state.db.pool, query.search.as_deref())
        .await
        .map_err(|e| AppError::from_repo(e, "Failed to fetch employees"))?;
    tracing::debug!(count = employees.len(), search = ?query.search, "Employees fetched");
    Ok(Json(employees))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Employee>> {
    let id = parse_id(&id)?;
    let employee = employee::find_by_id(&state.db.pool, id)
        .await
        .map_err(|e| AppError::from_repo(e, "Failed to fetch employee"))?
        .ok_or_else(|| AppError::not_found(employee::MSG_NOT_FOUND))?;
    Ok(Json(employee))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    let Json(payload) = payload?;
    let data = validation::validate_create(payload).inspect_err(|e| {
        tracing::info!(error = %e, "Rejected employee create");
    })?;

    let employee = employee::create(&state.db.pool, data)
        .await
        .map_err(|e| AppError::from_repo(e, "Failed to create employee"))?;

    tracing::info!(id = employee.id, email = %employee.email, "Employee created");
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Update an employee (partial)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<EmployeeUpdate>, JsonRejection>,
) -> AppResult<Json<Employee>> {
    let id = parse_id(&id)?;
    let Json(payload) = payload?;
    let data = validation::validate_update(payload)?;

    let employee = employee::update(&state.db.pool, id, data)
        .await
        .map_err(|e| AppError::from_repo(e, "Failed to update employee"))?;

    tracing::info!(id, "Employee updated");
    Ok(Json(employee))
}

/// Hard delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id)?;
    let deleted = employee::delete(&state.db.pool, id)
        .await
        .map_err(|e| AppError::from_repo(e, "Failed to delete employee"))?;

    if !deleted {
        return Err(AppError::not_found(employee::MSG_NOT_FOUND));
    }

    tracing::info!(id, "Employee deleted");
    Ok(StatusCode::NO_CONTENT)
}
