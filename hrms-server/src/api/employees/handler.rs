//! Employee API Handlers

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use shared::error::{AppError, AppResult};
use shared::models::Employee;
use shared::response::MessageResponse;

use crate::core::ServerState;
use crate::db::models::EmployeeId;

/// Validate the `{id}` path segment
fn parse_id(path: Result<Path<String>, PathRejection>) -> AppResult<EmployeeId> {
    let Path(raw) = path.map_err(|e| AppError::invalid_id().with_cause(e.body_text()))?;
    EmployeeId::parse(&raw).map_err(|e| AppError::invalid_id().with_cause(e))
}

/// Decode the request body
fn parse_body(body: Result<Json<Employee>, JsonRejection>) -> AppResult<Employee> {
    let Json(employee) = body.map_err(|e| AppError::parse_error().with_cause(e.body_text()))?;
    Ok(employee)
}

/// Load one employee; a failed lookup reads as "not found"
async fn load(state: &ServerState, id: EmployeeId) -> AppResult<Employee> {
    state
        .bounded(state.employees.find_by_id(id))
        .await
        .map_err(|e| {
            tracing::warn!(employee_id = %id, error = %e, "Employee lookup failed");
            AppError::not_found().with_cause(e)
        })?
        .ok_or_else(AppError::not_found)
}

/// List all employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = state
        .bounded(state.employees.find_all())
        .await
        .map_err(AppError::query_failed)?;
    Ok(Json(employees))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<Json<Employee>> {
    let id = parse_id(path)?;
    let employee = load(&state, id).await?;
    Ok(Json(employee))
}

/// Create a new employee
///
/// The echoed `data` is the body as received, minus any client-supplied id.
pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<Employee>, JsonRejection>,
) -> AppResult<(StatusCode, Json<MessageResponse<Employee>>)> {
    let employee = parse_body(body)?.without_id();

    let id = state
        .bounded(state.employees.insert_one(&employee))
        .await
        .map_err(AppError::create_failed)?;
    tracing::info!(employee_id = %id, "Employee created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::with_data("employee created", employee)),
    ))
}

/// Update an employee
///
/// Non-empty body fields replace the stored ones; the merged record is
/// written back in full.
pub async fn update(
    State(state): State<ServerState>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<Employee>, JsonRejection>,
) -> AppResult<Json<MessageResponse<()>>> {
    let changes = parse_body(body)?;
    let id = parse_id(path)?;

    let current = load(&state, id).await?;
    let merged = current.merge_update(&changes);

    let matched = state
        .bounded(state.employees.update_one(id, &merged))
        .await
        .map_err(AppError::update_failed)?;
    if matched == 0 {
        tracing::warn!(employee_id = %id, "Employee disappeared before update was written");
    } else {
        tracing::info!(employee_id = %id, "Employee updated");
    }

    Ok(Json(MessageResponse::message("employee updated")))
}

/// Delete an employee
///
/// Deleting an id that is already gone still answers `employee deleted`.
pub async fn delete(
    State(state): State<ServerState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<Json<MessageResponse<()>>> {
    let id = parse_id(path)?;

    let deleted = state
        .bounded(state.employees.delete_one(id))
        .await
        .map_err(AppError::delete_failed)?;
    tracing::info!(employee_id = %id, deleted, "Employee delete processed");

    Ok(Json(MessageResponse::message("employee deleted")))
}
