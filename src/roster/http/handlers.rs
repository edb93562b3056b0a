//! Employee route handlers
//!
//! Each handler parses its inputs, runs one API call on the blocking pool and
//! shapes the response. Mutations answer `200` with an empty body.

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{Map, Value};

use super::error::{AppError, AppResult};
use super::AppState;
use crate::api::SearchFilter;
use crate::model::Employee;

fn parse_id(raw: &str) -> AppResult<i64> {
    raw.parse().map_err(|e| {
        tracing::warn!(raw, error = %e, "Invalid employee ID");
        AppError::InvalidId
    })
}

fn decode_body<T: serde::de::DeserializeOwned>(body: &[u8]) -> AppResult<T> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!(error = %e, "Error decoding JSON body");
        AppError::InvalidPayload
    })
}

pub async fn health() -> &'static str {
    "ok"
}

#[tracing::instrument(name = "list_employees", skip_all)]
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    let result = state.call(|api| api.list_employees()).await?;
    Ok(Json(result.listed))
}

#[tracing::instrument(name = "create_employee", skip_all, fields(id))]
pub async fn create(State(state): State<AppState>, body: Bytes) -> AppResult<StatusCode> {
    let employee: Employee = decode_body(&body)?;
    tracing::Span::current().record("id", employee.id);
    employee.validate_required().map_err(|e| {
        tracing::warn!(id = employee.id, "Missing required fields");
        AppError::from(e)
    })?;

    state.call(move |api| api.create_employee(employee)).await?;
    Ok(StatusCode::OK)
}

#[tracing::instrument(name = "view_employee", skip(state))]
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Employee>> {
    let id = parse_id(&id)?;
    let result = state
        .call(move |api| api.get_employee(id))
        .await
        .map_err(|e| match e {
            AppError::NotFound(_) => AppError::NotFound("Employee not found".to_string()),
            other => other,
        })?;

    result
        .listed
        .into_iter()
        .next()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Employee not found".to_string()))
}

#[tracing::instrument(name = "search_employees", skip(state))]
pub async fn search(
    State(state): State<AppState>,
    Query(filter): Query<SearchFilter>,
) -> AppResult<Json<Vec<Employee>>> {
    let result = state.call(move |api| api.search_employees(&filter)).await?;
    Ok(Json(result.listed))
}

#[tracing::instrument(name = "update_employee", skip(state, body))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> AppResult<StatusCode> {
    let id = parse_id(&id)?;
    let fields: Map<String, Value> = decode_body(&body)?;
    tracing::debug!(?fields, "Received update fields");

    state.call(move |api| api.patch_employee(id, &fields)).await?;
    Ok(StatusCode::OK)
}

#[tracing::instrument(name = "delete_employee", skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id)?;
    state.call(move |api| api.delete_employee(id)).await?;
    Ok(StatusCode::OK)
}
