//! Handlers for `/employees` endpoints.
//!
//! | Method   | Path              | Notes |
//! |----------|-------------------|-------|
//! | `GET`    | `/employees`      | Current employees only |
//! | `POST`   | `/employees`      | Body: `{"employee":{"name","position","wage"}}` |
//! | `GET`    | `/employees/:id`  | Former employees included |
//! | `PUT`    | `/employees/:id`  | Replaces name, position and wage |
//! | `DELETE` | `/employees/:id`  | Soft delete; 200 with the retired row |
//!
//! Timesheets are nested under `/employees/:id/timesheets`, see
//! [`crate::timesheets`].

use std::sync::Arc;

use axum::{
  Json, Router,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
  routing::get,
};
use brasserie_core::{store::RestaurantStore, validate::EmployeeDraft};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
  error::ApiError,
  extract::{ApiJson, EMPLOYEE_NOT_FOUND, EmployeeParam},
  timesheets,
};

pub fn router<S>() -> Router<Arc<S>>
where
  S: RestaurantStore + 'static,
{
  Router::new()
    .route("/", get(list::<S>).post(create::<S>))
    .route("/{employee_id}", get(get_one).put(update::<S>).delete(retire::<S>))
    .nest("/{employee_id}/timesheets", timesheets::router::<S>())
}

/// Request envelope: `{"employee": {...}}`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EmployeeBody {
  pub employee: Option<EmployeeDraft>,
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /employees`
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Json<Value>, ApiError>
where
  S: RestaurantStore,
{
  let employees = store
    .list_current_employees()
    .await
    .map_err(ApiError::store)?;
  Ok(Json(json!({ "employees": employees })))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /employees`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  ApiJson(body): ApiJson<EmployeeBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RestaurantStore,
{
  let input = body.employee.unwrap_or_default().validate()?;
  let employee = store.create_employee(input).await.map_err(ApiError::store)?;
  tracing::info!(id = employee.id, "employee created");
  Ok((StatusCode::CREATED, Json(json!({ "employee": employee }))))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /employees/:id`
pub async fn get_one(EmployeeParam(employee): EmployeeParam) -> Json<Value> {
  Json(json!({ "employee": employee }))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /employees/:id`
pub async fn update<S>(
  State(store): State<Arc<S>>,
  EmployeeParam(employee): EmployeeParam,
  ApiJson(body): ApiJson<EmployeeBody>,
) -> Result<Json<Value>, ApiError>
where
  S: RestaurantStore,
{
  let input = body.employee.unwrap_or_default().validate()?;
  let employee = store
    .update_employee(employee.id, input)
    .await
    .map_err(ApiError::store)?
    .ok_or(ApiError::NotFound(EMPLOYEE_NOT_FOUND))?;
  Ok(Json(json!({ "employee": employee })))
}

// ─── Retire ───────────────────────────────────────────────────────────────────

/// `DELETE /employees/:id` — clears `is_current_employee`.
///
/// Unlike the other deletes this answers 200 with the retired row.
pub async fn retire<S>(
  State(store): State<Arc<S>>,
  EmployeeParam(employee): EmployeeParam,
) -> Result<Json<Value>, ApiError>
where
  S: RestaurantStore,
{
  let employee = store
    .retire_employee(employee.id)
    .await
    .map_err(ApiError::store)?
    .ok_or(ApiError::NotFound(EMPLOYEE_NOT_FOUND))?;
  tracing::info!(id = employee.id, "employee retired");
  Ok(Json(json!({ "employee": employee })))
}
