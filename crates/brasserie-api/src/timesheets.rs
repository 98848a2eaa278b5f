//! Handlers for `/employees/:employee_id/timesheets` endpoints.
//!
//! The owning employee always comes from the path; an `employee_id` inside
//! the payload is ignored.

use std::sync::Arc;

use axum::{
  Json, Router,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
  routing::get,
};
use brasserie_core::{store::RestaurantStore, validate::TimesheetDraft};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
  error::ApiError,
  extract::{ApiJson, EmployeeParam, TIMESHEET_NOT_FOUND, TimesheetParam},
};

pub fn router<S>() -> Router<Arc<S>>
where
  S: RestaurantStore + 'static,
{
  Router::new()
    .route("/", get(list::<S>).post(create::<S>))
    .route(
      "/{timesheet_id}",
      get(get_one).put(update::<S>).delete(delete::<S>),
    )
}

/// Request envelope: `{"timesheet": {...}}`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TimesheetBody {
  pub timesheet: Option<TimesheetDraft>,
}

/// `GET /employees/:employee_id/timesheets`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  EmployeeParam(employee): EmployeeParam,
) -> Result<Json<Value>, ApiError>
where
  S: RestaurantStore,
{
  let timesheets = store
    .list_timesheets(employee.id)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(json!({ "timesheets": timesheets })))
}

/// `POST /employees/:employee_id/timesheets`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  EmployeeParam(employee): EmployeeParam,
  ApiJson(body): ApiJson<TimesheetBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RestaurantStore,
{
  let input = body.timesheet.unwrap_or_default().validate()?;
  let timesheet = store
    .create_timesheet(employee.id, input)
    .await
    .map_err(ApiError::store)?;
  tracing::info!(id = timesheet.id, employee_id = employee.id, "timesheet recorded");
  Ok((StatusCode::CREATED, Json(json!({ "timesheet": timesheet }))))
}

/// `GET /employees/:employee_id/timesheets/:timesheet_id`
pub async fn get_one(
  EmployeeParam(_): EmployeeParam,
  TimesheetParam(timesheet): TimesheetParam,
) -> Json<Value> {
  Json(json!({ "timesheet": timesheet }))
}

/// `PUT /employees/:employee_id/timesheets/:timesheet_id`
pub async fn update<S>(
  State(store): State<Arc<S>>,
  EmployeeParam(_): EmployeeParam,
  TimesheetParam(timesheet): TimesheetParam,
  ApiJson(body): ApiJson<TimesheetBody>,
) -> Result<Json<Value>, ApiError>
where
  S: RestaurantStore,
{
  let input = body.timesheet.unwrap_or_default().validate()?;
  let timesheet = store
    .update_timesheet(timesheet.id, input)
    .await
    .map_err(ApiError::store)?
    .ok_or(ApiError::NotFound(TIMESHEET_NOT_FOUND))?;
  Ok(Json(json!({ "timesheet": timesheet })))
}

/// `DELETE /employees/:employee_id/timesheets/:timesheet_id` — hard delete.
pub async fn delete<S>(
  State(store): State<Arc<S>>,
  EmployeeParam(_): EmployeeParam,
  TimesheetParam(timesheet): TimesheetParam,
) -> Result<StatusCode, ApiError>
where
  S: RestaurantStore,
{
  if !store
    .delete_timesheet(timesheet.id)
    .await
    .map_err(ApiError::store)?
  {
    return Err(ApiError::NotFound(TIMESHEET_NOT_FOUND));
  }
  Ok(StatusCode::NO_CONTENT)
}
