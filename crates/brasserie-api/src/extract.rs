//! Request extractors: the JSON body wrapper and the path-parameter resolvers.
//!
//! A resolver looks up the row named by one path segment and rejects the
//! request with 404 before the handler runs. Handlers list resolvers in path
//! order (parent before child) and ahead of the body, so a missing parent wins
//! over a missing child, and both win over a malformed payload.
//!
//! A segment that is not an integer can never name a row and is treated the
//! same as an unknown id. A child row that exists but belongs to a different
//! parent than the one in the path is also reported as not found.

use std::{collections::HashMap, sync::Arc};

use axum::{
  extract::{FromRequest, FromRequestParts, Path},
  http::request::Parts,
};
use brasserie_core::{
  Id,
  employee::Employee,
  menu::{Menu, MenuItem},
  store::RestaurantStore,
  timesheet::Timesheet,
};

use crate::error::ApiError;

pub const EMPLOYEE_NOT_FOUND: &str = "Employee not found";
pub const TIMESHEET_NOT_FOUND: &str = "timesheet not found";
pub const MENU_NOT_FOUND: &str = "menu not found";
pub const MENU_ITEM_NOT_FOUND: &str = "menu item not found";

/// `axum::Json` with its rejection turned into a plain-text 400.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Parse the integer path parameter `name`, if present.
async fn path_id<S>(parts: &mut Parts, state: &S, name: &str) -> Option<Id>
where
  S: Send + Sync,
{
  let Path(params) = Path::<HashMap<String, String>>::from_request_parts(parts, state)
    .await
    .ok()?;
  params.get(name)?.parse().ok()
}

// ─── Employee ────────────────────────────────────────────────────────────────

/// The employee named by `{employee_id}`, current or former.
pub struct EmployeeParam(pub Employee);

impl<S> FromRequestParts<Arc<S>> for EmployeeParam
where
  S: RestaurantStore + 'static,
{
  type Rejection = ApiError;

  async fn from_request_parts(parts: &mut Parts, store: &Arc<S>) -> Result<Self, ApiError> {
    let Some(id) = path_id(parts, store, "employee_id").await else {
      return Err(ApiError::NotFound(EMPLOYEE_NOT_FOUND));
    };
    store
      .get_employee(id)
      .await
      .map_err(ApiError::store)?
      .map(EmployeeParam)
      .ok_or(ApiError::NotFound(EMPLOYEE_NOT_FOUND))
  }
}

// ─── Timesheet ───────────────────────────────────────────────────────────────

/// The timesheet named by `{timesheet_id}`, owned by the `{employee_id}` in
/// the same path.
pub struct TimesheetParam(pub Timesheet);

impl<S> FromRequestParts<Arc<S>> for TimesheetParam
where
  S: RestaurantStore + 'static,
{
  type Rejection = ApiError;

  async fn from_request_parts(parts: &mut Parts, store: &Arc<S>) -> Result<Self, ApiError> {
    let Some(id) = path_id(parts, store, "timesheet_id").await else {
      return Err(ApiError::NotFound(TIMESHEET_NOT_FOUND));
    };
    let employee_id = path_id(parts, store, "employee_id").await;
    store
      .get_timesheet(id)
      .await
      .map_err(ApiError::store)?
      .filter(|timesheet| Some(timesheet.employee_id) == employee_id)
      .map(TimesheetParam)
      .ok_or(ApiError::NotFound(TIMESHEET_NOT_FOUND))
  }
}

// ─── Menu ────────────────────────────────────────────────────────────────────

/// The menu named by `{menu_id}`.
pub struct MenuParam(pub Menu);

impl<S> FromRequestParts<Arc<S>> for MenuParam
where
  S: RestaurantStore + 'static,
{
  type Rejection = ApiError;

  async fn from_request_parts(parts: &mut Parts, store: &Arc<S>) -> Result<Self, ApiError> {
    let Some(id) = path_id(parts, store, "menu_id").await else {
      return Err(ApiError::NotFound(MENU_NOT_FOUND));
    };
    store
      .get_menu(id)
      .await
      .map_err(ApiError::store)?
      .map(MenuParam)
      .ok_or(ApiError::NotFound(MENU_NOT_FOUND))
  }
}

// ─── Menu item ───────────────────────────────────────────────────────────────

/// The menu item named by `{menu_item_id}`, listed on the `{menu_id}` in the
/// same path.
pub struct MenuItemParam(pub MenuItem);

impl<S> FromRequestParts<Arc<S>> for MenuItemParam
where
  S: RestaurantStore + 'static,
{
  type Rejection = ApiError;

  async fn from_request_parts(parts: &mut Parts, store: &Arc<S>) -> Result<Self, ApiError> {
    let Some(id) = path_id(parts, store, "menu_item_id").await else {
      return Err(ApiError::NotFound(MENU_ITEM_NOT_FOUND));
    };
    let menu_id = path_id(parts, store, "menu_id").await;
    store
      .get_menu_item(id)
      .await
      .map_err(ApiError::store)?
      .filter(|item| Some(item.menu_id) == menu_id)
      .map(MenuItemParam)
      .ok_or(ApiError::NotFound(MENU_ITEM_NOT_FOUND))
  }
}
