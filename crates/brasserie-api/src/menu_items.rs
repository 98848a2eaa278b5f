//! Handlers for `/menus/:menu_id/menu-items` endpoints.
//!
//! The owning menu always comes from the path; a `menu_id` inside the payload
//! is ignored.

use std::sync::Arc;

use axum::{
  Json, Router,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
  routing::get,
};
use brasserie_core::{store::RestaurantStore, validate::MenuItemDraft};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
  error::ApiError,
  extract::{ApiJson, MENU_ITEM_NOT_FOUND, MenuItemParam, MenuParam},
};

pub fn router<S>() -> Router<Arc<S>>
where
  S: RestaurantStore + 'static,
{
  Router::new()
    .route("/", get(list::<S>).post(create::<S>))
    .route(
      "/{menu_item_id}",
      get(get_one).put(update::<S>).delete(delete::<S>),
    )
}

/// Request envelope: `{"menuItem": {...}}`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MenuItemBody {
  pub menu_item: Option<MenuItemDraft>,
}

/// `GET /menus/:menu_id/menu-items`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  MenuParam(menu): MenuParam,
) -> Result<Json<Value>, ApiError>
where
  S: RestaurantStore,
{
  let items = store
    .list_menu_items(menu.id)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(json!({ "menuItems": items })))
}

/// `POST /menus/:menu_id/menu-items`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  MenuParam(menu): MenuParam,
  ApiJson(body): ApiJson<MenuItemBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RestaurantStore,
{
  let input = body.menu_item.unwrap_or_default().validate()?;
  let item = store
    .create_menu_item(menu.id, input)
    .await
    .map_err(ApiError::store)?;
  tracing::info!(id = item.id, menu_id = menu.id, "menu item created");
  Ok((StatusCode::CREATED, Json(json!({ "menuItem": item }))))
}

/// `GET /menus/:menu_id/menu-items/:menu_item_id`
pub async fn get_one(
  MenuParam(_): MenuParam,
  MenuItemParam(item): MenuItemParam,
) -> Json<Value> {
  Json(json!({ "menuItem": item }))
}

/// `PUT /menus/:menu_id/menu-items/:menu_item_id`
pub async fn update<S>(
  State(store): State<Arc<S>>,
  MenuParam(_): MenuParam,
  MenuItemParam(item): MenuItemParam,
  ApiJson(body): ApiJson<MenuItemBody>,
) -> Result<Json<Value>, ApiError>
where
  S: RestaurantStore,
{
  let input = body.menu_item.unwrap_or_default().validate()?;
  let item = store
    .update_menu_item(item.id, input)
    .await
    .map_err(ApiError::store)?
    .ok_or(ApiError::NotFound(MENU_ITEM_NOT_FOUND))?;
  Ok(Json(json!({ "menuItem": item })))
}

/// `DELETE /menus/:menu_id/menu-items/:menu_item_id` — hard delete.
pub async fn delete<S>(
  State(store): State<Arc<S>>,
  MenuParam(_): MenuParam,
  MenuItemParam(item): MenuItemParam,
) -> Result<StatusCode, ApiError>
where
  S: RestaurantStore,
{
  if !store
    .delete_menu_item(item.id)
    .await
    .map_err(ApiError::store)?
  {
    return Err(ApiError::NotFound(MENU_ITEM_NOT_FOUND));
  }
  Ok(StatusCode::NO_CONTENT)
}
