//! Handlers for `/menus` endpoints.
//!
//! | Method   | Path          | Notes |
//! |----------|---------------|-------|
//! | `GET`    | `/menus`      | |
//! | `POST`   | `/menus`      | Body: `{"menu":{"title"}}` |
//! | `GET`    | `/menus/:id`  | |
//! | `PUT`    | `/menus/:id`  | Replaces the title |
//! | `DELETE` | `/menus/:id`  | 400 while the menu still has items, else 204 |
//!
//! Menu items are nested under `/menus/:id/menu-items`, see
//! [`crate::menu_items`].

use std::sync::Arc;

use axum::{
  Json, Router,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
  routing::get,
};
use brasserie_core::{menu::MenuDeletion, store::RestaurantStore, validate::MenuDraft};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
  error::ApiError,
  extract::{ApiJson, MENU_NOT_FOUND, MenuParam},
  menu_items,
};

/// Body of the 400 returned when deleting a menu that still lists items.
pub const MENU_HAS_ITEMS: &str = "menu has items in it";

pub fn router<S>() -> Router<Arc<S>>
where
  S: RestaurantStore + 'static,
{
  Router::new()
    .route("/", get(list::<S>).post(create::<S>))
    .route("/{menu_id}", get(get_one).put(update::<S>).delete(delete::<S>))
    .nest("/{menu_id}/menu-items", menu_items::router::<S>())
}

/// Request envelope: `{"menu": {...}}`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MenuBody {
  pub menu: Option<MenuDraft>,
}

/// `GET /menus`
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Json<Value>, ApiError>
where
  S: RestaurantStore,
{
  let menus = store.list_menus().await.map_err(ApiError::store)?;
  Ok(Json(json!({ "menus": menus })))
}

/// `POST /menus`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  ApiJson(body): ApiJson<MenuBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RestaurantStore,
{
  let input = body.menu.unwrap_or_default().validate()?;
  let menu = store.create_menu(input).await.map_err(ApiError::store)?;
  tracing::info!(id = menu.id, "menu created");
  Ok((StatusCode::CREATED, Json(json!({ "menu": menu }))))
}

/// `GET /menus/:id`
pub async fn get_one(MenuParam(menu): MenuParam) -> Json<Value> {
  Json(json!({ "menu": menu }))
}

/// `PUT /menus/:id`
pub async fn update<S>(
  State(store): State<Arc<S>>,
  MenuParam(menu): MenuParam,
  ApiJson(body): ApiJson<MenuBody>,
) -> Result<Json<Value>, ApiError>
where
  S: RestaurantStore,
{
  let input = body.menu.unwrap_or_default().validate()?;
  let menu = store
    .update_menu(menu.id, input)
    .await
    .map_err(ApiError::store)?
    .ok_or(ApiError::NotFound(MENU_NOT_FOUND))?;
  Ok(Json(json!({ "menu": menu })))
}

/// `DELETE /menus/:id`
///
/// Refused with 400 while any item still points at the menu; the store checks
/// and deletes atomically.
pub async fn delete<S>(
  State(store): State<Arc<S>>,
  MenuParam(menu): MenuParam,
) -> Result<StatusCode, ApiError>
where
  S: RestaurantStore,
{
  match store.delete_menu(menu.id).await.map_err(ApiError::store)? {
    MenuDeletion::Deleted => {
      tracing::info!(id = menu.id, "menu deleted");
      Ok(StatusCode::NO_CONTENT)
    }
    MenuDeletion::HasItems => Err(ApiError::BadRequest(MENU_HAS_ITEMS.to_string())),
    MenuDeletion::NotFound => Err(ApiError::NotFound(MENU_NOT_FOUND)),
  }
}
