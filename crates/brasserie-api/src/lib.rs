//! JSON REST API for the Brasserie back office.
//!
//! Exposes an axum [`Router`] backed by any
//! [`brasserie_core::store::RestaurantStore`]. Transport concerns are the
//! caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", brasserie_api::api_router(store.clone()))
//! ```

pub mod employees;
pub mod error;
pub mod extract;
pub mod menu_items;
pub mod menus;
pub mod timesheets;

use std::sync::Arc;

use axum::Router;
use brasserie_core::store::RestaurantStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: RestaurantStore + 'static,
{
  Router::new()
    .nest("/employees", employees::router::<S>())
    .nest("/menus", menus::router::<S>())
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use brasserie_store_sqlite::SqliteStore;
  use serde_json::{Value, json};
  use tower::ServiceExt as _;

  async fn app() -> Router {
    let store = SqliteStore::open_in_memory().await.unwrap();
    Router::new().nest("/api", api_router(Arc::new(store)))
  }

  async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
  ) -> (StatusCode, String) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
      Some(v) => builder
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(v.to_string())),
      None => builder.body(Body::empty()),
    }
    .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
  }

  fn parse(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|e| panic!("not JSON ({e}): {body}"))
  }

  fn ada() -> Value {
    json!({ "employee": { "name": "Ada", "position": "Chef", "wage": 20 } })
  }

  fn soup() -> Value {
    json!({ "menuItem": {
      "name": "Soup", "description": "Tomato", "inventory": 10, "price": 5.5
    } })
  }

  // ── Employees ───────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn employee_round_trip() {
    let app = app().await;

    let (status, body) = send(&app, "POST", "/api/employees", Some(ada())).await;
    assert_eq!(status, StatusCode::CREATED);
    let created = parse(&body)["employee"].clone();
    assert_eq!(created["id"], 1);
    assert_eq!(created["name"], "Ada");
    assert_eq!(created["is_current_employee"], true);

    let (status, body) = send(&app, "GET", "/api/employees/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse(&body)["employee"], created);
  }

  #[tokio::test]
  async fn retired_employee_is_unlisted_but_readable() {
    let app = app().await;
    send(&app, "POST", "/api/employees", Some(ada())).await;

    let (status, body) = send(&app, "DELETE", "/api/employees/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse(&body)["employee"]["is_current_employee"], false);

    let (_, body) = send(&app, "GET", "/api/employees", None).await;
    assert_eq!(parse(&body), json!({ "employees": [] }));

    let (status, body) = send(&app, "GET", "/api/employees/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse(&body)["employee"]["is_current_employee"], false);
  }

  #[tokio::test]
  async fn update_employee_replaces_fields() {
    let app = app().await;
    send(&app, "POST", "/api/employees", Some(ada())).await;

    let payload = json!({ "employee": { "name": "Ada", "position": "Owner", "wage": 0 } });
    let (status, body) = send(&app, "PUT", "/api/employees/1", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    let employee = parse(&body)["employee"].clone();
    assert_eq!(employee["position"], "Owner");
    assert_eq!(employee["wage"], 0.0);
  }

  #[tokio::test]
  async fn missing_employee_field_is_rejected_without_writing() {
    let app = app().await;

    let payload = json!({ "employee": { "name": "Ada", "position": "Chef" } });
    let (status, body) = send(&app, "POST", "/api/employees", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "missing fields");

    let (_, body) = send(&app, "GET", "/api/employees", None).await;
    assert_eq!(parse(&body), json!({ "employees": [] }));
  }

  #[tokio::test]
  async fn rejected_employee_update_leaves_row_unchanged() {
    let app = app().await;
    let (_, body) = send(&app, "POST", "/api/employees", Some(ada())).await;
    let original = parse(&body)["employee"].clone();

    let payload = json!({ "employee": { "name": "Ada", "position": "Owner" } });
    let (status, body) = send(&app, "PUT", "/api/employees/1", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "missing fields");

    let (_, body) = send(&app, "GET", "/api/employees/1", None).await;
    assert_eq!(parse(&body)["employee"], original);
  }

  #[tokio::test]
  async fn missing_envelope_is_a_bad_request() {
    let app = app().await;
    let (status, _) = send(&app, "POST", "/api/employees", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
  }

  #[tokio::test]
  async fn malformed_json_is_a_bad_request() {
    let app = app().await;
    let req = Request::builder()
      .method("POST")
      .uri("/api/menus")
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from("{not json"))
      .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }

  #[tokio::test]
  async fn unknown_or_non_numeric_employee_is_404() {
    let app = app().await;

    let (status, body) = send(&app, "GET", "/api/employees/9", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Employee not found");

    let (status, _) = send(&app, "GET", "/api/employees/abc", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "PUT", "/api/employees/9", Some(ada())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
  }

  // ── Timesheets ──────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn timesheet_takes_employee_from_path() {
    let app = app().await;
    send(&app, "POST", "/api/employees", Some(ada())).await;
    send(&app, "POST", "/api/employees", Some(ada())).await;

    let payload = json!({ "timesheet": {
      "hours": 8, "rate": 20, "date": 1_700_000_000_000_i64, "employee_id": 2
    } });
    let (status, body) =
      send(&app, "POST", "/api/employees/1/timesheets", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    let sheet = parse(&body)["timesheet"].clone();
    assert_eq!(sheet["employee_id"], 1);

    let (_, body) = send(&app, "GET", "/api/employees/1/timesheets", None).await;
    assert_eq!(parse(&body)["timesheets"].as_array().unwrap().len(), 1);
    let (_, body) = send(&app, "GET", "/api/employees/2/timesheets", None).await;
    assert_eq!(parse(&body), json!({ "timesheets": [] }));
  }

  #[tokio::test]
  async fn timesheet_update_and_delete() {
    let app = app().await;
    send(&app, "POST", "/api/employees", Some(ada())).await;
    let payload = json!({ "timesheet": { "hours": 8, "rate": 20, "date": 5 } });
    send(&app, "POST", "/api/employees/1/timesheets", Some(payload)).await;

    let payload = json!({ "timesheet": { "hours": 4, "rate": 20, "date": 6 } });
    let (status, body) =
      send(&app, "PUT", "/api/employees/1/timesheets/1", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse(&body)["timesheet"]["hours"], 4.0);

    let (status, body) = send(&app, "DELETE", "/api/employees/1/timesheets/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (status, body) = send(&app, "DELETE", "/api/employees/1/timesheets/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "timesheet not found");
  }

  #[tokio::test]
  async fn timesheet_under_unknown_employee_is_404_before_validation() {
    let app = app().await;
    let (status, body) =
      send(&app, "POST", "/api/employees/3/timesheets", Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Employee not found");
  }

  #[tokio::test]
  async fn timesheet_missing_hours_is_400() {
    let app = app().await;
    send(&app, "POST", "/api/employees", Some(ada())).await;
    let payload = json!({ "timesheet": { "rate": 20, "date": 5 } });
    let (status, _) = send(&app, "POST", "/api/employees/1/timesheets", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
  }

  #[tokio::test]
  async fn rejected_timesheet_writes_nothing() {
    let app = app().await;
    send(&app, "POST", "/api/employees", Some(ada())).await;

    let payload = json!({ "timesheet": { "rate": 20, "date": 5 } });
    let (status, body) =
      send(&app, "POST", "/api/employees/1/timesheets", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "missing fields");
    let (_, body) = send(&app, "GET", "/api/employees/1/timesheets", None).await;
    assert_eq!(parse(&body), json!({ "timesheets": [] }));

    let payload = json!({ "timesheet": { "hours": 8, "rate": 20, "date": 5 } });
    let (_, body) = send(&app, "POST", "/api/employees/1/timesheets", Some(payload)).await;
    let original = parse(&body)["timesheet"].clone();

    let payload = json!({ "timesheet": { "hours": 2, "rate": 20 } });
    let (status, _) =
      send(&app, "PUT", "/api/employees/1/timesheets/1", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (_, body) = send(&app, "GET", "/api/employees/1/timesheets", None).await;
    assert_eq!(parse(&body), json!({ "timesheets": [original] }));
  }

  #[tokio::test]
  async fn single_timesheet_is_readable() {
    let app = app().await;
    send(&app, "POST", "/api/employees", Some(ada())).await;
    let payload = json!({ "timesheet": { "hours": 7.5, "rate": 20, "date": 5 } });
    send(&app, "POST", "/api/employees/1/timesheets", Some(payload)).await;

    let (status, body) = send(&app, "GET", "/api/employees/1/timesheets/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse(&body), json!({ "timesheet": {
      "id": 1, "hours": 7.5, "rate": 20.0, "date": 5, "employee_id": 1
    } }));
  }

  #[tokio::test]
  async fn timesheet_of_another_employee_is_404() {
    let app = app().await;
    send(&app, "POST", "/api/employees", Some(ada())).await;
    send(&app, "POST", "/api/employees", Some(ada())).await;
    let payload = json!({ "timesheet": { "hours": 8, "rate": 20, "date": 5 } });
    send(&app, "POST", "/api/employees/1/timesheets", Some(payload.clone())).await;

    let (status, body) = send(&app, "GET", "/api/employees/2/timesheets/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "timesheet not found");

    let (status, _) =
      send(&app, "PUT", "/api/employees/2/timesheets/1", Some(payload)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/api/employees/2/timesheets/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "GET", "/api/employees/1/timesheets/1", None).await;
    assert_eq!(status, StatusCode::OK);
  }

  // ── Menus ───────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn menu_delete_scenario() {
    let app = app().await;

    let (status, body) =
      send(&app, "POST", "/api/menus", Some(json!({ "menu": { "title": "Lunch" } }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(parse(&body), json!({ "menu": { "id": 1, "title": "Lunch" } }));

    let (status, body) = send(&app, "POST", "/api/menus/1/menu-items", Some(soup())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(parse(&body)["menuItem"]["menu_id"], 1);

    let (status, body) = send(&app, "DELETE", "/api/menus/1", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "menu has items in it");

    let (status, _) = send(&app, "GET", "/api/menus/1", None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = send(&app, "GET", "/api/menus/1/menu-items", None).await;
    assert_eq!(parse(&body)["menuItems"].as_array().unwrap().len(), 1);

    let (status, _) = send(&app, "DELETE", "/api/menus/1/menu-items/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, "DELETE", "/api/menus/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (status, body) = send(&app, "GET", "/api/menus/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "menu not found");
  }

  #[tokio::test]
  async fn menu_update_and_list() {
    let app = app().await;
    send(&app, "POST", "/api/menus", Some(json!({ "menu": { "title": "Lunch" } }))).await;

    let (status, body) =
      send(&app, "PUT", "/api/menus/1", Some(json!({ "menu": { "title": "Brunch" } }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse(&body)["menu"]["title"], "Brunch");

    let (status, _) =
      send(&app, "PUT", "/api/menus/1", Some(json!({ "menu": { "title": "" } }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send(&app, "GET", "/api/menus", None).await;
    assert_eq!(parse(&body), json!({ "menus": [{ "id": 1, "title": "Brunch" }] }));
  }

  // ── Menu items ──────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn menu_item_keeps_menu_and_accepts_zero_inventory() {
    let app = app().await;
    send(&app, "POST", "/api/menus", Some(json!({ "menu": { "title": "Lunch" } }))).await;
    send(&app, "POST", "/api/menus", Some(json!({ "menu": { "title": "Dinner" } }))).await;
    send(&app, "POST", "/api/menus/1/menu-items", Some(soup())).await;

    let payload = json!({ "menuItem": {
      "name": "Soup", "description": "Tomato", "inventory": 0, "price": 5.5, "menu_id": 2
    } });
    let (status, body) = send(&app, "PUT", "/api/menus/1/menu-items/1", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    let item = parse(&body)["menuItem"].clone();
    assert_eq!(item["inventory"], 0);
    assert_eq!(item["menu_id"], 1);
  }

  #[tokio::test]
  async fn rejected_menu_item_writes_nothing() {
    let app = app().await;
    send(&app, "POST", "/api/menus", Some(json!({ "menu": { "title": "Lunch" } }))).await;

    let payload =
      json!({ "menuItem": { "name": "Soup", "description": "Tomato", "price": 5.5 } });
    let (status, body) = send(&app, "POST", "/api/menus/1/menu-items", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "missing fields");
    let (_, body) = send(&app, "GET", "/api/menus/1/menu-items", None).await;
    assert_eq!(parse(&body), json!({ "menuItems": [] }));

    let (_, body) = send(&app, "POST", "/api/menus/1/menu-items", Some(soup())).await;
    let original = parse(&body)["menuItem"].clone();

    let payload = json!({ "menuItem": { "name": "Stew", "inventory": 3, "price": 7 } });
    let (status, _) = send(&app, "PUT", "/api/menus/1/menu-items/1", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (_, body) = send(&app, "GET", "/api/menus/1/menu-items/1", None).await;
    assert_eq!(parse(&body)["menuItem"], original);
  }

  #[tokio::test]
  async fn single_menu_item_is_readable() {
    let app = app().await;
    send(&app, "POST", "/api/menus", Some(json!({ "menu": { "title": "Lunch" } }))).await;
    send(&app, "POST", "/api/menus/1/menu-items", Some(soup())).await;

    let (status, body) = send(&app, "GET", "/api/menus/1/menu-items/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse(&body), json!({ "menuItem": {
      "id": 1, "name": "Soup", "description": "Tomato",
      "inventory": 10, "price": 5.5, "menu_id": 1
    } }));
  }

  #[tokio::test]
  async fn menu_item_of_another_menu_is_404() {
    let app = app().await;
    send(&app, "POST", "/api/menus", Some(json!({ "menu": { "title": "Lunch" } }))).await;
    send(&app, "POST", "/api/menus", Some(json!({ "menu": { "title": "Dinner" } }))).await;
    send(&app, "POST", "/api/menus/1/menu-items", Some(soup())).await;

    let (status, body) = send(&app, "GET", "/api/menus/2/menu-items/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "menu item not found");

    let (status, _) = send(&app, "PUT", "/api/menus/2/menu-items/1", Some(soup())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/api/menus/2/menu-items/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, "GET", "/api/menus/1/menu-items", None).await;
    assert_eq!(parse(&body)["menuItems"].as_array().unwrap().len(), 1);
  }

  #[tokio::test]
  async fn menu_item_under_unknown_menu_is_404() {
    let app = app().await;
    let (status, body) = send(&app, "POST", "/api/menus/5/menu-items", Some(soup())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "menu not found");
  }

  #[tokio::test]
  async fn unknown_menu_item_is_404() {
    let app = app().await;
    send(&app, "POST", "/api/menus", Some(json!({ "menu": { "title": "Lunch" } }))).await;
    let (status, body) = send(&app, "DELETE", "/api/menus/1/menu-items/8", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "menu item not found");
  }
}
