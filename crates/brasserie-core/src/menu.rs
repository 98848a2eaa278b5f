//! Menus and the items listed on them.

use serde::{Deserialize, Serialize};

use crate::Id;

/// A persisted menu row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
  pub id:    Id,
  pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMenu {
  pub title: String,
}

/// A persisted menu item row. `menu_id` is fixed at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
  pub id:          Id,
  pub name:        String,
  pub description: String,
  pub inventory:   i64,
  pub price:       f64,
  pub menu_id:     Id,
}

/// Validated input for creating or replacing a menu item.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMenuItem {
  pub name:        String,
  pub description: String,
  pub inventory:   i64,
  pub price:       f64,
}

/// Outcome of [`RestaurantStore::delete_menu`](crate::store::RestaurantStore::delete_menu).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuDeletion {
  Deleted,
  /// The menu still has items; nothing was removed.
  HasItems,
  NotFound,
}
