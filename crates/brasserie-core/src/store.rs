//! The `RestaurantStore` trait.
//!
//! Implemented by storage backends (e.g. `brasserie-store-sqlite`). The HTTP
//! layer depends on this abstraction, not on any concrete backend.
//!
//! Writes return the row as re-read after the statement, so callers see any
//! store-assigned values (generated ids, column defaults). Methods addressing a
//! row by id return `None` when the row does not exist.

use std::future::Future;

use crate::{
  Id,
  employee::{Employee, NewEmployee},
  menu::{Menu, MenuDeletion, MenuItem, NewMenu, NewMenuItem},
  timesheet::{NewTimesheet, Timesheet},
};

/// Abstraction over a Brasserie store backend.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait RestaurantStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Employees ─────────────────────────────────────────────────────────

  /// Employees whose `is_current_employee` flag is set.
  fn list_current_employees(
    &self,
  ) -> impl Future<Output = Result<Vec<Employee>, Self::Error>> + Send + '_;

  /// Fetch an employee by id, including former employees.
  fn get_employee(
    &self,
    id: Id,
  ) -> impl Future<Output = Result<Option<Employee>, Self::Error>> + Send + '_;

  /// Insert an employee. New employees are always current.
  fn create_employee(
    &self,
    input: NewEmployee,
  ) -> impl Future<Output = Result<Employee, Self::Error>> + Send + '_;

  /// Overwrite name, position and wage.
  fn update_employee(
    &self,
    id: Id,
    input: NewEmployee,
  ) -> impl Future<Output = Result<Option<Employee>, Self::Error>> + Send + '_;

  /// Soft delete: clear `is_current_employee` and return the row.
  fn retire_employee(
    &self,
    id: Id,
  ) -> impl Future<Output = Result<Option<Employee>, Self::Error>> + Send + '_;

  // ── Timesheets ────────────────────────────────────────────────────────

  fn list_timesheets(
    &self,
    employee_id: Id,
  ) -> impl Future<Output = Result<Vec<Timesheet>, Self::Error>> + Send + '_;

  fn get_timesheet(
    &self,
    id: Id,
  ) -> impl Future<Output = Result<Option<Timesheet>, Self::Error>> + Send + '_;

  fn create_timesheet(
    &self,
    employee_id: Id,
    input: NewTimesheet,
  ) -> impl Future<Output = Result<Timesheet, Self::Error>> + Send + '_;

  /// Overwrite hours, rate and date. The owning employee never changes.
  fn update_timesheet(
    &self,
    id: Id,
    input: NewTimesheet,
  ) -> impl Future<Output = Result<Option<Timesheet>, Self::Error>> + Send + '_;

  /// Hard delete. Returns `false` if no row matched.
  fn delete_timesheet(
    &self,
    id: Id,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Menus ─────────────────────────────────────────────────────────────

  fn list_menus(&self) -> impl Future<Output = Result<Vec<Menu>, Self::Error>> + Send + '_;

  fn get_menu(
    &self,
    id: Id,
  ) -> impl Future<Output = Result<Option<Menu>, Self::Error>> + Send + '_;

  fn create_menu(
    &self,
    input: NewMenu,
  ) -> impl Future<Output = Result<Menu, Self::Error>> + Send + '_;

  fn update_menu(
    &self,
    id: Id,
    input: NewMenu,
  ) -> impl Future<Output = Result<Option<Menu>, Self::Error>> + Send + '_;

  /// Hard delete a menu, refusing while any menu item still references it.
  ///
  /// The item check and the delete must be atomic with respect to other
  /// writers.
  fn delete_menu(
    &self,
    id: Id,
  ) -> impl Future<Output = Result<MenuDeletion, Self::Error>> + Send + '_;

  // ── Menu items ────────────────────────────────────────────────────────

  fn list_menu_items(
    &self,
    menu_id: Id,
  ) -> impl Future<Output = Result<Vec<MenuItem>, Self::Error>> + Send + '_;

  fn get_menu_item(
    &self,
    id: Id,
  ) -> impl Future<Output = Result<Option<MenuItem>, Self::Error>> + Send + '_;

  fn create_menu_item(
    &self,
    menu_id: Id,
    input: NewMenuItem,
  ) -> impl Future<Output = Result<MenuItem, Self::Error>> + Send + '_;

  /// Overwrite name, description, inventory and price. The menu never changes.
  fn update_menu_item(
    &self,
    id: Id,
    input: NewMenuItem,
  ) -> impl Future<Output = Result<Option<MenuItem>, Self::Error>> + Send + '_;

  fn delete_menu_item(
    &self,
    id: Id,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
