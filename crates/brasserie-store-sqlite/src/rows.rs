//! Row decoding and single-row lookups shared by the store methods.
//!
//! The lookups take a plain [`rusqlite::Connection`] so they can run inside
//! the same `call` closure as the write they follow.

use brasserie_core::{
  Id,
  employee::Employee,
  menu::{Menu, MenuItem},
  timesheet::Timesheet,
};
use rusqlite::{Connection, Row, params};

// ─── Decoders ────────────────────────────────────────────────────────────────

pub fn employee(row: &Row<'_>) -> rusqlite::Result<Employee> {
  Ok(Employee {
    id:                  row.get(0)?,
    name:                row.get(1)?,
    position:            row.get(2)?,
    wage:                row.get(3)?,
    is_current_employee: row.get(4)?,
  })
}

pub fn timesheet(row: &Row<'_>) -> rusqlite::Result<Timesheet> {
  Ok(Timesheet {
    id:          row.get(0)?,
    hours:       row.get(1)?,
    rate:        row.get(2)?,
    date:        row.get(3)?,
    employee_id: row.get(4)?,
  })
}

pub fn menu(row: &Row<'_>) -> rusqlite::Result<Menu> {
  Ok(Menu { id: row.get(0)?, title: row.get(1)? })
}

pub fn menu_item(row: &Row<'_>) -> rusqlite::Result<MenuItem> {
  Ok(MenuItem {
    id:          row.get(0)?,
    name:        row.get(1)?,
    description: row.get(2)?,
    inventory:   row.get(3)?,
    price:       row.get(4)?,
    menu_id:     row.get(5)?,
  })
}

// ─── Lookups by primary key ──────────────────────────────────────────────────
//
// These fail with `QueryReturnedNoRows` when the id is absent; callers that
// expect absence wrap them in `.optional()`.

pub fn fetch_employee(conn: &Connection, id: Id) -> rusqlite::Result<Employee> {
  conn.query_row(
    "SELECT id, name, position, wage, is_current_employee FROM Employee WHERE id = ?1",
    params![id],
    employee,
  )
}

pub fn fetch_timesheet(conn: &Connection, id: Id) -> rusqlite::Result<Timesheet> {
  conn.query_row(
    "SELECT id, hours, rate, date, employee_id FROM Timesheet WHERE id = ?1",
    params![id],
    timesheet,
  )
}

pub fn fetch_menu(conn: &Connection, id: Id) -> rusqlite::Result<Menu> {
  conn.query_row("SELECT id, title FROM Menu WHERE id = ?1", params![id], menu)
}

pub fn fetch_menu_item(conn: &Connection, id: Id) -> rusqlite::Result<MenuItem> {
  conn.query_row(
    "SELECT id, name, description, inventory, price, menu_id FROM MenuItem WHERE id = ?1",
    params![id],
    menu_item,
  )
}
