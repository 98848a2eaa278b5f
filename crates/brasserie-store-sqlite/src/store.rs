//! [`SqliteStore`] — the SQLite implementation of [`RestaurantStore`].

use std::path::Path;

use brasserie_core::{
  Id,
  employee::{Employee, NewEmployee},
  menu::{Menu, MenuDeletion, MenuItem, NewMenu, NewMenuItem},
  store::RestaurantStore,
  timesheet::{NewTimesheet, Timesheet},
};
use rusqlite::{OptionalExtension as _, TransactionBehavior, params};

use crate::{
  Error, Result,
  rows::{self, fetch_employee, fetch_menu, fetch_menu_item, fetch_timesheet},
  schema::{self, PRAGMAS, SCHEMA_VERSION},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Brasserie store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. Every
/// statement runs on the connection's own thread, so statements from
/// concurrent requests are serialised.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    tracing::debug!(path = %path.display(), "opened sqlite store");
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Close the underlying connection, flushing outstanding statements.
  pub async fn close(self) -> Result<()> {
    self.conn.close().await?;
    Ok(())
  }

  async fn init_schema(&self) -> Result<()> {
    let version: i64 = self
      .conn
      .call(|conn| {
        conn.execute_batch(PRAGMAS)?;
        Ok(conn.query_row("PRAGMA user_version", [], |r| r.get(0))?)
      })
      .await?;
    if version > SCHEMA_VERSION {
      return Err(Error::UnsupportedSchemaVersion(version));
    }

    let copied = self
      .conn
      .call(|conn| Ok(schema::apply(conn)?))
      .await?;
    if copied > 0 {
      tracing::info!(copied, "rebuilt legacy MenuItem table");
    }
    Ok(())
  }
}

// ─── RestaurantStore impl ────────────────────────────────────────────────────

impl RestaurantStore for SqliteStore {
  type Error = Error;

  // ── Employees ─────────────────────────────────────────────────────────────

  async fn list_current_employees(&self) -> Result<Vec<Employee>> {
    let employees = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, name, position, wage, is_current_employee
           FROM Employee
           WHERE is_current_employee = 1
           ORDER BY id",
        )?;
        let rows = stmt
          .query_map([], rows::employee)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(employees)
  }

  async fn get_employee(&self, id: Id) -> Result<Option<Employee>> {
    let employee = self
      .conn
      .call(move |conn| Ok(fetch_employee(conn, id).optional()?))
      .await?;
    Ok(employee)
  }

  async fn create_employee(&self, input: NewEmployee) -> Result<Employee> {
    let employee = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO Employee (name, position, wage) VALUES (?1, ?2, ?3)",
          params![input.name, input.position, input.wage],
        )?;
        let id = conn.last_insert_rowid();
        Ok(fetch_employee(conn, id)?)
      })
      .await?;
    Ok(employee)
  }

  async fn update_employee(&self, id: Id, input: NewEmployee) -> Result<Option<Employee>> {
    let employee = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          "UPDATE Employee SET name = ?1, position = ?2, wage = ?3 WHERE id = ?4",
          params![input.name, input.position, input.wage, id],
        )?;
        if changed == 0 {
          return Ok(None);
        }
        Ok(Some(fetch_employee(conn, id)?))
      })
      .await?;
    Ok(employee)
  }

  async fn retire_employee(&self, id: Id) -> Result<Option<Employee>> {
    let employee = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          "UPDATE Employee SET is_current_employee = 0 WHERE id = ?1",
          params![id],
        )?;
        if changed == 0 {
          return Ok(None);
        }
        Ok(Some(fetch_employee(conn, id)?))
      })
      .await?;
    Ok(employee)
  }

  // ── Timesheets ────────────────────────────────────────────────────────────

  async fn list_timesheets(&self, employee_id: Id) -> Result<Vec<Timesheet>> {
    let timesheets = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT id, hours, rate, date, employee_id
           FROM Timesheet
           WHERE employee_id = ?1
           ORDER BY id",
        )?;
        let rows = stmt
          .query_map(params![employee_id], rows::timesheet)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(timesheets)
  }

  async fn get_timesheet(&self, id: Id) -> Result<Option<Timesheet>> {
    let timesheet = self
      .conn
      .call(move |conn| Ok(fetch_timesheet(conn, id).optional()?))
      .await?;
    Ok(timesheet)
  }

  async fn create_timesheet(&self, employee_id: Id, input: NewTimesheet) -> Result<Timesheet> {
    let timesheet = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO Timesheet (hours, rate, date, employee_id) VALUES (?1, ?2, ?3, ?4)",
          params![input.hours, input.rate, input.date, employee_id],
        )?;
        let id = conn.last_insert_rowid();
        Ok(fetch_timesheet(conn, id)?)
      })
      .await?;
    Ok(timesheet)
  }

  async fn update_timesheet(&self, id: Id, input: NewTimesheet) -> Result<Option<Timesheet>> {
    let timesheet = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          "UPDATE Timesheet SET hours = ?1, rate = ?2, date = ?3 WHERE id = ?4",
          params![input.hours, input.rate, input.date, id],
        )?;
        if changed == 0 {
          return Ok(None);
        }
        Ok(Some(fetch_timesheet(conn, id)?))
      })
      .await?;
    Ok(timesheet)
  }

  async fn delete_timesheet(&self, id: Id) -> Result<bool> {
    let deleted = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM Timesheet WHERE id = ?1", params![id])? > 0)
      })
      .await?;
    Ok(deleted)
  }

  // ── Menus ─────────────────────────────────────────────────────────────────

  async fn list_menus(&self) -> Result<Vec<Menu>> {
    let menus = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare("SELECT id, title FROM Menu ORDER BY id")?;
        let rows = stmt
          .query_map([], rows::menu)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(menus)
  }

  async fn get_menu(&self, id: Id) -> Result<Option<Menu>> {
    let menu = self
      .conn
      .call(move |conn| Ok(fetch_menu(conn, id).optional()?))
      .await?;
    Ok(menu)
  }

  async fn create_menu(&self, input: NewMenu) -> Result<Menu> {
    let menu = self
      .conn
      .call(move |conn| {
        conn.execute("INSERT INTO Menu (title) VALUES (?1)", params![input.title])?;
        let id = conn.last_insert_rowid();
        Ok(fetch_menu(conn, id)?)
      })
      .await?;
    Ok(menu)
  }

  async fn update_menu(&self, id: Id, input: NewMenu) -> Result<Option<Menu>> {
    let menu = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          "UPDATE Menu SET title = ?1 WHERE id = ?2",
          params![input.title, id],
        )?;
        if changed == 0 {
          return Ok(None);
        }
        Ok(Some(fetch_menu(conn, id)?))
      })
      .await?;
    Ok(menu)
  }

  async fn delete_menu(&self, id: Id) -> Result<MenuDeletion> {
    let outcome = self
      .conn
      .call(move |conn| {
        // IMMEDIATE takes the write lock up front so no item can be inserted
        // between the check and the delete.
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let exists: bool = tx.query_row(
          "SELECT EXISTS (SELECT 1 FROM Menu WHERE id = ?1)",
          params![id],
          |r| r.get(0),
        )?;
        if !exists {
          return Ok(MenuDeletion::NotFound);
        }

        let has_items: bool = tx.query_row(
          "SELECT EXISTS (SELECT 1 FROM MenuItem WHERE menu_id = ?1)",
          params![id],
          |r| r.get(0),
        )?;
        if has_items {
          return Ok(MenuDeletion::HasItems);
        }

        tx.execute("DELETE FROM Menu WHERE id = ?1", params![id])?;
        tx.commit()?;
        Ok(MenuDeletion::Deleted)
      })
      .await?;
    Ok(outcome)
  }

  // ── Menu items ────────────────────────────────────────────────────────────

  async fn list_menu_items(&self, menu_id: Id) -> Result<Vec<MenuItem>> {
    let items = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT id, name, description, inventory, price, menu_id
           FROM MenuItem
           WHERE menu_id = ?1
           ORDER BY id",
        )?;
        let rows = stmt
          .query_map(params![menu_id], rows::menu_item)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(items)
  }

  async fn get_menu_item(&self, id: Id) -> Result<Option<MenuItem>> {
    let item = self
      .conn
      .call(move |conn| Ok(fetch_menu_item(conn, id).optional()?))
      .await?;
    Ok(item)
  }

  async fn create_menu_item(&self, menu_id: Id, input: NewMenuItem) -> Result<MenuItem> {
    let item = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO MenuItem (name, description, inventory, price, menu_id)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          params![input.name, input.description, input.inventory, input.price, menu_id],
        )?;
        let id = conn.last_insert_rowid();
        Ok(fetch_menu_item(conn, id)?)
      })
      .await?;
    Ok(item)
  }

  async fn update_menu_item(&self, id: Id, input: NewMenuItem) -> Result<Option<MenuItem>> {
    let item = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          "UPDATE MenuItem
           SET name = ?1, description = ?2, inventory = ?3, price = ?4
           WHERE id = ?5",
          params![input.name, input.description, input.inventory, input.price, id],
        )?;
        if changed == 0 {
          return Ok(None);
        }
        Ok(Some(fetch_menu_item(conn, id)?))
      })
      .await?;
    Ok(item)
  }

  async fn delete_menu_item(&self, id: Id) -> Result<bool> {
    let deleted = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM MenuItem WHERE id = ?1", params![id])? > 0)
      })
      .await?;
    Ok(deleted)
  }
}
