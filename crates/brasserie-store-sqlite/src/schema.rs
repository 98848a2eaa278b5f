//! SQL schema for the Brasserie SQLite store.
//!
//! Executed once at connection startup and gated on `PRAGMA user_version`.
//! Table names match the databases created by earlier deployments. Those files
//! carry `user_version = 0` and a `MenuItem` table whose `id` column was
//! declared `INTERGER PRIMARY KEY`, which is not a rowid alias, so inserted
//! items got a NULL id. [`apply`] rebuilds that table when it finds one.

use rusqlite::{Connection, OptionalExtension as _};

/// Schema version written to `PRAGMA user_version`.
pub const SCHEMA_VERSION: i64 = 1;

/// Connection settings. Kept apart from [`SCHEMA`] because `journal_mode`
/// cannot change inside a transaction.
pub const PRAGMAS: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;
";

/// Table DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
-- Employees are never deleted; is_current_employee = 0 marks a former one.
CREATE TABLE IF NOT EXISTS Employee (
    id                  INTEGER PRIMARY KEY,
    name                TEXT    NOT NULL,
    position            TEXT    NOT NULL,
    wage                REAL    NOT NULL,
    is_current_employee INTEGER NOT NULL DEFAULT 1
);

CREATE TABLE IF NOT EXISTS Timesheet (
    id          INTEGER PRIMARY KEY,
    hours       REAL    NOT NULL,
    rate        REAL    NOT NULL,
    date        INTEGER NOT NULL,   -- milliseconds since the Unix epoch
    employee_id INTEGER NOT NULL REFERENCES Employee(id)
);

CREATE TABLE IF NOT EXISTS Menu (
    id    INTEGER PRIMARY KEY,
    title TEXT    NOT NULL
);

CREATE TABLE IF NOT EXISTS MenuItem (
    id          INTEGER PRIMARY KEY,
    name        TEXT    NOT NULL,
    description TEXT    NOT NULL,
    inventory   INTEGER NOT NULL,
    price       REAL    NOT NULL,
    menu_id     INTEGER NOT NULL REFERENCES Menu(id)
);

CREATE INDEX IF NOT EXISTS timesheet_employee_idx ON Timesheet(employee_id);
CREATE INDEX IF NOT EXISTS menu_item_menu_idx     ON MenuItem(menu_id);
";

/// Whether `MenuItem.id` exists but is not a rowid alias.
fn has_legacy_menu_items(conn: &Connection) -> rusqlite::Result<bool> {
  let id_column: Option<(String, i64)> = conn
    .query_row(
      "SELECT type, pk FROM pragma_table_info('MenuItem') WHERE name = 'id'",
      [],
      |r| Ok((r.get(0)?, r.get(1)?)),
    )
    .optional()?;
  Ok(matches!(id_column, Some((ty, pk)) if !(ty.eq_ignore_ascii_case("INTEGER") && pk == 1)))
}

/// Create or upgrade the schema inside one transaction.
///
/// Returns the number of menu items copied out of a legacy table.
pub fn apply(conn: &mut Connection) -> rusqlite::Result<usize> {
  let tx = conn.transaction()?;

  let legacy = has_legacy_menu_items(&tx)?;
  if legacy {
    tx.execute_batch("ALTER TABLE MenuItem RENAME TO MenuItem_legacy;")?;
  }
  tx.execute_batch(SCHEMA)?;
  let copied = if legacy { copy_legacy_menu_items(&tx)? } else { 0 };

  tx.pragma_update(None, "user_version", SCHEMA_VERSION)?;
  tx.commit()?;
  Ok(copied)
}

/// Move rows from the renamed legacy table into the new `MenuItem`, giving
/// each row `id = rowid`.
fn copy_legacy_menu_items(conn: &Connection) -> rusqlite::Result<usize> {
  let copied = conn.execute(
    "INSERT INTO MenuItem (id, name, description, inventory, price, menu_id)
     SELECT rowid, name, COALESCE(description, ''), inventory, price, menu_id
     FROM MenuItem_legacy
     ORDER BY rowid",
    [],
  )?;
  conn.execute_batch("DROP TABLE MenuItem_legacy;")?;
  Ok(copied)
}
