//! Employees and their soft-deletion flag.

use serde::{Deserialize, Serialize};

use crate::Id;

/// A persisted employee row.
///
/// Employees are never removed from the store. "Deleting" one clears
/// `is_current_employee`, which hides it from listings but keeps it
/// addressable by id so its timesheets stay attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
  pub id:                  Id,
  pub name:                String,
  pub position:            String,
  pub wage:                f64,
  pub is_current_employee: bool,
}

/// Validated input for creating or replacing an employee.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
  pub name:     String,
  pub position: String,
  pub wage:     f64,
}
