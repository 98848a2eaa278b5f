//! Timesheets — hours worked by an employee on a given date.

use serde::{Deserialize, Serialize};

use crate::Id;

/// A persisted timesheet row. `employee_id` is fixed at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timesheet {
  pub id:          Id,
  pub hours:       f64,
  pub rate:        f64,
  /// Milliseconds since the Unix epoch.
  pub date:        i64,
  pub employee_id: Id,
}

/// Validated input for creating or replacing a timesheet.
///
/// Carries no `employee_id`: the owner always comes from the request path.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTimesheet {
  pub hours: f64,
  pub rate:  f64,
  pub date:  i64,
}
