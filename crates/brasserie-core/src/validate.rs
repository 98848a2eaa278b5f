//! Drafts — unvalidated request payloads — and their required-field checks.
//!
//! Every draft field is optional so a payload with missing fields still
//! deserialises; [`validate`](EmployeeDraft::validate) then decides. A field
//! counts as missing when it is absent, `null`, or blank text. Numeric zero is
//! a legitimate value (an unpaid volunteer, an item that is out of stock).
//!
//! Unknown fields are ignored, so an `employee_id` or `menu_id` smuggled into
//! a child payload never reaches the store.

use serde::Deserialize;

use crate::{
  Error, Result,
  employee::NewEmployee,
  menu::{NewMenu, NewMenuItem},
  timesheet::NewTimesheet,
};

fn text(resource: &'static str, field: &'static str, value: Option<String>) -> Result<String> {
  match value {
    Some(v) if !v.trim().is_empty() => Ok(v),
    _ => Err(Error::MissingField { resource, field }),
  }
}

fn number<T>(resource: &'static str, field: &'static str, value: Option<T>) -> Result<T> {
  value.ok_or(Error::MissingField { resource, field })
}

// ─── Employee ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EmployeeDraft {
  pub name:     Option<String>,
  pub position: Option<String>,
  pub wage:     Option<f64>,
}

impl EmployeeDraft {
  pub fn validate(self) -> Result<NewEmployee> {
    Ok(NewEmployee {
      name:     text("employee", "name", self.name)?,
      position: text("employee", "position", self.position)?,
      wage:     number("employee", "wage", self.wage)?,
    })
  }
}

// ─── Timesheet ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TimesheetDraft {
  pub hours: Option<f64>,
  pub rate:  Option<f64>,
  pub date:  Option<i64>,
}

impl TimesheetDraft {
  pub fn validate(self) -> Result<NewTimesheet> {
    Ok(NewTimesheet {
      hours: number("timesheet", "hours", self.hours)?,
      rate:  number("timesheet", "rate", self.rate)?,
      date:  number("timesheet", "date", self.date)?,
    })
  }
}

// ─── Menu ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MenuDraft {
  pub title: Option<String>,
}

impl MenuDraft {
  pub fn validate(self) -> Result<NewMenu> {
    Ok(NewMenu { title: text("menu", "title", self.title)? })
  }
}

// ─── Menu item ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MenuItemDraft {
  pub name:        Option<String>,
  pub description: Option<String>,
  pub inventory:   Option<i64>,
  pub price:       Option<f64>,
}

impl MenuItemDraft {
  pub fn validate(self) -> Result<NewMenuItem> {
    Ok(NewMenuItem {
      name:        text("menuItem", "name", self.name)?,
      description: text("menuItem", "description", self.description)?,
      inventory:   number("menuItem", "inventory", self.inventory)?,
      price:       number("menuItem", "price", self.price)?,
    })
  }
}
