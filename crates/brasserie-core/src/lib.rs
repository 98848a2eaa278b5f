//! Core types and trait definitions for the Brasserie back office.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it.

pub mod employee;
pub mod error;
pub mod menu;
pub mod store;
pub mod timesheet;
pub mod validate;

pub use error::{Error, Result};

/// Primary key of every table. SQLite rowids are signed 64-bit integers.
pub type Id = i64;
