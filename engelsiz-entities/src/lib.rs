#![deny(missing_debug_implementations)]

//! # engelsiz-entities
//!
//! Reusable, agnostic domain entities for the Engelsiz obstacle map.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod address;
pub mod email;
pub mod geo;
pub mod id;
pub mod password;
pub mod report;
pub mod section;
pub mod time;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
