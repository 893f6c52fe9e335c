//! # Domain Models
//!
//! Pure data for the registration flow: the closed field/department/year enums,
//! the draft, the fixed step table, the constraint table both validators are
//! compiled from, and configuration structs.
//! Keep it lean: no I/O, networking, or heavy logic, just data and simple helpers.

pub mod config;
pub mod constants;
pub mod registration;
pub mod registry;
pub mod rules;
pub mod steps;
