//! Shared Axum plumbing: application state and the system routes.

mod health;
pub mod router;
mod site;
mod state;

pub use state::{ApiState, ApiStateBuilder, ApiStateError, ApiStateInner};
