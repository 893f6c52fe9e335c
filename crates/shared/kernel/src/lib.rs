//! Kernel utilities shared across slices.
//! Keep this crate lightweight: layered config loading, and with the `server`
//! feature the shared [`server::ApiState`] plus the system routes.
//!
//! ## Config loading
//! ```rust,ignore
//! use recruit_kernel::config::load_config;
//! use recruit_kernel::domain::config::ApiConfig;
//!
//! let cfg: ApiConfig = load_config(Some("server.toml"))?;
//! ```

pub mod config;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;

pub use recruit_domain as domain;
