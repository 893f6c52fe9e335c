#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Attribute macros shared by every crate in the workspace: error enums with
//! attachable context, camelCase API models, documented Axum handlers, feature
//! slice handles and the runtime bootstrap for binaries.
//!
//! Examples are `ignore`d here because a proc-macro crate cannot use its own
//! macros; the consuming crates exercise them in their tests.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Turns an `async fn main` into a blocking `fn main` driven by a tuned Tokio runtime.
///
/// Accepted profiles: `high_performance`, `memory_efficient`, `default` (or nothing).
/// The function must return a `Result`.
///
/// ```rust,ignore
/// #[recruit_runtime::main(high_performance)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Marks a struct as a wire-level API model.
///
/// * Adds `Debug`, `Serialize` and `Deserialize` when they are not derived already.
/// * Adds `utoipa::ToSchema` behind the consumer's `server` feature.
/// * Applies `#[serde(rename_all = "camelCase")]` unless `rename_all = "..."` overrides it.
/// * Applies `#[serde(deny_unknown_fields)]` unless `deny_unknown_fields = false`.
///
/// ```rust,ignore
/// #[api_model(deny_unknown_fields = false)]
/// pub struct IncomingRegistration {
///     pub full_name: Option<String>,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Wraps an Axum handler and registers it with `utoipa::path` when the
/// consumer's `server` feature is enabled.
///
/// ```rust,ignore
/// #[api_handler(post, path = "/api/register", responses((status = OK)), tag = "Registration")]
/// pub async fn register_handler() -> impl IntoResponse { StatusCode::OK }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Defines a crate error enum.
///
/// The enum gets `Debug` and `thiserror::Error`, plus:
///
/// * a `<Name>Ext` trait with `.context(..)` for `Result<T, Name>` and for
///   `Result<T, Source>` of every variant holding a `source` field;
/// * `From<Source>` for those variants so `?` works on upstream errors;
/// * `From<&'static str>` / `From<String>` when an `Internal` variant exists;
/// * a private `format_context` helper for the `#[error(..)]` strings.
///
/// Every variant must use named fields. Variants with a source must also carry
/// `context: Option<Cow<'static, str>>`.
///
/// ```rust,ignore
/// #[recruit_error]
/// pub enum ConfigError {
///     #[error("Config error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn recruit_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Turns a struct into a feature slice handle.
///
/// The struct body becomes `<Name>Inner`; `<Name>` wraps it in an `Arc`, derefs to it
/// and implements `recruit_kernel::domain::registry::FeatureSlice`.
///
/// ```rust,ignore
/// #[recruit_derive::recruit_slice]
/// pub struct Registration {
///     pub upstream: UpstreamClient,
/// }
/// ```
#[proc_macro_attribute]
pub fn recruit_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
