//! Wire-level constants shared by the proxy, the gateway and the docs.

/// OpenAPI tag for system routes.
pub const SYSTEM_TAG: &str = "System";
/// OpenAPI tag for the registration proxy.
pub const REGISTRATION_TAG: &str = "Registration";

/// Route the proxy endpoint is mounted on.
pub const REGISTER_ROUTE: &str = "/api/register";

/// Pseudo field name used when the request body itself cannot be parsed.
pub const BODY_FIELD: &str = "body";
