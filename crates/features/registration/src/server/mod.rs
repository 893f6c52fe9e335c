//! `POST /api/register`: validate, reshape, forward.

mod handler;
mod response;
pub mod upstream;

use recruit_kernel::server::ApiState;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

pub use upstream::{UpstreamClient, UpstreamRegistration};

/// Routes of the registration slice.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(handler::register_handler))
}
