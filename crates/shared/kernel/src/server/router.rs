use super::{ApiState, health, site};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// `/health` and `/api/site`.
pub fn system_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(health::health_handler)).routes(routes!(site::site_handler))
}
