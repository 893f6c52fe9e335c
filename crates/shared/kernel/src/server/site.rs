use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use recruit_derive::api_handler;
use recruit_domain::config::ApiConfig;
use recruit_domain::constants::SYSTEM_TAG;

/// Announcement text and social links, as loaded at startup.
#[api_handler(
    get,
    path = "/api/site",
    responses((status = OK, description = "Static site content (announcement, social links)")),
    tag = SYSTEM_TAG,
)]
pub(super) async fn site_handler(State(config): State<ApiConfig>) -> impl IntoResponse {
    Json(config.site.clone())
}
