use crate::{json_response, ApiResponse, AppState};
use aws_lambda_events::apigw::ApiGatewayV2httpResponse;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub bucket_configured: bool,
    pub queue_configured: bool,
}

/// Always healthy; missing config only changes what the page shows.
pub fn handle(state: &AppState) -> ApiGatewayV2httpResponse {
    json_response(
        200,
        &ApiResponse::success(HealthResponse {
            status: "healthy",
            version: env!("CARGO_PKG_VERSION"),
            bucket_configured: state.config.bucket_name.is_some(),
            queue_configured: state.config.queue_name.is_some(),
        }),
    )
}
