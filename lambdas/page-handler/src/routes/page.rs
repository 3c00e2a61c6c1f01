use crate::{html_response, json_response, ApiResponse, AppState};
use aws_lambda_events::apigw::ApiGatewayV2httpResponse;
use serde::Serialize;
use shared::display;
use tracing::debug;

#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub bucket_name: Option<String>,
    pub queue_name: Option<String>,
    pub lines: Vec<String>,
}

pub fn handle(state: &AppState) -> ApiGatewayV2httpResponse {
    let view = display::render(&state.config);
    debug!(lines = ?view.lines(), "Rendered config page");
    html_response(200, view.to_html())
}

pub fn config(state: &AppState) -> ApiGatewayV2httpResponse {
    let lines = display::render(&state.config).lines();
    json_response(
        200,
        &ApiResponse::success(ConfigResponse {
            bucket_name: state.config.bucket_name.clone(),
            queue_name: state.config.queue_name.clone(),
            lines,
        }),
    )
}
