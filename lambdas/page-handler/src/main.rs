use aws_lambda_events::apigw::{ApiGatewayV2httpRequest, ApiGatewayV2httpResponse};
use aws_lambda_events::encodings::Body;
use aws_lambda_events::http::{HeaderMap, HeaderValue};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use shared::config::AppConfig;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

mod routes;

pub struct AppState {
    pub config: AppConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

fn cors_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("access-control-allow-origin", HeaderValue::from_static("*"));
    headers.insert(
        "access-control-allow-methods",
        HeaderValue::from_static("GET, HEAD, OPTIONS"),
    );
    headers.insert(
        "access-control-allow-headers",
        HeaderValue::from_static("Content-Type"),
    );
    headers
}

fn response(
    status_code: i64,
    content_type: &'static str,
    body: String,
) -> ApiGatewayV2httpResponse {
    let mut headers = cors_headers();
    headers.insert("content-type", HeaderValue::from_static(content_type));

    ApiGatewayV2httpResponse {
        status_code,
        headers,
        multi_value_headers: HeaderMap::new(),
        body: Some(Body::Text(body)),
        is_base64_encoded: false,
        cookies: vec![],
    }
}

pub fn json_response<T: Serialize>(
    status_code: i64,
    body: &ApiResponse<T>,
) -> ApiGatewayV2httpResponse {
    response(
        status_code,
        "application/json",
        serde_json::to_string(body).unwrap_or_default(),
    )
}

pub fn html_response(status_code: i64, body: String) -> ApiGatewayV2httpResponse {
    response(status_code, "text/html; charset=utf-8", body)
}

fn route(state: &AppState, request: &ApiGatewayV2httpRequest) -> ApiGatewayV2httpResponse {
    let method = request.request_context.http.method.as_str();
    let path = request.raw_path.as_deref().unwrap_or("/");

    match (method, path) {
        ("OPTIONS", _) => ApiGatewayV2httpResponse {
            status_code: 200,
            headers: cors_headers(),
            multi_value_headers: HeaderMap::new(),
            body: None,
            is_base64_encoded: false,
            cookies: vec![],
        },
        ("GET", "/") => routes::page::handle(state),
        ("HEAD", "/") => ApiGatewayV2httpResponse {
            body: None,
            ..routes::page::handle(state)
        },
        ("GET", "/config") => routes::page::config(state),
        ("GET", "/health") => routes::health::handle(state),
        _ => json_response(404, &ApiResponse::<()>::error("Not found")),
    }
}

#[instrument(skip(state, event), fields(path = %event.payload.raw_path.as_deref().unwrap_or("/")))]
async fn router(
    state: &AppState,
    event: LambdaEvent<ApiGatewayV2httpRequest>,
) -> Result<ApiGatewayV2httpResponse, Error> {
    let request = event.payload;
    info!(method = %request.request_context.http.method, "Handling request");

    let response = route(state, &request);
    info!(status = response.status_code, "Handled request");

    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .without_time()
        .init();

    let config = AppConfig::from_env();

    info!(
        bucket = ?config.bucket_name,
        queue = ?config.queue_name,
        "Starting Lambda"
    );

    let state = AppState { config };
    lambda_runtime::run(service_fn(|event| router(&state, event))).await
}
