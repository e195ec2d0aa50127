//! HTTP Middleware
//!
//! 请求 ID 透传 + HTTP 状态码错误日志

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

/// 请求 ID 头
pub static X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// 取入站请求 ID，没有则生成
fn request_id(request: &Request) -> HeaderValue {
    request
        .headers()
        .get(&X_REQUEST_ID)
        .filter(|v| !v.is_empty())
        .cloned()
        .unwrap_or_else(|| {
            HeaderValue::from_str(&Uuid::new_v4().to_string())
                .unwrap_or_else(|_| HeaderValue::from_static("unknown"))
        })
}

/// 请求 ID 与错误日志中间件
///
/// 每个请求在带 request_id 的 span 中执行，响应回写 `x-request-id`。
/// 状态码为 4xx 或 5xx 时记录日志；错误详情在 ApiError::into_response() 中记录
pub async fn request_context_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let request_id = request_id(&request);

    let span = tracing::info_span!(
        "request",
        request_id = %request_id.to_str().unwrap_or_default()
    );

    let mut response = next.run(request).instrument(span.clone()).await;
    let status = response.status();

    let _entered = span.enter();
    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP client error"
        );
    }

    response.headers_mut().insert(X_REQUEST_ID.clone(), request_id);
    response
}
