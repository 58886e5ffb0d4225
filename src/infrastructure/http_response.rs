// HTTP response utilities for rendered HTML views
use askama::Template;
use axum::{
    body::Body,
    http::{header, HeaderValue, Response, StatusCode},
};

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Render `view` into a 200 HTML response.
///
/// A render failure becomes a 500 with a plain-text message.
pub fn html_response<T: Template>(view: &T) -> Response<Body> {
    match view.render() {
        Ok(html) => build_response(StatusCode::OK, HTML_CONTENT_TYPE, html),
        Err(e) => render_error_response(&e),
    }
}

pub fn render_error_response(err: &dyn std::error::Error) -> Response<Body> {
    tracing::error!(error = %err, "Template rendering failed");
    build_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        "text/plain; charset=utf-8",
        format!("failed to render template: {}", err),
    )
}

fn build_response(status: StatusCode, content_type: &'static str, body: String) -> Response<Body> {
    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    response
}
