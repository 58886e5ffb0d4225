// Request spans carrying the incoming W3C trace context
use axum::http::{HeaderMap, Request};
use tower_http::trace::MakeSpan;
use tracing::{Span, info_span};

pub const TRACEPARENT_HEADER: &str = "traceparent";

/// Parsed `traceparent` header (`version-traceid-parentid-flags`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceContext {
    pub trace_id: String,
    pub parent_id: String,
    pub sampled: bool,
}

impl TraceContext {
    pub fn parse(header: &str) -> Option<Self> {
        let mut parts = header.trim().split('-');
        let version = parts.next()?;
        let trace_id = parts.next()?;
        let parent_id = parts.next()?;
        let flags = parts.next()?;

        if !is_lower_hex(version, 2) || version == "ff" {
            return None;
        }
        // Version 00 has exactly four fields; later versions may append more.
        if version == "00" && parts.next().is_some() {
            return None;
        }
        if !is_lower_hex(trace_id, 32) || is_all_zeros(trace_id) {
            return None;
        }
        if !is_lower_hex(parent_id, 16) || is_all_zeros(parent_id) {
            return None;
        }
        if !is_lower_hex(flags, 2) {
            return None;
        }

        let flags = u8::from_str_radix(flags, 16).ok()?;
        Some(Self {
            trace_id: trace_id.to_string(),
            parent_id: parent_id.to_string(),
            sampled: flags & 0x01 == 0x01,
        })
    }

    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        headers
            .get(TRACEPARENT_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(Self::parse)
    }
}

fn is_lower_hex(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

fn is_all_zeros(s: &str) -> bool {
    s.bytes().all(|b| b == b'0')
}

/// INFO-level `request` span; `trace_id`/`parent_id` are filled from `traceparent` when valid.
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceContextSpan;

impl<B> MakeSpan<B> for TraceContextSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let span = info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            version = ?request.version(),
            trace_id = tracing::field::Empty,
            parent_id = tracing::field::Empty,
        );

        if let Some(ctx) = TraceContext::from_headers(request.headers()) {
            span.record("trace_id", tracing::field::display(&ctx.trace_id));
            span.record("parent_id", tracing::field::display(&ctx.parent_id));
        }
        span
    }
}
