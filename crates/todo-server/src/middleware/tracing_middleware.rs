//! Request-scoped tracing for the todo API.
//!
//! Each request runs inside an `http_request` span carrying its trace id,
//! method and path, and the trace id is echoed back in `X-Trace-Id` so a
//! client can match its call to the server log lines.

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderMap, HeaderName, HeaderValue},
    Error, HttpMessage,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;
use tracing::Instrument;
use uuid::Uuid;

pub const TRACE_ID_HEADER: &str = "x-trace-id";

/// Trace id stored in request extensions
#[derive(Clone, Debug)]
pub struct TraceId(pub String);

/// Reuse the caller's trace id when it sent a usable one, else mint a UUID
pub fn resolve_trace_id(headers: &HeaderMap) -> String {
    headers
        .get(TRACE_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

pub fn extract_trace_id(req: &actix_web::HttpRequest) -> Option<String> {
    req.extensions().get::<TraceId>().map(|t| t.0.clone())
}

pub struct TracingMiddleware;

impl<S, B> Transform<S, ServiceRequest> for TracingMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TracingMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TracingMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct TracingMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for TracingMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = resolve_trace_id(req.headers());

        // Handlers and the JSON error handler read it back via extract_trace_id
        req.extensions_mut().insert(TraceId(trace_id.clone()));

        let span = tracing::info_span!(
            "http_request",
            trace_id = %trace_id,
            method = %req.method(),
            path = %req.path()
        );
        let service = Rc::clone(&self.service);

        Box::pin(
            async move {
                match service.call(req).await {
                    Ok(mut res) => {
                        if let Ok(value) = HeaderValue::from_str(&trace_id) {
                            res.headers_mut()
                                .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
                        }
                        tracing::info!(status = res.status().as_u16(), "Request completed");
                        Ok(res)
                    }
                    // Handler errors are rendered into responses by AppError before
                    // reaching here; only a failure inside actix itself lands in this
                    // branch, and actix renders it after this middleware, so the
                    // response goes out without the X-Trace-Id header.
                    Err(err) => {
                        tracing::warn!("Request failed before a response was built: {}", err);
                        Err(err)
                    }
                }
            }
            .instrument(span),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(TRACE_ID_HEADER),
            HeaderValue::from_static(value),
        );
        headers
    }

    #[test]
    fn test_caller_trace_id_is_kept() {
        assert_eq!(resolve_trace_id(&headers_with("abc-123")), "abc-123");
    }

    #[test]
    fn test_blank_trace_id_is_replaced() {
        let trace_id = resolve_trace_id(&headers_with("   "));
        assert!(Uuid::parse_str(&trace_id).is_ok());
    }

    #[test]
    fn test_missing_trace_id_is_generated() {
        let first = resolve_trace_id(&HeaderMap::new());
        let second = resolve_trace_id(&HeaderMap::new());
        assert_ne!(first, second);
    }
}
