pub mod tracing_middleware;

pub use tracing_middleware::{
    extract_trace_id, resolve_trace_id, TraceId, TracingMiddleware, TRACE_ID_HEADER,
};
