//! Observability setup for loanforge: structured logging with optional
//! OpenTelemetry span export.

pub mod tracing_setup;
