//! OpenTelemetry-based observability with file-based trace export.
//!
//! This module provides tracing infrastructure for the plugin, using the
//! OpenTelemetry OTLP format with file-based exporting. Traces are written to
//! JSON files for offline analysis and debugging, since the plugin sandbox has
//! no network access.
//!
//! # Architecture
//!
//! ```text
//! tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON Files
//! ```
//!
//! # Features
//!
//! - **File-Based Export**: Traces written to `~/.local/share/zellij/mediashelf/mediashelf-otlp.json`
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//! - **OTLP Format**: Standard OpenTelemetry Protocol JSON format
//! - **Resource Metadata**: Includes service name and environment info
//!
//! # Configuration
//!
//! Trace level is controlled via the `trace_level` plugin configuration option,
//! defaulting to `"info"`.
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`tracer`]: Custom OpenTelemetry tracer provider with file export
//! - [`span_formatter`]: OTLP JSON span serialization
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;
