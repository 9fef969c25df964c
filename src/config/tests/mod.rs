//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `cli_flags`: Loading every field from long and short flags
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `operation_mode`: Create/edit mode and routing identifier tests
//! - `field_resolution`: Token, list, and seat override resolution tests

mod helpers;
mod operation_mode;
