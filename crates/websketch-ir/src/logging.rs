//! Structured logging facility
//!
//! This module provides the canonical logging surface for the crate:
//! - Single initialization point via `init(profile)`
//! - Canonical field and event names in [`schema`]
//! - Structured operation macros (`log_op_start!`, `log_op_end!`,
//!   `log_op_error!`)
//!
//! The library only emits events; hosts pick the profile. Embedders that
//! already run their own `tracing` subscriber can skip `init` entirely.
//!
//! # Usage
//!
//! ```rust
//! use websketch_ir::logging::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```

use std::sync::Once;

use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Canonical structured-logging schema
///
/// Field keys and event names shared by every operation log line this crate
/// emits. Downstream collectors key off these, so they are contract.
pub mod schema {
    /// Emitting module path
    pub const FIELD_COMPONENT: &str = "component";
    /// Operation name
    pub const FIELD_OP: &str = "op";
    /// Lifecycle event
    pub const FIELD_EVENT: &str = "event";
    /// Wall-clock duration in milliseconds
    pub const FIELD_DURATION_MS: &str = "duration_ms";
    /// Stable `WS_*` error code
    pub const FIELD_ERR_CODE: &str = "err_code";

    /// Operation started
    pub const EVENT_START: &str = "start";
    /// Operation finished successfully
    pub const EVENT_END: &str = "end";
    /// Operation finished with an error
    pub const EVENT_END_ERROR: &str = "end_error";
}

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// No-op registry for tests
    Test,
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Call once at application startup; later calls are no-ops.
///
/// # Profiles
///
/// - **Development**: human-readable logs, `websketch=debug` default filter
/// - **Production**: JSON structured logs, `websketch=info` default filter
/// - **Test**: bare registry, nothing emitted
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        match profile {
            Profile::Development => {
                tracing_subscriber::fmt()
                    .with_env_filter(
                        EnvFilter::try_from_default_env()
                            .unwrap_or_else(|_| EnvFilter::new("websketch=debug")),
                    )
                    .init();
            }
            Profile::Production => {
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(
                        EnvFilter::try_from_default_env()
                            .unwrap_or_else(|_| EnvFilter::new("websketch=info")),
                    )
                    .init();
            }
            Profile::Test => {
                tracing_subscriber::registry().init();
            }
        }
    });
}

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use websketch_ir::log_op_start;
/// log_op_start!("parse_capture");
/// log_op_start!("parse_capture", input_bytes = 512);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::logging::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::logging::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use websketch_ir::log_op_end;
/// log_op_end!("parse_capture", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::logging::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::logging::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error with its stable code
///
/// # Example
///
/// ```ignore
/// let err: websketch_ir::WsError = ...;
/// log_op_error!("parse_capture", &err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let err: &$crate::errors::WsError = $err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::logging::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?err.kind(),
            err_code = err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let err: &$crate::errors::WsError = $err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::logging::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?err.kind(),
            err_code = err.code(),
            $($field)*
        );
    }};
}
