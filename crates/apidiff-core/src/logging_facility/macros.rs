//! Operation lifecycle macros
//!
//! `parse_snapshot`, `compute_report` and `run_api_diff` bracket their work
//! with a start event and exactly one of an end or an end_error event. Every
//! event carries `component` (the emitting module), `op` and `event`; extra
//! `key = value` pairs follow the usual `tracing` field syntax.

/// Emit the start event of `$op` at INFO
///
/// ```
/// # use apidiff_core::log_op_start;
/// log_op_start!("parse_snapshot");
/// log_op_start!("parse_snapshot", snapshot_path = "api/old");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = apidiff_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = apidiff_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Emit the successful end event of `$op` at INFO
///
/// `duration_ms` is required and comes first.
///
/// ```
/// # use apidiff_core::log_op_end;
/// log_op_end!("compute_report", duration_ms = 3, additions = 2u64);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = apidiff_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = apidiff_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Emit the failed end event of `$op` at ERROR
///
/// `$err` is anything convertible into `ExError`; its kind and stable code
/// are logged as `err.kind` and `err.code`.
///
/// ```
/// # use apidiff_core::log_op_error;
/// # use apidiff_core::errors::ApiDiffError;
/// let err = ApiDiffError::Unparseable { text: "???".to_string() };
/// log_op_error!("parse_snapshot", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = apidiff_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = apidiff_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            $($field)*
        );
    }};
}
