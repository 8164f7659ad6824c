//! Crate-internal logging shims.
//!
//! Events are forwarded to `tracing` when the `tracing` feature is enabled and
//! compiled out otherwise.

/// Emits a `tracing` event at the given level.
///
/// ```ignore
/// log_event!(debug, n, count = tours.len(), "materialised tours");
/// ```
macro_rules! log_event {
    ($level:ident, $($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::$level!($($arg)*);
        }
    };
}

/// Enters a `tracing` span for the rest of the enclosing block.
macro_rules! log_span {
    ($level:ident, $name:expr, $($field:tt)*) => {
        #[cfg(feature = "tracing")]
        let _span = ::tracing::span!(::tracing::Level::$level, $name, $($field)*).entered();
    };
}
