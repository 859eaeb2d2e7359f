// SPDX-License-Identifier: Apache-2.0 OR MIT
// Logging macros over the process-wide facade

/// Log a trace message through the process-wide facade
///
/// # Examples
/// ```ignore
/// log_trace!("cache miss for {}", key);
/// ```
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {
        $crate::facade().log($crate::Level::Trace, format_args!($($arg)*))
    };
}

/// Log a debug message through the process-wide facade
///
/// # Examples
/// ```ignore
/// log_debug!("resolved {} in {:?}", host, elapsed);
/// ```
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::facade().log($crate::Level::Debug, format_args!($($arg)*))
    };
}

/// Log an info message through the process-wide facade
///
/// # Examples
/// ```ignore
/// log_info!("listening on {}", addr);
/// ```
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::facade().log($crate::Level::Info, format_args!($($arg)*))
    };
}

/// Log a warning through the process-wide facade
///
/// # Examples
/// ```ignore
/// log_warn!("retrying after {}", err);
/// ```
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::facade().log($crate::Level::Warn, format_args!($($arg)*))
    };
}

/// Log an error through the process-wide facade
///
/// # Examples
/// ```ignore
/// log_error!("request failed: {}", err);
/// ```
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::facade().log($crate::Level::Error, format_args!($($arg)*))
    };
}

/// Log a fatal message, then exit the process with status 1
///
/// # Examples
/// ```ignore
/// log_fatal!("cannot bind control socket: {}", err);
/// ```
#[macro_export]
macro_rules! log_fatal {
    ($($arg:tt)*) => {
        $crate::facade().fatal(format_args!($($arg)*))
    };
}

/// Log a panic message, then panic with it
///
/// # Examples
/// ```ignore
/// log_panic!("invariant broken: {}", detail);
/// ```
#[macro_export]
macro_rules! log_panic {
    ($($arg:tt)*) => {
        $crate::facade().panic(format_args!($($arg)*))
    };
}
