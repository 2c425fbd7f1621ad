/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

/// Write one log entry, without appending a newline.
///
/// `tier_log!(router => priority, tag, fmt, args...)` logs through the given
/// router, `tier_log!(priority, tag, fmt, args...)` through the global
/// settings. Nothing is formatted if the entry would not reach any channel.
#[macro_export]
macro_rules! tier_log {
    ($router:expr => $priority:expr, $tag:expr, $($arg:tt)+) => {{
        let router: &$crate::LogRouter = &$router;
        let priority: $crate::Priority = $priority;
        if router.would_output(priority) {
            let mut entry = router.entry_at(
                $crate::SourceLocation::new(file!(), line!()),
                $tag,
                priority,
            );
            let _ = ::std::fmt::Write::write_fmt(&mut entry, format_args!($($arg)+));
        }
    }};
    ($priority:expr, $tag:expr, $($arg:tt)+) => {{
        if let Some(settings) = $crate::settings::current() {
            $crate::tier_log!(settings.router() => $priority, $tag, $($arg)+);
        }
    }};
}

/// Like [`tier_log!`], with a trailing newline.
#[macro_export]
macro_rules! tier_logln {
    ($router:expr => $priority:expr, $tag:expr, $($arg:tt)+) => {
        $crate::tier_log!($router => $priority, $tag, "{}\n", format_args!($($arg)+))
    };
    ($priority:expr, $tag:expr, $($arg:tt)+) => {
        $crate::tier_log!($priority, $tag, "{}\n", format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! error_log {
    ($router:expr => $($arg:tt)+) => {
        $crate::tier_logln!($router => $crate::Priority::Error, "Error", $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::tier_logln!($crate::Priority::Error, "Error", $($arg)+)
    };
}

#[macro_export]
macro_rules! warning_log {
    ($router:expr => $($arg:tt)+) => {
        $crate::tier_logln!($router => $crate::Priority::Warning, "Warning", $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::tier_logln!($crate::Priority::Warning, "Warning", $($arg)+)
    };
}

#[macro_export]
macro_rules! notice_log {
    ($router:expr => $($arg:tt)+) => {
        $crate::tier_logln!($router => $crate::Priority::Notice, "Notice", $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::tier_logln!($crate::Priority::Notice, "Notice", $($arg)+)
    };
}

#[macro_export]
macro_rules! info_log {
    ($router:expr => $($arg:tt)+) => {
        $crate::tier_logln!($router => $crate::Priority::Info, "Info", $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::tier_logln!($crate::Priority::Info, "Info", $($arg)+)
    };
}

#[macro_export]
macro_rules! debug_log {
    ($router:expr => $($arg:tt)+) => {
        $crate::tier_logln!($router => $crate::Priority::Debug, "Debug", $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::tier_logln!($crate::Priority::Debug, "Debug", $($arg)+)
    };
}
