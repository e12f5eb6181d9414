//! Convenience macros over [`crate::dispatch`] on the global logger.
//!
//! `ll_pr!` skips the call entirely when the level is above
//! [`crate::defaults::STATIC_MAX_LEVEL`], so disabled levels cost nothing in
//! builds using one of the `max-level-*` features. In debug builds the
//! message is prefixed with the caller's `file:line`.
//!
//! The emergency macros log and then abort the process.

/// Log to a namespace at an explicit level
#[macro_export]
macro_rules! ll_pr {
    ($ns:expr, $lvl:expr, $($arg:tt)+) => {{
        let __lvl: $crate::Level = $lvl;
        if __lvl <= $crate::defaults::STATIC_MAX_LEVEL {
            let _ = if cfg!(debug_assertions) {
                $crate::dispatch(
                    $ns,
                    __lvl,
                    format_args!("{}:{} {}", file!(), line!(), format_args!($($arg)+)),
                )
            } else {
                $crate::dispatch($ns, __lvl, format_args!($($arg)+))
            };
        }
    }};
}

/// Log an emergency to a namespace, then abort
#[macro_export]
macro_rules! ll_pr_emerg {
    ($ns:expr, $($arg:tt)+) => {{
        $crate::ll_pr!($ns, $crate::Level::Emerg, $($arg)+);
        ::std::process::abort();
    }};
}

#[macro_export]
macro_rules! ll_pr_alert {
    ($ns:expr, $($arg:tt)+) => { $crate::ll_pr!($ns, $crate::Level::Alert, $($arg)+) };
}

#[macro_export]
macro_rules! ll_pr_crit {
    ($ns:expr, $($arg:tt)+) => { $crate::ll_pr!($ns, $crate::Level::Crit, $($arg)+) };
}

#[macro_export]
macro_rules! ll_pr_err {
    ($ns:expr, $($arg:tt)+) => { $crate::ll_pr!($ns, $crate::Level::Err, $($arg)+) };
}

#[macro_export]
macro_rules! ll_pr_warn {
    ($ns:expr, $($arg:tt)+) => { $crate::ll_pr!($ns, $crate::Level::Warning, $($arg)+) };
}

#[macro_export]
macro_rules! ll_pr_notice {
    ($ns:expr, $($arg:tt)+) => { $crate::ll_pr!($ns, $crate::Level::Notice, $($arg)+) };
}

#[macro_export]
macro_rules! ll_pr_info {
    ($ns:expr, $($arg:tt)+) => { $crate::ll_pr!($ns, $crate::Level::Info, $($arg)+) };
}

#[macro_export]
macro_rules! ll_pr_debug {
    ($ns:expr, $($arg:tt)+) => { $crate::ll_pr!($ns, $crate::Level::Debug, $($arg)+) };
}

/// Log an emergency to the root namespace, then abort
#[macro_export]
macro_rules! ll_emerg {
    ($($arg:tt)+) => { $crate::ll_pr_emerg!("", $($arg)+) };
}

#[macro_export]
macro_rules! ll_alert {
    ($($arg:tt)+) => { $crate::ll_pr!("", $crate::Level::Alert, $($arg)+) };
}

#[macro_export]
macro_rules! ll_crit {
    ($($arg:tt)+) => { $crate::ll_pr!("", $crate::Level::Crit, $($arg)+) };
}

#[macro_export]
macro_rules! ll_err {
    ($($arg:tt)+) => { $crate::ll_pr!("", $crate::Level::Err, $($arg)+) };
}

#[macro_export]
macro_rules! ll_warn {
    ($($arg:tt)+) => { $crate::ll_pr!("", $crate::Level::Warning, $($arg)+) };
}

#[macro_export]
macro_rules! ll_notice {
    ($($arg:tt)+) => { $crate::ll_pr!("", $crate::Level::Notice, $($arg)+) };
}

#[macro_export]
macro_rules! ll_info {
    ($($arg:tt)+) => { $crate::ll_pr!("", $crate::Level::Info, $($arg)+) };
}

#[macro_export]
macro_rules! ll_debug {
    ($($arg:tt)+) => { $crate::ll_pr!("", $crate::Level::Debug, $($arg)+) };
}
