//! Forwarding to the system logger via syslog(3).
//!
//! Level numbers are syslog priorities, so they are passed through
//! unchanged. The namespace, when not the root, prefixes the message. The
//! system logger does its own timestamping, so no record prefix is written.

use super::{Backend, Plugin};
use crate::error::Result;
use crate::level::Level;
use std::ffi::CString;
use std::fmt;
use std::os::raw::{c_char, c_int};
use url::Url;

/// Build the C string handed to syslog(3); interior NULs are dropped
pub fn syslog_message(namespace: &str, args: fmt::Arguments<'_>) -> CString {
    let text = if namespace.is_empty() {
        args.to_string()
    } else {
        format!("{}: {}", namespace, args)
    };

    let bytes: Vec<u8> = text.into_bytes().into_iter().filter(|b| *b != 0).collect();
    // No NUL bytes remain, so construction cannot fail.
    CString::new(bytes).unwrap_or_default()
}

pub struct SyslogBackend;

impl Backend for SyslogBackend {
    fn print(&self, namespace: &str, level: Level, args: fmt::Arguments<'_>) -> Result<()> {
        let message = syslog_message(namespace, args);
        // SAFETY: both pointers are valid NUL-terminated strings and the
        // format consumes exactly one string argument.
        unsafe {
            libc::syslog(
                c_int::from(level.as_u8()),
                b"%s\0".as_ptr() as *const c_char,
                message.as_ptr(),
            );
        }
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "syslog"
    }
}

/// The `syslog:` plugin
pub struct SyslogPlugin;

impl Plugin for SyslogPlugin {
    fn name(&self) -> &str {
        "syslog"
    }

    fn open(&self, _namespace: &str, _level: Level, _uri: &Url) -> Result<Box<dyn Backend>> {
        Ok(Box::new(SyslogBackend))
    }
}
