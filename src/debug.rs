//! `KHR_debug` message reporting.

use crate::gl;
use std::{ffi, os, slice};

/// Returns a readable label for a debug message type.
pub(crate) fn type_label(ty: u32) -> &'static str {
    match ty {
        gl::DEBUG_TYPE_ERROR => "ERROR",
        gl::DEBUG_TYPE_DEPRECATED_BEHAVIOR => "DEPRECATED",
        gl::DEBUG_TYPE_UNDEFINED_BEHAVIOR => "UNDEFINED BEHAVIOR",
        gl::DEBUG_TYPE_PORTABILITY => "PORTABILITY",
        gl::DEBUG_TYPE_PERFORMANCE => "PERFORMANCE",
        gl::DEBUG_TYPE_OTHER => "OTHER",
        _ => "UNKNOWN",
    }
}

/// Picks the log level a debug message is reported at.
pub(crate) fn level(ty: u32, severity: u32) -> log::Level {
    if severity == gl::DEBUG_SEVERITY_NOTIFICATION {
        return log::Level::Info;
    }
    match ty {
        gl::DEBUG_TYPE_ERROR | gl::DEBUG_TYPE_UNDEFINED_BEHAVIOR => log::Level::Error,
        _ => log::Level::Warn,
    }
}

/// Decodes the message text handed to the callback.
fn message_text(length: i32, message: *const os::raw::c_char) -> String {
    if message.is_null() {
        return String::new();
    }
    if length >= 0 {
        let bytes = unsafe { slice::from_raw_parts(message as *const u8, length as usize) };
        String::from_utf8_lossy(bytes).into_owned()
    } else {
        let cstr = unsafe { ffi::CStr::from_ptr(message) };
        cstr.to_string_lossy().into_owned()
    }
}

/// Installed with `glDebugMessageCallback`.
pub(crate) extern "system" fn callback(
    _source: u32,
    ty: u32,
    id: u32,
    severity: u32,
    length: i32,
    message: *const os::raw::c_char,
    _user: *mut os::raw::c_void,
) {
    let text = message_text(length, message);
    log!(
        target: "gl",
        level(ty, severity),
        "[{}] ({}) {}",
        type_label(ty),
        id,
        text.trim_end(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!("ERROR", type_label(gl::DEBUG_TYPE_ERROR));
        assert_eq!("UNDEFINED BEHAVIOR", type_label(gl::DEBUG_TYPE_UNDEFINED_BEHAVIOR));
        assert_eq!("PERFORMANCE", type_label(gl::DEBUG_TYPE_PERFORMANCE));
        assert_eq!("UNKNOWN", type_label(0));
    }

    #[test]
    fn severity_and_type_pick_the_level() {
        use log::Level;
        assert_eq!(Level::Info, level(gl::DEBUG_TYPE_ERROR, gl::DEBUG_SEVERITY_NOTIFICATION));
        assert_eq!(Level::Error, level(gl::DEBUG_TYPE_ERROR, gl::DEBUG_SEVERITY_HIGH));
        assert_eq!(Level::Error, level(gl::DEBUG_TYPE_UNDEFINED_BEHAVIOR, gl::DEBUG_SEVERITY_LOW));
        assert_eq!(Level::Warn, level(gl::DEBUG_TYPE_PERFORMANCE, gl::DEBUG_SEVERITY_MEDIUM));
        assert_eq!(Level::Warn, level(gl::DEBUG_TYPE_DEPRECATED_BEHAVIOR, gl::DEBUG_SEVERITY_HIGH));
    }

    #[test]
    fn message_lengths() {
        let text = b"buffer mapped\0";
        let ptr = text.as_ptr() as *const os::raw::c_char;
        assert_eq!("buffer", message_text(6, ptr));
        assert_eq!("buffer mapped", message_text(-1, ptr));
        assert_eq!("", message_text(4, std::ptr::null()));
    }
}
