//! Utility functions.

use std::ffi;

/// Convert a GLSL identifier into a C string, rejecting interior NUL bytes.
pub fn cstring(name: &str) -> Option<ffi::CString> {
    ffi::CString::new(name).ok()
}

/// Convert a driver info log into a trimmed string.
pub fn info_log(bytes: Vec<u8>) -> String {
    let text = String::from_utf8_lossy(&bytes);
    text.trim_end_matches(|c: char| c == '\0' || c.is_whitespace())
        .to_string()
}

/// Round `value` up to the next multiple of `alignment`.
///
/// An alignment of zero leaves the value unchanged.
pub fn align_up(value: usize, alignment: usize) -> usize {
    if alignment == 0 {
        value
    } else {
        (value + alignment - 1) / alignment * alignment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cstring_rejects_interior_nul() {
        assert!(cstring("u_Color").is_some());
        assert!(cstring("u_\0Color").is_none());
    }

    #[test]
    fn info_log_strips_trailing_nul_and_newlines() {
        let log = b"0:12(3): error: syntax error\n\0".to_vec();
        assert_eq!("0:12(3): error: syntax error", info_log(log));
        assert_eq!("", info_log(Vec::new()));
    }

    #[test]
    fn align_up_rounds_to_multiples() {
        assert_eq!(0, align_up(0, 256));
        assert_eq!(256, align_up(1, 256));
        assert_eq!(256, align_up(256, 256));
        assert_eq!(512, align_up(257, 256));
        assert_eq!(12, align_up(12, 0));
        assert_eq!(12, align_up(12, 4));
    }
}
