//! Error handling for import, copy and persistence

use std::ffi::CStr;
use thiserror::Error;

/// Result type alias for owned-assimp operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while importing, copying or persisting a scene
#[derive(Error, Debug)]
pub enum Error {
    /// Assimp returned no scene; the message is its last-error text
    #[error("Import failed: {message}")]
    ImportFailed { message: String },

    /// Invalid parameters or configuration, rejected before reaching native code
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Native scene data that cannot be copied (null arrays with non-zero counts,
    /// malformed property buffers, oversized lengths)
    #[error("Invalid scene: {message}")]
    InvalidScene { message: String },

    /// Null pointer error
    #[error("Null pointer encountered")]
    NullPointer,

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding or decoding a persisted scene failed
    #[error("Persist error: {message}")]
    Persist { message: String },

    /// Generic error with custom message
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a new import error
    pub fn import_failed<S: Into<String>>(message: S) -> Self {
        Self::ImportFailed {
            message: message.into(),
        }
    }

    /// Create a new invalid parameter error
    pub fn invalid_parameter<S: Into<String>>(message: S) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Create a new invalid scene error
    pub fn invalid_scene<S: Into<String>>(message: S) -> Self {
        Self::InvalidScene {
            message: message.into(),
        }
    }

    /// Create a new persistence error
    pub fn persist<S: Into<String>>(message: S) -> Self {
        Self::Persist {
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(message: S) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Build an [`Error::ImportFailed`] from Assimp's last-error text
    pub fn from_assimp() -> Self {
        let message = last_error_string()
            .unwrap_or_else(|| "Assimp returned no scene and no error text".to_string());
        Self::ImportFailed { message }
    }
}

impl From<bincode::Error> for Error {
    fn from(err: bincode::Error) -> Self {
        Self::Persist {
            message: err.to_string(),
        }
    }
}

/// Read `aiGetErrorString`, returning `None` for null or empty text.
pub(crate) fn last_error_string() -> Option<String> {
    // SAFETY: aiGetErrorString returns null or a NUL-terminated string owned by Assimp.
    let text = unsafe { c_str_to_string_or_empty(crate::sys::aiGetErrorString()) };
    if text.is_empty() { None } else { Some(text) }
}

/// Convert a C string to a Rust string, returning an empty string for null pointers
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string.
pub(crate) unsafe fn c_str_to_string_or_empty(ptr: *const std::os::raw::c_char) -> String {
    if ptr.is_null() {
        String::new()
    } else {
        unsafe { CStr::from_ptr(ptr).to_string_lossy().into_owned() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = Error::import_failed("Test import error");
        assert!(matches!(error, Error::ImportFailed { .. }));
        assert_eq!(error.to_string(), "Import failed: Test import error");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: Error = io.into();
        assert!(matches!(error, Error::Io(_)));
    }

    #[test]
    fn test_c_str_conversion() {
        let owned = std::ffi::CString::new("hello").unwrap();
        let text = unsafe { c_str_to_string_or_empty(owned.as_ptr()) };
        assert_eq!(text, "hello");
        assert_eq!(unsafe { c_str_to_string_or_empty(std::ptr::null()) }, "");
    }
}
