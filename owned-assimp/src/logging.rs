//! Routing Assimp's log output
//!
//! Assimp writes its log through callbacks registered with
//! `aiAttachLogStream`. A [`Logger`] owns the streams it attaches and detaches
//! them when dropped. [`LogCrateStream`] forwards every message into the `log`
//! facade under the `assimp` target, at the level Assimp put in the message
//! prefix.

use std::ffi::CStr;
use std::os::raw::c_char;
use std::sync::{Arc, Mutex};

use crate::sys;

/// Severity Assimp writes at the start of each message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Info => log::Level::Info,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Error => log::Level::Error,
        }
    }
}

/// Split a native message such as `"Warn,  T0: text\n"` into its level and
/// text. Messages without a known prefix are treated as info.
pub fn parse_assimp_level(message: &str) -> (LogLevel, &str) {
    const PREFIXES: [(&str, LogLevel); 4] = [
        ("Debug,", LogLevel::Debug),
        ("Info,", LogLevel::Info),
        ("Warn,", LogLevel::Warn),
        ("Error,", LogLevel::Error),
    ];
    let (level, rest) = PREFIXES
        .iter()
        .find_map(|(prefix, level)| message.strip_prefix(prefix).map(|rest| (*level, rest)))
        .unwrap_or((LogLevel::Info, message));

    let rest = rest.trim_start();
    // Thread tag written by the default logger, e.g. "T0: ".
    let rest = match rest.split_once(": ") {
        Some((tag, text)) if tag.starts_with('T') && tag[1..].chars().all(|c| c.is_ascii_digit()) => text,
        _ => rest,
    };
    (level, rest.trim_end())
}

/// Receiver for raw Assimp log messages
pub trait LogStream: Send {
    fn write(&mut self, message: &str);
}

/// Forwards Assimp messages to the `log` crate
#[derive(Debug, Default, Clone, Copy)]
pub struct LogCrateStream;

impl LogStream for LogCrateStream {
    fn write(&mut self, message: &str) {
        let (level, text) = parse_assimp_level(message);
        log::log!(target: "assimp", log::Level::from(level), "{text}");
    }
}

/// Keeps every message, for tests and diagnostics
#[derive(Debug, Default, Clone)]
pub struct MemoryLogStream {
    messages: Vec<String>,
}

impl MemoryLogStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Messages at `level` or above, prefix stripped
    pub fn messages_at_least(&self, level: LogLevel) -> Vec<&str> {
        self.messages
            .iter()
            .map(|m| parse_assimp_level(m))
            .filter(|(l, _)| *l >= level)
            .map(|(_, text)| text)
            .collect()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

impl LogStream for MemoryLogStream {
    fn write(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

type SharedStream = Arc<Mutex<dyn LogStream>>;

struct AttachedStream {
    native: sys::aiLogStream,
    // Boxed so the address handed to Assimp as `user` stays fixed.
    user: *mut SharedStream,
}

/// Owner of attached native log streams
#[derive(Default)]
pub struct Logger {
    streams: Vec<AttachedStream>,
}

impl Logger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Logger already forwarding to the `log` crate
    pub fn with_log_crate() -> Self {
        let mut logger = Self::new();
        logger.attach_stream(Arc::new(Mutex::new(LogCrateStream)));
        logger
    }

    pub fn attach_stream(&mut self, stream: SharedStream) {
        let user = Box::into_raw(Box::new(stream));
        let native = sys::aiLogStream {
            callback: Some(log_callback),
            user: user.cast::<c_char>(),
        };
        // SAFETY: Assimp copies `native`; `user` stays valid until detached.
        unsafe { sys::aiAttachLogStream(&native) };
        self.streams.push(AttachedStream { native, user });
    }

    /// Detach `stream` if this logger attached it; returns whether it did.
    pub fn detach_stream(&mut self, stream: &SharedStream) -> bool {
        let Some(pos) = self.streams.iter().position(|s| {
            // SAFETY: `user` is live while the entry is in `streams`.
            Arc::ptr_eq(unsafe { &*s.user }, stream)
        }) else {
            return false;
        };
        let attached = self.streams.remove(pos);
        Self::release(attached);
        true
    }

    /// Detach every stream this logger attached
    pub fn detach_all(&mut self) {
        for attached in self.streams.drain(..) {
            Self::release(attached);
        }
    }

    pub fn len(&self) -> usize {
        self.streams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }

    fn release(attached: AttachedStream) {
        // SAFETY: the stream was attached by us; after detaching, Assimp no
        // longer calls back with `user`, so the box can be freed.
        unsafe {
            if sys::aiDetachLogStream(&attached.native) != sys::aiReturn_aiReturn_SUCCESS {
                log::warn!("aiDetachLogStream did not find an attached stream");
            }
            drop(Box::from_raw(attached.user));
        }
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.detach_all();
    }
}

extern "C" fn log_callback(message: *const c_char, user: *mut c_char) {
    if message.is_null() || user.is_null() {
        return;
    }
    // SAFETY: Assimp passes a NUL-terminated message and the `user` pointer
    // registered in `attach_stream`, which is live until detached.
    let (text, stream) = unsafe {
        (
            CStr::from_ptr(message).to_string_lossy(),
            &*user.cast::<SharedStream>(),
        )
    };
    // Never unwind into Assimp.
    let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        if let Ok(mut stream) = stream.lock() {
            stream.write(&text);
        }
    }));
}

/// Let Assimp emit debug-level messages
pub fn enable_verbose_logging(enable: bool) {
    let flag = if enable { sys::AI_TRUE } else { sys::AI_FALSE };
    // SAFETY: sets a global flag, no pointers involved.
    unsafe { sys::aiEnableVerboseLogging(flag) };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level_prefixes() {
        assert_eq!(parse_assimp_level("Debug, T0: Load box.obj\n"), (LogLevel::Debug, "Load box.obj"));
        assert_eq!(parse_assimp_level("Info,  T0: done"), (LogLevel::Info, "done"));
        assert_eq!(parse_assimp_level("Warn,  T12: odd: value"), (LogLevel::Warn, "odd: value"));
        assert_eq!(parse_assimp_level("Error, T0: missing"), (LogLevel::Error, "missing"));
        assert_eq!(parse_assimp_level("plain text"), (LogLevel::Info, "plain text"));
        assert_eq!(parse_assimp_level("Warn, Top: here"), (LogLevel::Warn, "Top: here"));
    }

    #[test]
    fn test_memory_stream_filters_by_level() {
        let mut stream = MemoryLogStream::new();
        stream.write("Debug, T0: a\n");
        stream.write("Warn,  T0: b\n");
        stream.write("Error, T0: c\n");
        assert_eq!(stream.messages().len(), 3);
        assert_eq!(stream.messages_at_least(LogLevel::Warn), vec!["b", "c"]);
        stream.clear();
        assert!(stream.messages().is_empty());
    }

    #[test]
    fn test_callback_writes_to_stream() {
        let memory = Arc::new(Mutex::new(MemoryLogStream::new()));
        let shared: SharedStream = memory.clone();
        let user = Box::into_raw(Box::new(shared));
        log_callback(c"Info,  T0: hello\n".as_ptr(), user.cast());
        log_callback(std::ptr::null(), user.cast());
        unsafe { drop(Box::from_raw(user)) };
        assert_eq!(memory.lock().unwrap().messages(), ["Info,  T0: hello\n"]);
    }
}
