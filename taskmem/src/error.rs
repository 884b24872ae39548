use super::Status;

#[derive(Debug, Clone, Copy)]
pub struct AttachError {
    pub status: Status,
}

#[derive(Debug, Clone, Copy)]
pub struct ReadError {
    pub status: Status,
}

#[derive(Debug, Clone, Copy)]
pub struct QueryError {
    pub status: Status,
}

#[cfg(target_os = "macos")]
#[inline]
pub fn status_string<'a>(code: Status) -> &'a str {
    unsafe {
        let ptr = crate::macos::ffi::mach_error_string(code);
        core::str::from_utf8_unchecked(core::ffi::CStr::from_ptr(ptr).to_bytes())
    }
}

#[cfg(not(target_os = "macos"))]
#[inline]
pub fn status_string<'a>(_code: Status) -> &'a str {
    "unknown"
}

impl std::fmt::Display for AttachError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AttachProcess: {}. code: {}", status_string(self.status), self.status)
    }
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ReadMemory: {}. code: {}", status_string(self.status), self.status)
    }
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "QueryTask: {}. code: {}", status_string(self.status), self.status)
    }
}

impl std::error::Error for AttachError {}
impl std::error::Error for ReadError {}
impl std::error::Error for QueryError {}
