use taskmem::{status_string, ReadError, Status};

#[derive(Debug)]
pub enum ResolveError {
    DirectoryUnavailable(Status),
    UnsupportedVersion(i32),
    UnrecognizedFormat(u32),
    ImplausibleCount(u32),
    TruncatedRead { expected: usize, actual: usize },
    InconsistentSnapshot(&'static str),
    Read(ReadError),
}

impl From<ReadError> for ResolveError {
    fn from(value: ReadError) -> Self {
        Self::Read(value)
    }
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolveError::DirectoryUnavailable(code) => {
                write!(f, "QueryDirectory: {}. code: {code}", status_string(*code))
            }
            ResolveError::UnsupportedVersion(version) => {
                write!(f, "unsupported image directory format: {version}")
            }
            ResolveError::UnrecognizedFormat(magic) => {
                write!(f, "unrecognized image header magic: {magic:#010x}")
            }
            ResolveError::ImplausibleCount(count) => {
                write!(f, "implausible image count: {count}")
            }
            ResolveError::TruncatedRead { expected, actual } => {
                write!(f, "truncated read: got {actual} of {expected} bytes")
            }
            ResolveError::InconsistentSnapshot(what) => {
                write!(f, "inconsistent snapshot: {what}")
            }
            ResolveError::Read(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ResolveError {}
