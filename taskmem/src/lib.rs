#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "macos")]
pub use macos::Process;

mod error;

pub use error::{status_string, AttachError, QueryError, ReadError};

pub type Pid = i32;

/// Raw OS status code (kern_return_t on macOS).
pub type Status = i32;

/// Location and layout format of the target's loaded-image directory,
/// as reported by the OS for one task.
#[derive(Clone, Copy, Debug)]
pub struct ImageDirectory {
    pub address: u64,
    pub format: i32,
}

/// The 64-bit directory layout. The only format this crate's consumers
/// know how to decode.
pub const IMAGE_DIRECTORY_FORMAT_64: i32 = 1;

pub trait RemoteMemory {
    /// Copies `len` bytes at `addr` of the target's address space into a
    /// local buffer. Exactly one OS read per call, no retry, no caching.
    /// The returned buffer holds what the kernel actually wrote, which may
    /// be shorter than `len`; callers must check before decoding.
    fn read(&self, addr: u64, len: usize) -> Result<Vec<u8>, ReadError>;
}

pub trait TaskInspect: RemoteMemory {
    /// Remote address and format of the target's image directory.
    fn image_directory(&self) -> Result<ImageDirectory, QueryError>;

    /// The 16-byte build identifier of the target's main executable.
    fn build_identifier(&self) -> Result<[u8; 16], QueryError>;
}
