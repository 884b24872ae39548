use core::str;

use taskmem::{RemoteMemory, TaskInspect, IMAGE_DIRECTORY_FORMAT_64};

use super::ResolveError;

const MH_MAGIC: u32 = 0xfeed_face;
const MH_MAGIC_64: u32 = 0xfeed_facf;

// dyld_all_image_infos prefix: version u32, infoArrayCount u32, infoArray u64.
const DIRECTORY_LEN: usize = 16;
// dyld_image_info: load address u64, path address u64, mod date u64.
const ELEMENT_SIZE: usize = 24;

/// Ceiling on the remote-supplied image count. The count sizes an
/// allocation and a read, so it is adversarial input until proven sane.
pub const MAX_IMAGE_COUNT: u32 = 16384;

/// Image path strings are read through one capped request per image.
const PATH_READ_LEN: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleRecord {
    pub load_address: u64,
    pub path: String,
}

#[derive(Debug)]
pub struct ImageList {
    pub build_id: Option<[u8; 16]>,
    pub directory_version: u32,
    pub modules: Vec<ModuleRecord>,
}

/// Takes one best-effort snapshot of the images mapped into the target.
///
/// Every offset below originates in the target's own memory and is treated
/// as untrusted: the first image's header magic gates the rest, the count
/// is bounded before it sizes a read, and no buffer is decoded unless the
/// kernel returned every byte that was asked for. The target keeps running
/// while it is being read, so the directory and array reads are not
/// mutually consistent; gross mismatches surface as errors, never as
/// partial output.
pub fn list_images<T: TaskInspect>(target: &T) -> Result<ImageList, ResolveError> {
    let build_id = target.build_identifier().ok();

    let directory = target
        .image_directory()
        .map_err(|err| ResolveError::DirectoryUnavailable(err.status))?;
    if directory.format != IMAGE_DIRECTORY_FORMAT_64 {
        return Err(ResolveError::UnsupportedVersion(directory.format));
    }

    let raw = read_exact(target, directory.address, DIRECTORY_LEN)?;
    let version = u32_at(&raw, 0);
    let count = u32_at(&raw, 4);
    let array_address = u64_at(&raw, 8);

    // A zeroed page decodes as version 0 and must not pass for a valid
    // empty directory.
    if version == 0 {
        return Err(ResolveError::UnsupportedVersion(0));
    }

    if count == 0 {
        return Ok(ImageList { build_id, directory_version: version, modules: Vec::new() });
    }

    // Image 0 is the main executable. Its header magic is checked before
    // any other remote offset is trusted.
    let first = read_exact(target, array_address, ELEMENT_SIZE)?;
    let header = read_exact(target, u64_at(&first, 0), 4)?;
    let magic = u32_at(&header, 0);
    if magic != MH_MAGIC && magic != MH_MAGIC_64 {
        return Err(ResolveError::UnrecognizedFormat(magic));
    }

    if count > MAX_IMAGE_COUNT {
        return Err(ResolveError::ImplausibleCount(count));
    }

    let array = read_exact(target, array_address, ELEMENT_SIZE * count as usize)?;

    let mut modules = Vec::with_capacity(count as usize);
    for element in array.chunks_exact(ELEMENT_SIZE) {
        let load_address = u64_at(element, 0);
        let path = read_path(target, u64_at(element, 8))?;
        modules.push(ModuleRecord { load_address, path });
    }

    Ok(ImageList { build_id, directory_version: version, modules })
}

fn read_exact<T: RemoteMemory>(target: &T, addr: u64, len: usize) -> Result<Vec<u8>, ResolveError> {
    let buf = target.read(addr, len)?;
    if buf.len() != len {
        return Err(ResolveError::TruncatedRead { expected: len, actual: buf.len() });
    }
    Ok(buf)
}

fn read_path<T: RemoteMemory>(target: &T, addr: u64) -> Result<String, ResolveError> {
    // A short read is fine here, the string may sit near the end of its
    // region. What matters is that the terminator made it into the buffer.
    let buf = target.read(addr, PATH_READ_LEN)?;
    let end = buf
        .iter()
        .position(|&b| b == 0)
        .ok_or(ResolveError::InconsistentSnapshot("unterminated image path"))?;
    let path = str::from_utf8(&buf[..end])
        .map_err(|_| ResolveError::InconsistentSnapshot("image path is not utf-8"))?;
    Ok(path.to_string())
}

#[inline]
fn u32_at(buf: &[u8], off: usize) -> u32 {
    u32::from_ne_bytes([buf[off], buf[off + 1], buf[off + 2], buf[off + 3]])
}

#[inline]
fn u64_at(buf: &[u8], off: usize) -> u64 {
    u64::from_ne_bytes([
        buf[off],
        buf[off + 1],
        buf[off + 2],
        buf[off + 3],
        buf[off + 4],
        buf[off + 5],
        buf[off + 6],
        buf[off + 7],
    ])
}
