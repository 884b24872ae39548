pub(crate) mod ffi;
mod proc;

pub use proc::Process;
