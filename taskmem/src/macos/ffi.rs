#![allow(non_camel_case_types)]

//! Mach surface that mach2 does not bind (osfmk/mach/task_info.h,
//! mach/mach_error.h).

use core::{ffi::c_char, mem};

use mach2::{kern_return::kern_return_t, message::mach_msg_type_number_t, vm_types::natural_t};

extern "C" {
    pub fn mach_error_string(error_value: kern_return_t) -> *const c_char;
}

pub const TASK_EXTMOD_INFO: natural_t = 19;

#[repr(C)]
#[derive(Clone, Copy)]
pub struct vm_extmod_statistics {
    pub task_for_pid_count: i64,
    pub task_for_pid_caller_count: i64,
    pub thread_creation_count: i64,
    pub thread_creation_caller_count: i64,
    pub thread_set_state_count: i64,
    pub thread_set_state_caller_count: i64,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct task_extmod_info {
    pub task_uuid: [u8; 16],
    pub extmod_statistics: vm_extmod_statistics,
}

pub const TASK_EXTMOD_INFO_COUNT: mach_msg_type_number_t =
    (mem::size_of::<task_extmod_info>() / mem::size_of::<natural_t>()) as mach_msg_type_number_t;
