use core::mem;

use mach2::{
    kern_return::{KERN_INVALID_ARGUMENT, KERN_SUCCESS},
    message::mach_msg_type_number_t,
    port::{mach_port_name_t, MACH_PORT_NULL},
    task::task_info,
    task_info::{task_dyld_info, task_info_t, TASK_DYLD_INFO},
    traps::{mach_task_self, task_for_pid},
    vm::mach_vm_read_overwrite,
    vm_types::{mach_vm_address_t, mach_vm_size_t, natural_t},
};

use super::ffi;
use crate::{AttachError, ImageDirectory, Pid, QueryError, ReadError, RemoteMemory, TaskInspect};

const TASK_DYLD_INFO_COUNT: mach_msg_type_number_t =
    (mem::size_of::<task_dyld_info>() / mem::size_of::<natural_t>()) as mach_msg_type_number_t;

pub struct Process {
    pid: Pid,
    task: mach_port_name_t,
}

impl Process {
    pub fn attach(pid: Pid) -> Result<Self, AttachError> {
        let mut task: mach_port_name_t = MACH_PORT_NULL;
        let kr = unsafe { task_for_pid(mach_task_self(), pid, &mut task) };
        if kr != KERN_SUCCESS {
            return Err(AttachError { status: kr });
        }
        Ok(Self { pid, task })
    }

    pub fn pid(&self) -> Pid {
        self.pid
    }
}

impl RemoteMemory for Process {
    fn read(&self, addr: u64, len: usize) -> Result<Vec<u8>, ReadError> {
        if len == 0 {
            return Err(ReadError { status: KERN_INVALID_ARGUMENT });
        }
        let mut buf = vec![0_u8; len];
        let mut outsize: mach_vm_size_t = 0;
        let kr = unsafe {
            mach_vm_read_overwrite(
                self.task,
                addr,
                len as mach_vm_size_t,
                buf.as_mut_ptr() as mach_vm_address_t,
                &mut outsize,
            )
        };
        if kr != KERN_SUCCESS {
            return Err(ReadError { status: kr });
        }
        buf.truncate(outsize as usize);
        Ok(buf)
    }
}

impl TaskInspect for Process {
    fn image_directory(&self) -> Result<ImageDirectory, QueryError> {
        let mut dyld_info = unsafe { mem::zeroed::<task_dyld_info>() };
        let mut count = TASK_DYLD_INFO_COUNT;
        let kr = unsafe {
            task_info(
                self.task,
                TASK_DYLD_INFO,
                &mut dyld_info as *mut task_dyld_info as task_info_t,
                &mut count,
            )
        };
        if kr != KERN_SUCCESS {
            return Err(QueryError { status: kr });
        }
        Ok(ImageDirectory {
            address: dyld_info.all_image_info_addr,
            format: dyld_info.all_image_info_format,
        })
    }

    fn build_identifier(&self) -> Result<[u8; 16], QueryError> {
        let mut extmod_info = unsafe { mem::zeroed::<ffi::task_extmod_info>() };
        let mut count = ffi::TASK_EXTMOD_INFO_COUNT;
        let kr = unsafe {
            task_info(
                self.task,
                ffi::TASK_EXTMOD_INFO,
                &mut extmod_info as *mut ffi::task_extmod_info as task_info_t,
                &mut count,
            )
        };
        if kr != KERN_SUCCESS {
            return Err(QueryError { status: kr });
        }
        Ok(extmod_info.task_uuid)
    }
}
