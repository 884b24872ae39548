use core::fmt::Display;

use argh::FromArgs;
use taskmem::Pid;

#[derive(FromArgs)]
#[argh(description = "List the executable images mapped into a process.")]
pub struct Args {
    #[argh(option, short = 'p', description = "target process id, defaults to this process")]
    pub pid: Option<Pid>,
}

pub struct Error(pub String);

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<taskmem::AttachError> for Error {
    fn from(value: taskmem::AttachError) -> Self {
        Self(value.to_string())
    }
}

impl From<super::ResolveError> for Error {
    fn from(value: super::ResolveError) -> Self {
        Self(value.to_string())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(target_os = "macos")]
impl Args {
    pub fn init(self) -> Result<(), Error> {
        use taskmem::Process;

        use super::{format_build_id, list_images};

        // Self-inspection is the boundary-layer default, the resolver only
        // ever sees an explicit pid.
        let pid = self.pid.unwrap_or(std::process::id() as Pid);
        let proc = Process::attach(pid)?;
        let list = list_images(&proc)?;

        if let Some(id) = &list.build_id {
            println!("uuid: {}", format_build_id(id));
        }
        println!("version: {}, {} images", list.directory_version, list.modules.len());
        for module in &list.modules {
            println!("{:#014x}  {}", module.load_address, module.path);
        }

        Ok(())
    }
}

#[cfg(not(target_os = "macos"))]
impl Args {
    pub fn init(self) -> Result<(), Error> {
        Err(Error::from("only macos targets are supported"))
    }
}
