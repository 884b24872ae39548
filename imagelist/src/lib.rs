mod cmd;
mod error;
mod resolve;
mod utils;

pub use cmd::*;
pub use error::ResolveError;
pub use resolve::{list_images, ImageList, ModuleRecord, MAX_IMAGE_COUNT};
pub use utils::format_build_id;
