pub mod app;
pub mod cli;
pub mod error;
pub mod file;
pub mod path;
pub mod util;

pub use app::config::Config;
pub use error::{FsError, FsResult};
pub use file::{Shredder, shred};
pub use path::{PathResolver, ResolveContext, resolve};
