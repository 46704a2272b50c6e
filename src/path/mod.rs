//! Path canonicalization: tilde expansion, lexical cleaning, absolutization.

pub mod clean;
pub mod resolver;

pub use clean::clean;
pub use resolver::{
    expand_tilde, resolve, resolve_with, PathResolver, ResolveContext, DEFAULT_HOME_ENV_VAR,
};
