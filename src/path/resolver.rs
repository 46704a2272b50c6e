use super::clean::clean;
use std::path::{Path, PathBuf, is_separator};

/// Default environment variable overriding the home directory for `~`
pub const DEFAULT_HOME_ENV_VAR: &str = "FSUTIL_HOMEDIR";

/// Process state a resolution depends on.
///
/// Captured on demand with [`ResolveContext::from_process`], or built by hand
/// so resolution can be tested without touching the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveContext {
    /// Home directory used for `~` expansion
    pub home: Option<PathBuf>,
    /// Working directory used to absolutize relative paths
    pub cwd: Option<PathBuf>,
}

impl ResolveContext {
    pub fn new(home: Option<PathBuf>, cwd: Option<PathBuf>) -> Self {
        Self { home, cwd }
    }

    /// Read the home directory and working directory of this process.
    ///
    /// Home directory priority:
    /// 1. `home_env_var` if set and non-empty
    /// 2. OS-reported home of the current user
    pub fn from_process(home_env_var: &str) -> Self {
        let home = match std::env::var_os(home_env_var) {
            Some(dir) if !dir.is_empty() => {
                tracing::trace!("Using home directory override from {}: {:?}", home_env_var, dir);
                Some(PathBuf::from(dir))
            }
            _ => dirs::home_dir(),
        };

        let cwd = match std::env::current_dir() {
            Ok(dir) => Some(dir),
            Err(e) => {
                tracing::warn!("Could not determine working directory: {}", e);
                None
            }
        };

        Self { home, cwd }
    }
}

/// Replace a leading `~` with `home`.
///
/// Only `~` alone or `~` followed by a separator is expanded; `~user` is not.
/// Returns `None` when the path has no expandable tilde or no home is known.
pub fn expand_tilde(path: &str, home: Option<&Path>) -> Option<PathBuf> {
    let rest = path.strip_prefix('~')?;
    if !rest.is_empty() && !rest.starts_with(is_separator) {
        return None;
    }
    let home = home?;
    // "~//x" must stay under home rather than becoming "/x"
    let tail = rest.trim_start_matches(is_separator);
    Some(home.join(tail))
}

/// Resolve `path` into an absolute, lexically cleaned path using `ctx`.
///
/// Tilde expansion happens before cleaning, so `~/../x` is taken relative to
/// the home directory. Relative results are joined with `ctx.cwd`; without a
/// working directory the cleaned relative path is returned.
pub fn resolve_with(path: &str, ctx: &ResolveContext) -> PathBuf {
    let expanded = match expand_tilde(path, ctx.home.as_deref()) {
        Some(p) => p,
        None => {
            if path.starts_with('~') && ctx.home.is_none() {
                tracing::warn!("Home directory unknown, leaving {:?} unexpanded", path);
            }
            PathBuf::from(path)
        }
    };

    let cleaned = clean(&expanded);
    if cleaned.is_absolute() {
        return cleaned;
    }

    match &ctx.cwd {
        Some(cwd) => clean(&cwd.join(cleaned)),
        None => cleaned,
    }
}

/// Canonicalizes user-supplied paths for the storage layer.
///
/// Process state is read on every call, so a changed override variable or
/// working directory is picked up immediately.
#[derive(Debug, Clone)]
pub struct PathResolver {
    home_env_var: String,
}

impl PathResolver {
    pub fn new() -> Self {
        Self::with_home_env_var(DEFAULT_HOME_ENV_VAR)
    }

    /// Use a different environment variable for the home override
    pub fn with_home_env_var(name: impl Into<String>) -> Self {
        Self {
            home_env_var: name.into(),
        }
    }

    pub fn home_env_var(&self) -> &str {
        &self.home_env_var
    }

    /// Snapshot of the process state this resolver would use right now
    pub fn context(&self) -> ResolveContext {
        ResolveContext::from_process(&self.home_env_var)
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        let resolved = resolve_with(path, &self.context());
        tracing::debug!("Resolved {:?} -> {:?}", path, resolved);
        resolved
    }
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve `path` using [`DEFAULT_HOME_ENV_VAR`] for the home override
pub fn resolve(path: &str) -> PathBuf {
    PathResolver::new().resolve(path)
}
