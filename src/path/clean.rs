use std::path::{Component, Path, PathBuf};

/// Lexically clean a path without touching the filesystem.
///
/// - repeated separators and trailing separators are dropped
/// - `.` segments are removed
/// - `..` removes the preceding normal segment; directly under the root it is
///   dropped, and leading `..` of a relative path is kept
///
/// An empty result becomes `.`. Symlinks are not resolved, so
/// `/home/user/../bob` cleans to `/home/bob` whether or not `/home/user`
/// exists.
pub fn clean(path: &Path) -> PathBuf {
    let mut out: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }

    if out.is_empty() {
        return PathBuf::from(".");
    }

    out.iter().collect()
}
