//! Executable discovery on a search path, in the manner of `which`.

use std::{
    env,
    ffi::OsStr,
    path::{Path, PathBuf},
};

use crate::{Error, Result};

/// Locates the executable `program`.
///
/// If `program` contains a path separator it is checked as is. Otherwise every directory of
/// `search_path` is tried in order, falling back to the `PATH` environment variable when no
/// search path is given. Empty and relative entries are skipped, so a match is always an
/// absolute path that does not depend on the working directory.
pub fn lookup(program: &str, search_path: Option<&OsStr>) -> Result<PathBuf> {
    let not_found = || Error::ExecutableNotFound { program: program.to_string() };

    if program.is_empty() {
        return Err(not_found());
    }

    if program.contains(std::path::MAIN_SEPARATOR) || program.contains('/') {
        let path = PathBuf::from(program);
        return if is_executable(&path) { Ok(path) } else { Err(not_found()) };
    }

    let path_var = search_path.map(OsStr::to_os_string).or_else(|| env::var_os("PATH"));
    let Some(path_var) = path_var else {
        tracing::debug!(program, "no search path available");
        return Err(not_found());
    };

    for dir in env::split_paths(&path_var) {
        if !dir.is_absolute() {
            tracing::debug!(program, ?dir, "skipping relative search path entry");
            continue;
        }

        let candidate = dir.join(program);

        if is_executable(&candidate) {
            tracing::debug!(program, path = ?candidate, "resolved executable");
            return Ok(candidate);
        }
    }

    tracing::debug!(program, search_path = ?path_var, "executable not found");
    Err(not_found())
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt as _;

    path.metadata().map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0).unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.metadata().map(|m| m.is_file()).unwrap_or(false)
}
