use crate::{
    errors::{FileOperation, IoError},
    layout::{BASE_FILES, ROOT_DIR, STRUCTURE},
    materialize::{create_directory, materialize, write_file},
    report,
};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ScaffoldError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Io(#[from] IoError),
}

/// Generates the monorepo skeleton under `root` and returns `root` as an absolute,
/// canonical path.
///
/// `root` is created if missing and reused otherwise. The structure tree is
/// materialized first, then the root-level base files are written next to it. Every
/// file is overwritten unconditionally, so running this twice leaves the same contents.
///
/// # Errors
///
/// Returns a [`ScaffoldError`] if:
///
/// - `root` or one of the directories below it cannot be created.
/// - A file cannot be written, e.g. because a directory occupies its path.
/// - `root` cannot be resolved to an absolute path.
pub fn scaffold(root: &Path) -> Result<PathBuf, ScaffoldError> {
    create_directory(root)?;

    materialize(root, STRUCTURE)?;

    for (name, contents) in BASE_FILES {
        write_file(&root.join(name), contents)?;
    }

    let resolved = std::fs::canonicalize(root)
        .map_err(|error| IoError::new(FileOperation::Resolve, root.into(), error))?;

    log::debug!("scaffold resolved to {}", resolved.display());

    Ok(resolved)
}

/// Generates the skeleton into [`ROOT_DIR`] relative to the working directory,
/// reporting progress and the next manual steps on stdout.
///
/// # Errors
///
/// Returns a [`ScaffoldError`] under the same conditions as [`scaffold`].
pub fn run() -> Result<(), ScaffoldError> {
    report::print_banner();

    let resolved = scaffold(Path::new(ROOT_DIR))?;

    report::print_success(&resolved);

    Ok(())
}
