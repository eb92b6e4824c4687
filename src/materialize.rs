use crate::{
    errors::{FileOperation, IoError},
    tree::{Entry, Node},
};
use colored::Colorize;
use std::path::Path;

/// Recursively creates every entry of `entries` below `base`.
///
/// Directories are created if missing and then descended into; files are created or
/// truncated and written with their literal contents. Anything already under `base`
/// that the tree does not name is left alone.
///
/// # Errors
///
/// Returns an [`IoError`] for the first directory or file that cannot be created, for
/// instance when a file sits where the tree expects a directory (or the reverse).
pub fn materialize(base: &Path, entries: &[Entry]) -> Result<(), IoError> {
    log::debug!("materializing {} entries under {}", entries.len(), base.display());

    for entry in entries {
        let path = base.join(entry.name);

        match entry.node {
            Node::Directory(children) => {
                create_directory(&path)?;

                materialize(&path, children)?;
            }
            Node::File(contents) => {
                write_file(&path, contents)?;
            }
        }
    }

    Ok(())
}
/// Creates all directories in the specified path if they do not exist.
///
/// # Errors
///
/// Returns an [`IoError`] if any directory creation fails due to I/O issues.
pub fn create_directory(path: &Path) -> Result<(), IoError> {
    std::fs::create_dir_all(path)
        .map_err(|error| IoError::new(FileOperation::Mkdir, path.into(), error))?;

    log::debug!("directory ready: {}", path.display());

    Ok(())
}
/// Writes a file with the provided contents to the specified path, replacing any
/// previous contents, and prints a `create` line for it.
///
/// # Errors
///
/// Returns an [`IoError`] if writing to the file fails due to I/O issues.
pub fn write_file(path: &Path, contents: &str) -> Result<(), IoError> {
    std::fs::write(path, contents)
        .map_err(|error| IoError::new(FileOperation::Write, path.into(), error))?;

    let msg = format!("{} {}", "create".green(), path.display());

    println!("{}", &msg);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{dir, file};
    use std::fs;

    static TREE: &[Entry] = &[
        dir(
            "apps",
            &[dir(
                "backend",
                &[file("package.json", "{}"), file("empty.ts", "")],
            )],
        ),
        file("README.md", "# readme\n"),
    ];

    #[test]
    fn creates_directories_and_files() {
        let tmp = tempfile::tempdir().unwrap();

        materialize(tmp.path(), TREE).unwrap();

        assert!(tmp.path().join("apps/backend").is_dir());
        assert_eq!(
            fs::read_to_string(tmp.path().join("apps/backend/package.json")).unwrap(),
            "{}"
        );
        assert_eq!(
            fs::read(tmp.path().join("apps/backend/empty.ts")).unwrap(),
            Vec::<u8>::new()
        );
        assert_eq!(
            fs::read_to_string(tmp.path().join("README.md")).unwrap(),
            "# readme\n"
        );
    }

    #[test]
    fn overwrites_existing_files_and_keeps_unrelated_ones() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("apps/backend")).unwrap();
        fs::write(
            tmp.path().join("apps/backend/package.json"),
            "a much longer stale body",
        )
        .unwrap();
        fs::write(tmp.path().join("apps/keep.txt"), "mine").unwrap();

        materialize(tmp.path(), TREE).unwrap();

        assert_eq!(
            fs::read_to_string(tmp.path().join("apps/backend/package.json")).unwrap(),
            "{}"
        );
        assert_eq!(
            fs::read_to_string(tmp.path().join("apps/keep.txt")).unwrap(),
            "mine"
        );
    }

    #[test]
    fn second_run_is_identical() {
        let tmp = tempfile::tempdir().unwrap();

        materialize(tmp.path(), TREE).unwrap();
        let first = fs::read_to_string(tmp.path().join("README.md")).unwrap();

        materialize(tmp.path(), TREE).unwrap();
        let second = fs::read_to_string(tmp.path().join("README.md")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn file_in_place_of_directory_fails() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("apps"), "not a directory").unwrap();

        let error = materialize(tmp.path(), TREE).unwrap_err();

        assert!(matches!(error.operation, FileOperation::Mkdir));
        assert_eq!(error.path, tmp.path().join("apps"));
    }

    #[test]
    fn directory_in_place_of_file_fails() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("README.md")).unwrap();

        let error = materialize(tmp.path(), TREE).unwrap_err();

        assert!(matches!(error.operation, FileOperation::Write));
        assert_eq!(error.path, tmp.path().join("README.md"));
    }

    #[test]
    fn missing_base_is_created() {
        let tmp = tempfile::tempdir().unwrap();
        let base = tmp.path().join("nested/root");

        materialize(&base, TREE).unwrap();

        assert!(base.join("apps/backend/package.json").is_file());
    }
}
