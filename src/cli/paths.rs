//! Path resolution utilities for CLI commands

use std::env;
use std::path::{Path, PathBuf};

use jotjot_core::store::JotStore;

/// Resolve the working root: the explicit `--root`, else the current
/// directory, else ".".
pub fn resolve_root_path(root: Option<PathBuf>) -> PathBuf {
    root.unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Resolve the store file. Relative `--store` paths are taken from `root`.
pub fn resolve_store_path(root: &Path, store: Option<&Path>) -> PathBuf {
    match store {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => root.join(path),
        None => JotStore::default_path(root),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_with_explicit_path() {
        let explicit = PathBuf::from("/tmp/test/path");
        let result = resolve_root_path(Some(explicit.clone()));
        assert_eq!(result, explicit);
    }

    #[test]
    fn test_resolve_without_path_uses_current_dir() {
        let result = resolve_root_path(None);
        if let Ok(current) = env::current_dir() {
            assert!(result == current || result == PathBuf::from("."));
        } else {
            assert_eq!(result, PathBuf::from("."));
        }
    }

    #[test]
    fn test_store_path_resolution() {
        let root = PathBuf::from("/work");
        assert_eq!(
            resolve_store_path(&root, None),
            PathBuf::from("/work/.jotjot/jots.json")
        );
        assert_eq!(
            resolve_store_path(&root, Some(Path::new("notes.yaml"))),
            PathBuf::from("/work/notes.yaml")
        );
        assert_eq!(
            resolve_store_path(&root, Some(Path::new("/elsewhere/j.json"))),
            PathBuf::from("/elsewhere/j.json")
        );
    }
}
