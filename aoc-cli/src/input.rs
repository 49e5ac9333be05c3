//! Puzzle input lookup on the local filesystem

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-based store of puzzle inputs
///
/// Directory structure: `{base_dir}/day{day:02}/input.txt`
#[derive(Debug, Clone)]
pub struct InputStore {
    base_dir: PathBuf,
}

impl InputStore {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the input path for a specific day
    pub fn input_path(&self, day: u8) -> PathBuf {
        self.base_dir
            .join(format!("day{day:02}"))
            .join("input.txt")
    }

    /// Read the day's input from the store
    pub fn get(&self, day: u8) -> Result<String, InputError> {
        read_input(day, &self.input_path(day))
    }
}

/// Read an input file, reporting a missing file as [`InputError::NotFound`]
pub fn read_input(day: u8, path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => InputError::NotFound {
            day,
            path: path.to_path_buf(),
        },
        _ => InputError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_input_path_format() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        let path = store.input_path(1);
        assert!(path.ends_with("day01/input.txt"));

        let path = store.input_path(25);
        assert!(path.ends_with("day25/input.txt"));
    }

    #[test]
    fn test_read_existing_input() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        assert!(matches!(store.get(7), Err(InputError::NotFound { day: 7, .. })));
        fs::create_dir_all(temp.path().join("day07")).unwrap();
        fs::write(store.input_path(7), "190: 10 19\n").unwrap();

        assert_eq!(store.get(7).unwrap(), "190: 10 19\n");
    }

    #[test]
    fn test_missing_input() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        match store.get(3) {
            Err(InputError::NotFound { day, path }) => {
                assert_eq!(day, 3);
                assert_eq!(path, store.input_path(3));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_directory_is_not_input() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        fs::create_dir_all(store.input_path(4)).unwrap();

        assert!(!store.input_path(4).is_file());
        assert!(matches!(store.get(4), Err(InputError::Io { .. })));
    }
}
