use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Whether an entry points at a file or a directory.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Directory,
    File,
}

impl EntryKind {
    /// Returns `true` for [`EntryKind::Directory`].
    pub fn is_dir(self) -> bool {
        self == Self::Directory
    }
}

/// A reference to one file or directory on the local filesystem.
///
/// `name` is what the tree displays and keys children by. Two entries with the
/// same name are not necessarily the same object; identity is decided by
/// [`crate::infra::fs::FileSystemHost::is_same_entry`].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Entry {
    pub kind: EntryKind,
    pub name: String,
    pub path: PathBuf,
}

impl Entry {
    /// Builds a directory entry named after the last component of `path`.
    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self::new(path.into(), EntryKind::Directory)
    }

    /// Builds a file entry named after the last component of `path`.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::new(path.into(), EntryKind::File)
    }

    /// Builds an entry of `kind`; filesystem roots keep their full path as
    /// name.
    pub fn new(path: PathBuf, kind: EntryKind) -> Self {
        let name = display_name(&path);

        Self { kind, name, path }
    }

    /// Returns `true` when this entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }
}

fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.to_string_lossy().to_string(),
        |name| name.to_string_lossy().to_string(),
    )
}

/// Orders entries with directories first, then by case-insensitive name.
///
/// Entries whose kind and lowercase name match compare as equal, so a stable
/// sort keeps them in the order the filesystem reported them.
pub fn compare_entries(first: &Entry, second: &Entry) -> Ordering {
    second
        .is_dir()
        .cmp(&first.is_dir())
        .then_with(|| first.name.to_lowercase().cmp(&second.name.to_lowercase()))
}

/// Sorts `items` in place with [`compare_entries`] applied to the entry each
/// item exposes.
pub fn sort_by_entry<T>(items: &mut [T], entry: impl Fn(&T) -> &Entry) {
    items.sort_by(|first, second| compare_entries(entry(first), entry(second)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|entry| entry.name.as_str()).collect()
    }

    #[test]
    fn test_directory_uses_last_path_component_as_name() {
        // Arrange
        let path = PathBuf::from("/home/user/projects/arbor");

        // Act
        let entry = Entry::directory(path.clone());

        // Assert
        assert_eq!(entry.name, "arbor");
        assert_eq!(entry.path, path);
        assert!(entry.is_dir());
    }

    #[test]
    fn test_filesystem_root_keeps_full_path_as_name() {
        // Arrange & Act
        let entry = Entry::directory("/");

        // Assert
        assert_eq!(entry.name, "/");
    }

    #[test]
    fn test_sort_places_directories_before_files() {
        // Arrange
        let mut entries = vec![Entry::file("/root/b.txt"), Entry::directory("/root/A")];

        // Act
        sort_by_entry(&mut entries, |entry| entry);

        // Assert
        assert_eq!(names(&entries), vec!["A", "b.txt"]);
    }

    #[test]
    fn test_sort_ignores_case_within_same_kind() {
        // Arrange
        let mut entries = vec![
            Entry::file("/root/zeta.rs"),
            Entry::file("/root/Alpha.rs"),
            Entry::file("/root/beta.rs"),
            Entry::directory("/root/src"),
            Entry::directory("/root/Docs"),
        ];

        // Act
        sort_by_entry(&mut entries, |entry| entry);

        // Assert
        assert_eq!(
            names(&entries),
            vec!["Docs", "src", "Alpha.rs", "beta.rs", "zeta.rs"]
        );
    }

    #[test]
    fn test_sort_keeps_host_order_for_case_only_differences() {
        // Arrange
        let mut entries = vec![
            Entry::file("/root/README"),
            Entry::file("/root/readme"),
            Entry::file("/root/Readme"),
        ];

        // Act
        sort_by_entry(&mut entries, |entry| entry);

        // Assert
        assert_eq!(names(&entries), vec!["README", "readme", "Readme"]);
    }

    #[test]
    fn test_compare_entries_is_equal_for_same_kind_and_lowercase_name() {
        // Arrange
        let first = Entry::directory("/a/Src");
        let second = Entry::directory("/b/src");

        // Act
        let ordering = compare_entries(&first, &second);

        // Assert
        assert_eq!(ordering, Ordering::Equal);
    }

    #[test]
    fn test_entry_serializes_kind_in_snake_case() {
        // Arrange
        let entry = Entry::directory("/tmp/project");

        // Act
        let json = serde_json::to_string(&entry).expect("failed to serialize entry");

        // Assert
        assert!(json.contains(r#""kind":"directory""#));
    }
}
