//! Local filesystem boundary: directory listing, access checks, and entry
//! identity.

use std::collections::HashSet;
use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use thiserror::Error;
use tracing::debug;

use crate::domain::entry::{Entry, EntryKind};
use crate::domain::permission::{PermissionMode, PermissionState};

/// Boxed async result used by [`FileSystemHost`] trait methods.
pub type FsFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Failure reported by the filesystem while reading an entry.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("`{}` is not a directory", .path.display())]
    NotADirectory { path: PathBuf },
    #[error("`{}` no longer exists", .path.display())]
    NotFound { path: PathBuf },
    #[error("access to `{}` was denied", .path.display())]
    PermissionDenied { path: PathBuf },
    #[error("failed to read `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FsError {
    /// Classifies an I/O error raised while accessing `path`.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();

        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            io::ErrorKind::NotADirectory => Self::NotADirectory { path },
            _ => Self::Io { path, source },
        }
    }
}

/// Async filesystem boundary used by the tree view and the root controller.
///
/// Production uses [`NativeFileSystem`], while tests can inject
/// `MockFileSystemHost` to script listings, permission outcomes, and identity
/// checks.
#[cfg_attr(test, mockall::automock)]
pub trait FileSystemHost: Send + Sync {
    /// Returns the immediate children of the directory `entry` in the order
    /// the filesystem reports them.
    ///
    /// # Errors
    /// Returns an error when the directory is gone, unreadable, or not a
    /// directory.
    fn list_directory(&self, entry: Entry) -> FsFuture<Result<Vec<Entry>, FsError>>;

    /// Reports whether `entry` can be used with `mode` without asking the
    /// user.
    fn query_permission(&self, entry: Entry, mode: PermissionMode) -> FsFuture<PermissionState>;

    /// Confirms access to `entry` after the user agreed to reuse it.
    ///
    /// Returns [`PermissionState::Granted`] and remembers the grant for the
    /// rest of the process when the filesystem allows `mode`.
    fn request_permission(&self, entry: Entry, mode: PermissionMode)
    -> FsFuture<PermissionState>;

    /// Records that `entry` was authorized by the act of picking it.
    fn grant(&self, entry: Entry, mode: PermissionMode);

    /// Returns whether both entries denote the same filesystem object,
    /// regardless of their names.
    fn is_same_entry(&self, first: Entry, second: Entry) -> FsFuture<bool>;
}

/// [`FileSystemHost`] backed by the local filesystem through `tokio::fs`.
///
/// Grants live only in memory, so entries restored from a previous run must
/// be confirmed again before reuse.
#[derive(Clone, Default)]
pub struct NativeFileSystem {
    grants: Arc<Mutex<HashSet<(PathBuf, PermissionMode)>>>,
}

impl NativeFileSystem {
    /// Creates a filesystem host with no recorded grants.
    pub fn new() -> Self {
        Self::default()
    }

    fn record_grant(&self, path: PathBuf, mode: PermissionMode) {
        if let Ok(mut grants) = self.grants.lock() {
            grants.insert((path, mode));
        }
    }

    fn has_grant(&self, path: &Path, mode: PermissionMode) -> bool {
        let Ok(grants) = self.grants.lock() else {
            return false;
        };
        let covering_modes: &[PermissionMode] = match mode {
            PermissionMode::Read => &[PermissionMode::Read, PermissionMode::ReadWrite],
            PermissionMode::ReadWrite => &[PermissionMode::ReadWrite],
        };

        covering_modes
            .iter()
            .any(|covering_mode| grants.contains(&(path.to_path_buf(), *covering_mode)))
    }
}

impl FileSystemHost for NativeFileSystem {
    fn list_directory(&self, entry: Entry) -> FsFuture<Result<Vec<Entry>, FsError>> {
        Box::pin(async move { list_directory(&entry.path).await })
    }

    fn query_permission(&self, entry: Entry, mode: PermissionMode) -> FsFuture<PermissionState> {
        let host = self.clone();

        Box::pin(async move {
            if let Err(error) = check_access(&entry.path, mode).await {
                debug!(path = %entry.path.display(), %mode, %error, "permission query denied");

                return PermissionState::Denied;
            }

            if host.has_grant(&entry.path, mode) {
                PermissionState::Granted
            } else {
                PermissionState::Prompt
            }
        })
    }

    fn request_permission(
        &self,
        entry: Entry,
        mode: PermissionMode,
    ) -> FsFuture<PermissionState> {
        let host = self.clone();

        Box::pin(async move {
            if let Err(error) = check_access(&entry.path, mode).await {
                debug!(path = %entry.path.display(), %mode, %error, "permission request denied");

                return PermissionState::Denied;
            }

            host.record_grant(entry.path, mode);

            PermissionState::Granted
        })
    }

    fn grant(&self, entry: Entry, mode: PermissionMode) {
        self.record_grant(entry.path, mode);
    }

    fn is_same_entry(&self, first: Entry, second: Entry) -> FsFuture<bool> {
        Box::pin(async move {
            let Some(first_identity) = entry_identity(&first.path).await else {
                return false;
            };
            let Some(second_identity) = entry_identity(&second.path).await else {
                return false;
            };

            first_identity == second_identity
        })
    }
}

async fn list_directory(path: &Path) -> Result<Vec<Entry>, FsError> {
    let mut read_dir = tokio::fs::read_dir(path)
        .await
        .map_err(|error| FsError::from_io(path, error))?;
    let mut children = Vec::new();

    while let Some(dir_entry) = read_dir
        .next_entry()
        .await
        .map_err(|error| FsError::from_io(path, error))?
    {
        let kind = entry_kind(&dir_entry).await;
        children.push(Entry::new(dir_entry.path(), kind));
    }

    Ok(children)
}

/// Classifies one listed child, following symlinks to their target.
///
/// A dangling or unreadable link is reported as a file.
async fn entry_kind(dir_entry: &tokio::fs::DirEntry) -> EntryKind {
    let Ok(file_type) = dir_entry.file_type().await else {
        return EntryKind::File;
    };

    if file_type.is_dir() {
        return EntryKind::Directory;
    }

    if file_type.is_symlink()
        && tokio::fs::metadata(dir_entry.path())
            .await
            .is_ok_and(|metadata| metadata.is_dir())
    {
        return EntryKind::Directory;
    }

    EntryKind::File
}

/// Verifies the OS currently allows `mode` access to `path`.
async fn check_access(path: &Path, mode: PermissionMode) -> Result<(), FsError> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|error| FsError::from_io(path, error))?;

    if metadata.is_dir() {
        tokio::fs::read_dir(path)
            .await
            .map_err(|error| FsError::from_io(path, error))?;
    } else {
        tokio::fs::File::open(path)
            .await
            .map_err(|error| FsError::from_io(path, error))?;
    }

    if mode == PermissionMode::ReadWrite && metadata.permissions().readonly() {
        return Err(FsError::PermissionDenied {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}

#[cfg(unix)]
type EntryIdentity = (u64, u64);

#[cfg(not(unix))]
type EntryIdentity = PathBuf;

/// Returns the device and inode pair identifying `path`.
#[cfg(unix)]
async fn entry_identity(path: &Path) -> Option<EntryIdentity> {
    use std::os::unix::fs::MetadataExt;

    let metadata = tokio::fs::metadata(path).await.ok()?;

    Some((metadata.dev(), metadata.ino()))
}

/// Returns the canonical path identifying `path`.
#[cfg(not(unix))]
async fn entry_identity(path: &Path) -> Option<EntryIdentity> {
    tokio::fs::canonicalize(path).await.ok()
}
