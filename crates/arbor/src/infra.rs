//! Infrastructure adapters for the local filesystem and persistent storage.

pub mod db;
/// Filesystem listing, access checks, and entry identity.
pub mod fs;
