//! Repositories for the administrative stores.
//!
//! Each repository borrows a connection for its lifetime and converts entity
//! models into domain models at the boundary. Pass a `DatabaseTransaction` to
//! group several calls atomically.

pub mod detector;
pub mod label;
pub mod permission;
pub mod role;
