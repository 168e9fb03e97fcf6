//! Person Record Subsystem
//!
//! Implements CRUD over a collection of person records persisted in a flat
//! CSV file.
//!
//! ## Core Concepts
//! - **Store**: `CsvStore` is the single source of truth. Each operation
//!   re-reads the full record set from disk and, on write paths, rewrites
//!   the whole file, all inside one mutual-exclusion lock.
//! - **Validation**: the tax code is a fixed 16-character positional
//!   pattern, checked before any uniqueness test or mutation.
//! - **Access**: axum handlers map verbs and paths onto store operations
//!   and translate failures into client or server error responses.

pub mod handlers;
pub mod protocol;
pub mod store;
pub mod taxcode;
pub mod types;
