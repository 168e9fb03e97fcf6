//! Person Registry Service Library
//!
//! This library crate defines the core of the registry service. It serves as
//! the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture
//! The service is a thin HTTP boundary over a file-backed record store:
//!
//! - **`persons`**: The record subsystem. Owns the persisted collection
//!   (`CsvStore`), the tax-code format validator, the wire DTOs, and the
//!   HTTP handlers that translate store results into status codes.
//!
//! All record state lives in a single comma-separated file; every operation
//! that touches it runs under one process-wide lock, so concurrent requests
//! never interleave their read-modify-write cycles.

pub mod persons;
