//! Async HTTP client for filling in license data the manifest lacks.
//!
//! [`crates_io::fetch_license`] returns `Ok(Some(license_string))` on success,
//! `Ok(None)` when the crate version is not found or has no license field,
//! and `Err` on network failures.

pub mod crates_io;
