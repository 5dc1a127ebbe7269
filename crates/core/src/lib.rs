//! Domain logic for Graphy entries and chapters.
//!
//! Everything here is pure: no database, filesystem, or HTTP access. The
//! `graphy-db` and `graphy-api` crates build on these types.

pub mod chapters;
pub mod error;
pub mod types;
pub mod upload;
