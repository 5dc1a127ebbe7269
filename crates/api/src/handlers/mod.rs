//! Request handlers.
//!
//! Handlers validate input, call the repositories in `graphy_db` and the
//! media store, and answer with a [`View`](crate::views::View), a redirect,
//! or a file.

pub mod chapter;
pub mod entry;
pub mod media;
pub mod pages;
