//! Repository layer: one zero-sized struct per table.
//!
//! Every method takes `&mut SqliteConnection`, so callers can pass either a
//! pooled connection or an open transaction.

mod chapter_repo;
mod entry_repo;

pub use chapter_repo::ChapterRepo;
pub use entry_repo::EntryRepo;
