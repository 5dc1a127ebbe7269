//! Graphy API server library.
//!
//! Exposes the building blocks (config, state, media store, views, routes)
//! so integration tests and the binary entrypoint can both access them.

pub mod config;
pub mod error;
pub mod form;
pub mod handlers;
pub mod media;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod state;
pub mod views;
