//! User registration and login backend.
//!
//! Layers follow the usual hexagonal split: `domain` holds entities, ports
//! and the credential service, `application` the use cases, `infrastructure`
//! the SQLite store, Argon2 hasher and configuration, and `adapters` the
//! actix-web surface.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;
