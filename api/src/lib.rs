//! # API crate — typed REST client for the StudentConnect backend
//!
//! Everything the frontend knows about the backend lives here: the wire
//! models, one endpoint module per resource group, the shared HTTP plumbing,
//! and the persisted session credentials. Views never build requests or parse
//! JSON themselves.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | base URL, bearer attachment, central 401 handling, error-body decoding |
//! | [`session`] | persisted token + cached user (localStorage on wasm, in-process natively) |
//! | [`models`] | typed entities, page envelopes, and request bodies |
//! | [`auth`] | register / login / logout / me / change-password |
//! | [`users`] | profile CRUD and per-user membership lists |
//! | [`communities`], [`projects`] | list / CRUD / join / leave / members |
//! | [`events`] | list / CRUD / register / unregister / attendees |
//! | [`tutorials`] | list / CRUD / categories |
//! | [`posts`] | community feeds, likes, comments |
//! | [`messages`] | threads, send, mark-read, conversations, unread count |
//!
//! ## Cross-cutting behavior
//!
//! - `Authorization: Bearer <token>` is attached whenever a token is
//!   persisted.
//! - Any 401 clears the persisted session and redirects the browser to
//!   `/login`, no matter which endpoint produced it.
//! - Other non-2xx responses become [`ApiError::Api`] carrying the server's
//!   message verbatim.
//! - After any mutation the owning view refetches; nothing here merges state
//!   optimistically.

pub mod auth;
pub mod client;
pub mod communities;
mod error;
pub mod events;
pub mod messages;
pub mod models;
pub mod posts;
pub mod projects;
pub mod session;
pub mod tutorials;
pub mod users;

pub use error::ApiError;
pub use models::*;
