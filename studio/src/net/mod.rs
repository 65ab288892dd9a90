//! Network boundary to the overlay backend.
//!
//! `types` holds the wire DTOs and the default-filling parse into engine
//! entities; `api` makes the HTTP calls; `sync` persists engine actions
//! fire-and-forget so no network failure can reach the interaction path.

pub mod api;
pub mod sync;
pub mod types;
