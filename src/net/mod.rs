//! Networking modules for the activity REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the four HTTP calls the board needs, and `types` defines the
//! JSON shapes exchanged with the server.

pub mod api;
pub mod types;
