//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic so the board's behavior can be tested without a DOM.

pub mod actions;
pub mod browser;
pub mod encode;
pub mod search;
pub mod session_store;
pub mod tasks;
pub mod view_model;
