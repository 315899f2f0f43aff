//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`catalog`, `session`, `notice`) and each piece
//! is held in its own `RwSignal` provided via context. Transitions are plain
//! methods so they can be tested without a reactive runtime.

pub mod catalog;
pub mod notice;
pub mod session;
