//! Reusable UI components for the activity board.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state from context and delegate request sequencing
//! to `util::tasks`, so they stay declarative.

pub mod activity_card;
pub mod auth_controls;
pub mod login_modal;
pub mod notice_banner;
pub mod search_box;
