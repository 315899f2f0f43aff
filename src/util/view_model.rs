//! Pure render model for the activity board.
//!
//! DESIGN
//! ======
//! What the board shows is a function of the catalog state, the search query
//! and whether a session token is present. Computing that as plain data keeps
//! the Leptos components thin and lets the rules be tested on the host.

#[cfg(test)]
#[path = "view_model_test.rs"]
mod view_model_test;

use crate::net::types::{Activity, Catalog};
use crate::state::catalog::{CatalogState, LoadStatus};

pub const LOADING_TEXT: &str = "Loading activities...";
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";
pub const NO_MATCHES_TEXT: &str = "No activities match your search.";
pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet";

/// What the activity list area currently shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardView {
    Loading,
    LoadFailed,
    /// Nothing to show after filtering.
    Empty,
    Cards(Vec<CardView>),
}

impl BoardView {
    /// Placeholder text for non-card states.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Loading => Some(LOADING_TEXT),
            Self::LoadFailed => Some(LOAD_FAILED_TEXT),
            Self::Empty => Some(NO_MATCHES_TEXT),
            Self::Cards(_) => None,
        }
    }

    pub fn cards(&self) -> &[CardView] {
        match self {
            Self::Cards(cards) => cards,
            _ => &[],
        }
    }
}

/// One rendered activity card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<ParticipantRow>,
    /// Register control shown (session present at render time).
    pub can_register: bool,
}

impl CardView {
    pub fn availability_text(&self) -> String {
        format!("{} spots left", self.spots_left)
    }
}

/// One participant line on a card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParticipantRow {
    pub email: String,
    /// Removal control shown (session present at render time).
    pub removable: bool,
}

/// Build the card for a single activity.
pub fn card_view(name: &str, activity: &Activity, authenticated: bool) -> CardView {
    CardView {
        name: name.to_owned(),
        description: activity.description.clone(),
        schedule: activity.schedule.clone(),
        spots_left: activity.spots_left(),
        participants: activity
            .participants
            .iter()
            .map(|email| ParticipantRow { email: email.clone(), removable: authenticated })
            .collect(),
        can_register: authenticated,
    }
}

/// Render an already-filtered catalog: placeholder when empty, else one card
/// per entry in catalog order.
pub fn render_catalog(activities: &Catalog, authenticated: bool) -> BoardView {
    if activities.is_empty() {
        return BoardView::Empty;
    }
    BoardView::Cards(
        activities
            .iter()
            .map(|(name, activity)| card_view(name, activity, authenticated))
            .collect(),
    )
}

/// Full board view from the current catalog state and session presence.
pub fn board_view(state: &CatalogState, authenticated: bool) -> BoardView {
    match state.status {
        LoadStatus::Loading => BoardView::Loading,
        LoadStatus::Failed => BoardView::LoadFailed,
        LoadStatus::Loaded => render_catalog(&state.visible(), authenticated),
    }
}
