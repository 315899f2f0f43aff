use super::*;

// =============================================================
// Helpers
// =============================================================

fn chess_catalog() -> Catalog {
    vec![(
        "Chess Club".to_owned(),
        Activity {
            description: "Learn chess".to_owned(),
            schedule: "Fridays".to_owned(),
            max_participants: 10,
            participants: vec!["a@x.com".to_owned()],
        },
    )]
    .into_iter()
    .collect()
}

fn loaded(catalog: Catalog) -> CatalogState {
    let mut state = CatalogState::default();
    let seq = state.begin_fetch();
    state.apply_fetch::<()>(seq, Ok(catalog));
    state
}

// =============================================================
// Rendering
// =============================================================

#[test]
fn empty_catalog_renders_placeholder_and_no_cards() {
    let view = render_catalog(&Catalog::new(), true);
    assert_eq!(view, BoardView::Empty);
    assert_eq!(view.placeholder(), Some(NO_MATCHES_TEXT));
    assert!(view.cards().is_empty());
}

#[test]
fn anonymous_card_has_no_controls() {
    let view = render_catalog(&chess_catalog(), false);
    let cards = view.cards();
    assert_eq!(cards.len(), 1);
    let card = &cards[0];
    assert_eq!(card.name, "Chess Club");
    assert_eq!(card.spots_left, 9);
    assert_eq!(card.availability_text(), "9 spots left");
    assert!(!card.can_register);
    assert!(card.participants.iter().all(|row| !row.removable));
}

#[test]
fn authenticated_card_has_register_and_delete_controls() {
    let view = render_catalog(&chess_catalog(), true);
    let card = &view.cards()[0];
    assert!(card.can_register);
    assert_eq!(card.participants, vec![ParticipantRow { email: "a@x.com".to_owned(), removable: true }]);
}

#[test]
fn over_allocated_capacity_is_rendered_negative() {
    let activity = Activity {
        description: "d".to_owned(),
        schedule: "s".to_owned(),
        max_participants: 0,
        participants: vec!["a@x.com".to_owned(), "a@x.com".to_owned()],
    };
    let card = card_view("Full", &activity, false);
    assert_eq!(card.spots_left, -2);
    assert_eq!(card.availability_text(), "-2 spots left");
}

#[test]
fn cards_follow_catalog_order() {
    let mut catalog = chess_catalog();
    catalog.insert(
        "Art Club",
        Activity {
            description: "Paint".to_owned(),
            schedule: "Thursdays".to_owned(),
            max_participants: 15,
            participants: Vec::new(),
        },
    );
    let view = render_catalog(&catalog, false);
    let names: Vec<&str> = view.cards().iter().map(|card| card.name.as_str()).collect();
    assert_eq!(names, vec!["Chess Club", "Art Club"]);
}

// =============================================================
// Board state
// =============================================================

#[test]
fn board_shows_loading_before_first_fetch() {
    let view = board_view(&CatalogState::default(), false);
    assert_eq!(view.placeholder(), Some(LOADING_TEXT));
}

#[test]
fn board_shows_failure_placeholder() {
    let mut state = CatalogState::default();
    let seq = state.begin_fetch();
    state.apply_fetch(seq, Err("offline"));
    let view = board_view(&state, true);
    assert_eq!(view, BoardView::LoadFailed);
    assert_eq!(view.placeholder(), Some(LOAD_FAILED_TEXT));
}

#[test]
fn matching_query_keeps_card() {
    let mut state = loaded(chess_catalog());
    state.set_query("chess");
    assert_eq!(board_view(&state, false).cards().len(), 1);
}

#[test]
fn unmatched_query_shows_no_matches() {
    let mut state = loaded(chess_catalog());
    state.set_query("math");
    assert_eq!(board_view(&state, false), BoardView::Empty);
}

#[test]
fn controls_track_session_presence_at_render_time() {
    let state = loaded(chess_catalog());
    for authenticated in [false, true] {
        let view = board_view(&state, authenticated);
        for card in view.cards() {
            assert_eq!(card.can_register, authenticated);
            assert!(card.participants.iter().all(|row| row.removable == authenticated));
        }
    }
}
