use raitobokkusu_core::{GalleryState, NavAction};

fn open_at(len: usize, index: usize) -> GalleryState {
    let mut state = GalleryState::new(len);
    assert!(state.apply(NavAction::Open(index)));
    state
}

#[test]
fn opening_first_entry_has_only_next_neighbor() {
    let state = open_at(3, 0);
    let snapshot = state.snapshot();
    assert!(snapshot.open());
    assert_eq!(snapshot.current, Some(0));
    assert_eq!(snapshot.prev, None);
    assert_eq!(snapshot.next, Some(1));
}

#[test]
fn opening_last_entry_has_only_prev_neighbor() {
    let state = open_at(3, 2);
    let snapshot = state.snapshot();
    assert_eq!(snapshot.prev, Some(1));
    assert_eq!(snapshot.next, None);
}

#[test]
fn opening_interior_entry_has_both_neighbors() {
    let state = open_at(3, 1);
    let snapshot = state.snapshot();
    assert_eq!(snapshot.prev, Some(0));
    assert_eq!(snapshot.next, Some(2));
}

#[test]
fn walking_forward_and_closing() {
    let mut state = GalleryState::new(3);
    assert!(state.apply(NavAction::Open(0)));
    assert_eq!(state.current(), Some(0));

    assert!(state.apply(NavAction::Next));
    assert_eq!(state.current(), Some(1));
    let snapshot = state.snapshot();
    assert_eq!(snapshot.prev, Some(0));
    assert_eq!(snapshot.next, Some(2));

    assert!(state.apply(NavAction::Next));
    assert_eq!(state.current(), Some(2));
    assert_eq!(state.snapshot().next, None);

    assert!(state.apply(NavAction::Close));
    assert_eq!(state.current(), None);
    assert!(!state.snapshot().open());
}

#[test]
fn next_at_last_entry_is_rejected() {
    let mut state = open_at(2, 1);
    assert!(!state.apply(NavAction::Next));
    assert_eq!(state.current(), Some(1));
}

#[test]
fn prev_at_first_entry_is_rejected() {
    let mut state = open_at(2, 0);
    assert!(!state.apply(NavAction::Prev));
    assert_eq!(state.current(), Some(0));
}

#[test]
fn steps_while_closed_are_rejected() {
    let mut state = GalleryState::new(3);
    assert!(!state.apply(NavAction::Next));
    assert!(!state.apply(NavAction::Prev));
    assert_eq!(state.current(), None);
}

#[test]
fn open_out_of_range_is_rejected() {
    let mut state = GalleryState::new(3);
    assert!(!state.apply(NavAction::Open(3)));
    assert_eq!(state.current(), None);
}

#[test]
fn close_while_closed_is_a_noop() {
    let mut state = GalleryState::new(3);
    assert!(!state.apply(NavAction::Close));
    assert_eq!(state.current(), None);
}

#[test]
fn reopening_displayed_entry_reports_no_change() {
    let mut state = open_at(3, 1);
    assert!(!state.apply(NavAction::Open(1)));
    assert_eq!(state.current(), Some(1));
}

#[test]
fn empty_gallery_rejects_everything() {
    let mut state = GalleryState::new(0);
    assert!(state.is_empty());
    assert!(!state.apply(NavAction::Open(0)));
    assert!(!state.apply(NavAction::Next));
    assert!(!state.apply(NavAction::Close));
    assert_eq!(state.current(), None);
}

#[test]
fn single_entry_gallery_has_no_neighbors() {
    let state = open_at(1, 0);
    let snapshot = state.snapshot();
    assert_eq!(snapshot.prev, None);
    assert_eq!(snapshot.next, None);
    assert!(snapshot.open());
}
