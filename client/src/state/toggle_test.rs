use super::*;

// =============================================================
// ToggleAppearance
// =============================================================

#[test]
fn flag_on_adds_ok_and_check() {
    let look = ToggleAppearance::of(ToggleKind::Availability, ToggleState::On);
    assert_eq!(look.add, Some("ok"));
    assert!(look.remove.is_empty());
    assert_eq!(look.text, Some(CHECK_GLYPH));
}

#[test]
fn flag_off_removes_ok_and_shows_cross() {
    let look = ToggleAppearance::of(ToggleKind::SeedAccepting, ToggleState::Off);
    assert_eq!(look.add, None);
    assert_eq!(look.remove, &["ok"]);
    assert_eq!(look.text, Some(CROSS_GLYPH));
}

#[test]
fn ownership_swaps_marks_without_text() {
    let yes = ToggleAppearance::of(ToggleKind::Ownership, ToggleState::On);
    assert_eq!(yes.add, Some("checkmark"));
    assert_eq!(yes.text, None);

    let no = ToggleAppearance::of(ToggleKind::Ownership, ToggleState::Off);
    assert_eq!(no.add, Some("crossmark"));
    assert!(no.remove.contains(&"checkmark"));
}

#[test]
fn apply_to_classes_edits_class_list() {
    let on = ToggleAppearance::of(ToggleKind::IsActive, ToggleState::On);
    assert_eq!(on.apply_to_classes("btn is-active-toggler"), "btn is-active-toggler ok");
    assert_eq!(on.apply_to_classes("btn ok"), "btn ok");

    let off = ToggleAppearance::of(ToggleKind::IsActive, ToggleState::Off);
    assert_eq!(off.apply_to_classes("btn  ok is-active-toggler"), "btn is-active-toggler");

    let owned = ToggleAppearance::of(ToggleKind::Ownership, ToggleState::On);
    assert_eq!(owned.apply_to_classes("toggler crossmark"), "toggler checkmark");
}

// =============================================================
// ToggleButtonState
// =============================================================

#[test]
fn begin_returns_endpoint_once() {
    let mut button = ToggleButtonState::new(ToggleKind::PlantAccepted, 42);
    assert_eq!(button.begin().as_deref(), Some("/toggle-plant-accepted/42"));
    assert!(button.is_in_flight());
    assert_eq!(button.begin(), None);
}

#[test]
fn finish_success_records_state() {
    let mut button = ToggleButtonState::new(ToggleKind::Availability, 1);
    button.begin();
    let look = button.finish(Ok(ToggleState::On)).unwrap();
    assert_eq!(look.add, Some("ok"));
    assert_eq!(button.state, Some(ToggleState::On));
    assert!(!button.is_in_flight());
    assert!(button.begin().is_some());
}

#[test]
fn finish_failure_keeps_previous_state() {
    let mut button = ToggleButtonState::new(ToggleKind::Availability, 1).with_state(ToggleState::Off);
    button.begin();
    let err = button.finish(Err(ToggleError::Status(500))).unwrap_err();
    assert_eq!(err, ToggleError::Status(500));
    assert_eq!(button.state, Some(ToggleState::Off));
    assert!(!button.is_in_flight());
}

#[test]
fn cancel_allows_next_click() {
    let mut button = ToggleButtonState::new(ToggleKind::Ownership, 3);
    assert!(button.begin().is_some());
    button.cancel();
    assert!(!button.is_in_flight());
    assert_eq!(button.state, None);
    assert_eq!(button.begin().as_deref(), Some("/user-plant-toggle/3"));
}

// =============================================================
// parse_pk
// =============================================================

#[test]
fn parse_pk_reads_dataset_value() {
    assert_eq!(parse_pk(Some("17")), Some(17));
    assert_eq!(parse_pk(Some(" 17 ")), Some(17));
}

#[test]
fn parse_pk_rejects_missing_or_bad_values() {
    assert_eq!(parse_pk(None), None);
    assert_eq!(parse_pk(Some("")), None);
    assert_eq!(parse_pk(Some("abc")), None);
    assert_eq!(parse_pk(Some("-4")), None);
}
