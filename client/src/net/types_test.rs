use serde_json::json;

use super::*;

// =============================================================
// ToggleKind
// =============================================================

#[test]
fn endpoints_append_pk() {
    assert_eq!(ToggleKind::Availability.endpoint(12), "/toggle-availability/12");
    assert_eq!(ToggleKind::IsActive.endpoint(3), "/toggle-is-active/3");
    assert_eq!(ToggleKind::SeedAccepting.endpoint(4), "/toggle-seed-accepting/4");
    assert_eq!(ToggleKind::PlantAccepted.endpoint(5), "/toggle-plant-accepted/5");
    assert_eq!(ToggleKind::Ownership.endpoint(6), "/user-plant-toggle/6");
}

#[test]
fn fields_match_backend_payloads() {
    assert_eq!(ToggleKind::Availability.field(), "availability");
    assert_eq!(ToggleKind::IsActive.field(), "is_active");
    assert_eq!(ToggleKind::SeedAccepting.field(), "accepting_seed");
    assert_eq!(ToggleKind::PlantAccepted.field(), "is_accepted");
    assert_eq!(ToggleKind::Ownership.field(), "isowner");
}

#[test]
fn flag_selectors_are_distinct() {
    let mut selectors: Vec<_> = ToggleKind::FLAGS.iter().map(|k| k.selector()).collect();
    selectors.sort_unstable();
    selectors.dedup();
    assert_eq!(selectors.len(), ToggleKind::FLAGS.len());
}

#[test]
fn ownership_is_not_a_flag_page_kind() {
    assert!(!ToggleKind::FLAGS.contains(&ToggleKind::Ownership));
    assert_eq!(ToggleKind::Ownership.selector(), ".toggler");
}

// =============================================================
// Response parsing
// =============================================================

#[test]
fn boolean_fields_parse() {
    let body = json!({"pk": 7, "availability": true});
    assert_eq!(parse_toggle_response(ToggleKind::Availability, &body), Ok(ToggleState::On));
    let body = json!({"pk": 7, "availability": false});
    assert_eq!(parse_toggle_response(ToggleKind::Availability, &body), Ok(ToggleState::Off));
}

#[test]
fn python_style_strings_parse() {
    let body = json!({"is_active": "True"});
    assert_eq!(parse_toggle_response(ToggleKind::IsActive, &body), Ok(ToggleState::On));
    let body = json!({"is_active": "False"});
    assert_eq!(parse_toggle_response(ToggleKind::IsActive, &body), Ok(ToggleState::Off));
}

#[test]
fn ownership_yes_no_parse() {
    let body = json!({"isowner": "Yes"});
    assert_eq!(parse_toggle_response(ToggleKind::Ownership, &body), Ok(ToggleState::On));
    let body = json!({"isowner": "No"});
    assert_eq!(parse_toggle_response(ToggleKind::Ownership, &body), Ok(ToggleState::Off));
}

#[test]
fn numeric_flags_parse() {
    let body = json!({"is_accepted": 1});
    assert_eq!(parse_toggle_response(ToggleKind::PlantAccepted, &body), Ok(ToggleState::On));
    let body = json!({"is_accepted": 0});
    assert_eq!(parse_toggle_response(ToggleKind::PlantAccepted, &body), Ok(ToggleState::Off));
}

#[test]
fn missing_field_is_an_error() {
    let body = json!({"availability": true});
    assert_eq!(
        parse_toggle_response(ToggleKind::SeedAccepting, &body),
        Err(ToggleError::MissingField("accepting_seed"))
    );
}

#[test]
fn unexpected_value_is_an_error() {
    let body = json!({"isowner": "maybe"});
    assert_eq!(
        parse_toggle_response(ToggleKind::Ownership, &body),
        Err(ToggleError::UnexpectedValue { field: "isowner", value: "\"maybe\"".into() })
    );
    let body = json!({"availability": null});
    assert!(parse_toggle_response(ToggleKind::Availability, &body).is_err());
}

#[test]
fn error_messages() {
    assert_eq!(ToggleError::Status(403).to_string(), "toggle request returned status 403");
    assert_eq!(
        ToggleError::Transport("network down".into()).to_string(),
        "toggle request failed: network down"
    );
    assert_eq!(
        ToggleError::MissingField("is_active").to_string(),
        "toggle response has no `is_active` field"
    );
}
