use super::*;

fn listed_user(division: Option<&str>) -> User {
    User {
        id: "u1".to_owned(),
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        role: "Admin".to_owned(),
        phone_number: None,
        company: None,
        zone: None,
        branch: None,
        division: division.map(str::to_owned),
        lob: None,
        organization: None,
        is_score_report_user: false,
    }
}

#[test]
fn users_state_default_is_empty_and_idle() {
    let state = UsersState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn division_label_uses_record_value() {
    assert_eq!(division_label(&listed_user(Some("Division 1"))), "Division 1");
}

#[test]
fn division_label_falls_back_for_missing_division() {
    assert_eq!(division_label(&listed_user(None)), "N/A");
}
