use super::*;

// =============================================================
// Envelope parsing
// =============================================================

#[test]
fn login_envelope_nests_session_under_user() {
    let body = serde_json::json!({
        "statusCode": 200,
        "message": {
            "user": {
                "_id": "u1",
                "username": "alice",
                "email": "alice@example.com",
                "role": "Admin",
                "createdAt": "2024-01-01T00:00:00Z",
                "updatedAt": "2024-01-02T00:00:00Z"
            }
        },
        "success": true
    });
    let envelope: ApiEnvelope<LoginMessage> = serde_json::from_value(body).unwrap();
    assert_eq!(envelope.message.user.id, "u1");
    assert_eq!(envelope.message.user.username, "alice");
    assert_eq!(envelope.message.user.role, "Admin");
}

#[test]
fn current_user_envelope_carries_session_directly() {
    let body = serde_json::json!({
        "message": {
            "_id": "u2",
            "username": "bob",
            "email": "bob@example.com",
            "role": "User"
        }
    });
    let envelope: ApiEnvelope<Session> = serde_json::from_value(body).unwrap();
    assert_eq!(envelope.message.username, "bob");
    assert_eq!(envelope.message.created_at, "");
}

#[test]
fn all_users_envelope_parses_list() {
    let body = serde_json::json!({
        "message": [
            {
                "_id": "u1",
                "username": "alice",
                "email": "alice@example.com",
                "role": "Admin",
                "division": "Division 1"
            },
            {
                "_id": "u2",
                "username": "bob",
                "email": "bob@example.com",
                "role": "User"
            }
        ]
    });
    let envelope: ApiEnvelope<Vec<User>> = serde_json::from_value(body).unwrap();
    assert_eq!(envelope.message.len(), 2);
    assert_eq!(envelope.message[0].division.as_deref(), Some("Division 1"));
    assert_eq!(envelope.message[1].division, None);
}

#[test]
fn user_optional_fields_default_when_absent() {
    let body = serde_json::json!({
        "_id": "u3",
        "username": "carol",
        "email": "carol@example.com",
        "role": "User"
    });
    let user: User = serde_json::from_value(body).unwrap();
    assert_eq!(user.phone_number, None);
    assert_eq!(user.company, None);
    assert!(!user.is_score_report_user);
}

#[test]
fn user_reads_camel_case_keys() {
    let body = serde_json::json!({
        "_id": "u4",
        "username": "dave",
        "email": "dave@example.com",
        "role": "User",
        "phoneNumber": "1234567890",
        "isScoreReportUser": true
    });
    let user: User = serde_json::from_value(body).unwrap();
    assert_eq!(user.phone_number.as_deref(), Some("1234567890"));
    assert!(user.is_score_report_user);
}

// =============================================================
// Outbound payloads
// =============================================================

#[test]
fn register_payload_flattens_draft_with_password() {
    let payload = RegisterPayload {
        draft: UserDraft {
            username: "erin".to_owned(),
            email: "erin@example.com".to_owned(),
            phone_number: "1234567890".to_owned(),
            is_score_report_user: true,
            ..UserDraft::default()
        },
        password: "hunter22".to_owned(),
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["username"], "erin");
    assert_eq!(value["password"], "hunter22");
    assert_eq!(value["phoneNumber"], "1234567890");
    assert_eq!(value["isScoreReportUser"], true);
}

#[test]
fn draft_serializes_camel_case() {
    let draft = UserDraft { phone_number: "555".to_owned(), ..UserDraft::default() };
    let value = serde_json::to_value(&draft).unwrap();
    assert!(value.get("phoneNumber").is_some());
    assert!(value.get("phone_number").is_none());
}

// =============================================================
// Form prefill
// =============================================================

fn fetched_user() -> User {
    User {
        id: "u9".to_owned(),
        username: "frank".to_owned(),
        email: "frank@example.com".to_owned(),
        role: "admin".to_owned(),
        phone_number: Some("1234567890".to_owned()),
        company: None,
        zone: Some("North".to_owned()),
        branch: None,
        division: Some("Division 2".to_owned()),
        lob: None,
        organization: Some("Org A".to_owned()),
        is_score_report_user: true,
    }
}

#[test]
fn draft_from_user_copies_fields_and_flags() {
    let draft = draft_from_user(&fetched_user());
    assert_eq!(draft.username, "frank");
    assert_eq!(draft.division, "Division 2");
    assert!(draft.is_score_report_user);
}

#[test]
fn draft_from_user_blanks_missing_optionals() {
    let draft = draft_from_user(&fetched_user());
    assert_eq!(draft.company, "");
    assert_eq!(draft.branch, "");
    assert_eq!(draft.lob, "");
}

#[test]
fn draft_from_user_normalizes_role_casing() {
    let draft = draft_from_user(&fetched_user());
    assert_eq!(draft.role, "Admin");
}

#[test]
fn capitalize_handles_edge_inputs() {
    assert_eq!(capitalize(""), "");
    assert_eq!(capitalize("USER"), "User");
    assert_eq!(capitalize("a"), "A");
}
