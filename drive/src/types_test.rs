use super::*;
use serde_json::json;

fn sample_record() -> serde_json::Value {
    json!({
        "id": "f1",
        "name": "report.pdf",
        "url": "https://cdn.example.com/f1",
        "createdAt": "2024-03-05T14:07:09.123Z",
        "ownerId": "u1",
        "accessList": [{ "email": "b@x.com" }, { "email": "c@x.com" }]
    })
}

// =============================================================
// FileRecord decoding
// =============================================================

#[test]
fn file_record_decodes_camel_case_fields() {
    let record: FileRecord = serde_json::from_value(sample_record()).unwrap();
    assert_eq!(record.id, "f1");
    assert_eq!(record.created_at, "2024-03-05T14:07:09.123Z");
    assert_eq!(record.owner_id, "u1");
    assert_eq!(record.grantees(), vec!["b@x.com", "c@x.com"]);
    assert_eq!(record.owner, None);
}

#[test]
fn file_record_tolerates_missing_optional_fields_and_extras() {
    let record: FileRecord = serde_json::from_value(json!({
        "id": "f2",
        "name": "a.txt",
        "url": "u",
        "createdAt": "2024-01-01T00:00:00Z",
        "size": 42
    }))
    .unwrap();
    assert!(record.access_list.is_empty());
    assert_eq!(record.owner_id, "");
}

#[test]
fn shared_by_uses_owner_email_or_unknown() {
    let mut value = sample_record();
    value["owner"] = json!({ "email": "owner@x.com" });
    let shared: FileRecord = serde_json::from_value(value).unwrap();
    assert_eq!(shared.shared_by(), "owner@x.com");

    let owned: FileRecord = serde_json::from_value(sample_record()).unwrap();
    assert_eq!(owned.shared_by(), UNKNOWN_OWNER);
}

#[test]
fn created_display_formats_rfc3339() {
    let record: FileRecord = serde_json::from_value(sample_record()).unwrap();
    assert_eq!(record.created_display(), "2024-03-05 14:07 UTC");
}

#[test]
fn display_timestamp_normalizes_offsets_to_utc() {
    assert_eq!(display_timestamp("2024-03-05T16:07:00+02:00"), "2024-03-05 14:07 UTC");
}

#[test]
fn display_timestamp_falls_back_to_raw() {
    assert_eq!(display_timestamp("yesterday"), "yesterday");
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn rename_request_uses_new_name_key() {
    let body = serde_json::to_value(RenameRequest { new_name: "b.txt" }).unwrap();
    assert_eq!(body, json!({ "newName": "b.txt" }));
}

#[test]
fn share_request_uses_user_emails_key() {
    let emails = vec!["a@x.com".to_owned(), "b@x.com".to_owned()];
    let body = serde_json::to_value(ShareRequest { user_emails: &emails }).unwrap();
    assert_eq!(body, json!({ "userEmails": ["a@x.com", "b@x.com"] }));
}

#[test]
fn credentials_trim_email_and_require_both_fields() {
    let creds = Credentials::new("  a@x.com ", "p").unwrap();
    assert_eq!(creds.email, "a@x.com");
    assert_eq!(creds.password, "p");
    assert_eq!(Credentials::new("", "p"), Err(InputError::MissingCredentials));
    assert_eq!(Credentials::new("a@x.com", ""), Err(InputError::MissingCredentials));
}

#[test]
fn credentials_debug_redacts_password() {
    let creds = Credentials::new("a@x.com", "hunter2").unwrap();
    let debug = format!("{creds:?}");
    assert!(debug.contains("a@x.com"));
    assert!(!debug.contains("hunter2"));
}

#[test]
fn login_response_keeps_extra_fields() {
    let response: LoginResponse =
        serde_json::from_value(json!({ "token": "T1", "user": { "id": "u1" } })).unwrap();
    assert_eq!(response.token, "T1");
    assert_eq!(response.extra["user"]["id"], "u1");
}
