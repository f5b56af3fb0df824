use crate::{User, UserStatus};

use serde_json::json;
use uuid::Uuid;

#[test]
fn test_new_user_has_no_id() {
    let user = User::new("Alice".to_string(), UserStatus::Active);
    assert_eq!(user.id, None);
    assert_eq!(user.oauth_id, None);
    assert_eq!(user.status, UserStatus::Active);
}

#[test]
fn test_serialized_user_omits_unset_id_and_oauth_id() {
    let user = User::new("Alice".to_string(), UserStatus::Active);
    let value = serde_json::to_value(&user).unwrap();
    assert_eq!(value, json!({"name": "Alice", "status": "active"}));
}

#[test]
fn test_serialized_user_preserves_wire_field_names() {
    let id = Uuid::new_v4();
    let mut user = User::new("Alice".to_string(), UserStatus::Inactive);
    user.id = Some(id);
    user.oauth_id = Some("idp-1234".to_string());

    let value = serde_json::to_value(&user).unwrap();
    assert_eq!(
        value,
        json!({
            "id": id.to_string(),
            "name": "Alice",
            "oauthID": "idp-1234",
            "status": "inactive",
        })
    );
}

#[test]
fn test_user_deserializes_with_optional_fields_absent() {
    let user: User = serde_json::from_value(json!({
        "name": "Bob",
        "status": "active",
    }))
    .unwrap();
    assert_eq!(user.id, None);
    assert_eq!(user.oauth_id, None);
    assert_eq!(user.name, "Bob");
}

#[test]
fn test_user_with_unrecognized_status_is_rejected_before_any_store_call() {
    // The typed model refuses the payload at the boundary, so no store
    // can ever see a user with an unrecognized status.
    let result = serde_json::from_value::<User>(json!({
        "name": "Carol",
        "status": "pending",
    }));
    assert!(result.is_err());
}

#[test]
fn test_user_serde_round_trip() {
    let mut user = User::new("Dave".to_string(), UserStatus::Active);
    user.id = Some(Uuid::new_v4());

    let encoded = serde_json::to_string(&user).unwrap();
    let decoded: User = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, user);
}
