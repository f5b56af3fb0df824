use crate::UserStatus;

use std::str::FromStr;

#[test]
fn test_user_status_as_str() {
    assert_eq!(UserStatus::Active.as_str(), "active");
    assert_eq!(UserStatus::Inactive.as_str(), "inactive");
}

#[test]
fn test_user_status_from_str() {
    assert_eq!(
        UserStatus::from_str("active").unwrap(),
        UserStatus::Active
    );
    assert_eq!(
        UserStatus::from_str("inactive").unwrap(),
        UserStatus::Inactive
    );
    assert!(UserStatus::from_str("pending").is_err());
    assert!(UserStatus::from_str("").is_err());
    // Literals are case-sensitive
    assert!(UserStatus::from_str("Active").is_err());
}

#[test]
fn test_unknown_status_fails_with_invalid_kind() {
    let err = UserStatus::from_str("pending").unwrap_err();
    assert!(err.is_invalid());
    assert!(err.to_string().contains("pending"));
}

#[test]
fn test_user_status_default() {
    assert_eq!(UserStatus::default(), UserStatus::Active);
}

#[test]
fn test_user_status_serde_uses_lowercase_literals() {
    assert_eq!(
        serde_json::to_string(&UserStatus::Inactive).unwrap(),
        "\"inactive\""
    );
    assert_eq!(
        serde_json::from_str::<UserStatus>("\"active\"").unwrap(),
        UserStatus::Active
    );
    assert!(serde_json::from_str::<UserStatus>("\"pending\"").is_err());
}
