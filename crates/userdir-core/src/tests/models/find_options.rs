use crate::{FindOptions, User, UserSortField, UserStatus};

use uuid::Uuid;

fn user(name: &str, id: u128) -> User {
    let mut user = User::new(name.to_string(), UserStatus::Active);
    user.id = Some(Uuid::from_u128(id));
    user
}

fn names(users: &[User]) -> Vec<&str> {
    users.iter().map(|u| u.name.as_str()).collect()
}

#[test]
fn test_default_ordering_is_ascending_id() {
    let input = vec![user("c", 3), user("a", 1), user("b", 2)];

    let sorted = FindOptions::default().apply(input);

    assert_eq!(names(&sorted), vec!["a", "b", "c"]);
}

#[test]
fn test_name_sort_breaks_ties_by_ascending_id() {
    let input = vec![user("same", 2), user("same", 1), user("other", 3)];

    let options = FindOptions {
        sort_by: UserSortField::Name,
        ..FindOptions::default()
    };
    let sorted = options.apply(input);

    assert_eq!(
        sorted.iter().map(|u| u.id.unwrap().as_u128()).collect::<Vec<_>>(),
        vec![3, 1, 2]
    );
}

#[test]
fn test_descending_reverses_the_whole_ordering() {
    let input = vec![user("a", 1), user("b", 2), user("c", 3)];

    let options = FindOptions {
        sort_by: UserSortField::Name,
        descending: true,
        ..FindOptions::default()
    };
    let sorted = options.apply(input);

    assert_eq!(names(&sorted), vec!["c", "b", "a"]);
}

#[test]
fn test_offset_and_limit_window_the_ordered_sequence() {
    let input = vec![user("a", 1), user("b", 2), user("c", 3), user("d", 4)];

    let options = FindOptions {
        limit: Some(2),
        offset: 1,
        ..FindOptions::default()
    };
    let page = options.apply(input);

    assert_eq!(names(&page), vec!["b", "c"]);
}

#[test]
fn test_absent_limit_returns_all_records() {
    let input = vec![user("a", 1), user("b", 2), user("c", 3)];

    let page = FindOptions::default().apply(input);

    assert_eq!(page.len(), 3);
}

#[test]
fn test_offset_past_the_end_returns_empty_page() {
    let input = vec![user("a", 1)];

    let options = FindOptions {
        offset: 5,
        ..FindOptions::default()
    };

    assert!(options.apply(input).is_empty());
}

#[test]
fn test_sort_field_column_names() {
    assert_eq!(UserSortField::Id.as_str(), "id");
    assert_eq!(UserSortField::Name.as_str(), "name");
}
