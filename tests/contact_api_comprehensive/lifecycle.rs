//! Full lifecycle tests: an end-to-end add/search/update/delete walk plus
//! size/position properties of each operation.

use crate::*;

#[test]
fn test_full_scenario_through_public_api() {
    let dir = TempDir::new().unwrap();
    let mut book = ContactBook::open(book_path(&dir)).unwrap();
    assert!(book.is_empty());

    book.add(contact("Ann", "111", "a@x.com", "1 St")).unwrap();
    assert_eq!(book.len(), 1);

    book.add(contact("Bob", "222", "b@x.com", "2 St")).unwrap();
    assert_eq!(book.len(), 2);
    let names: Vec<&str> = book.contacts().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Ann", "Bob"]);

    let hits = book.search("an");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Ann");

    assert!(book
        .update("Bob", contact("Bobby", "333", "b2@x.com", "3 St"))
        .unwrap());
    let names: Vec<&str> = book.contacts().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Ann", "Bobby"]);

    assert!(book.delete("Ann").unwrap());
    assert_eq!(book.len(), 1);
    assert_eq!(book.contacts()[0].name, "Bobby");

    assert!(!book.delete("Ann").unwrap());
    assert_eq!(book.len(), 1);
}

#[test]
fn test_add_increases_len_by_one_and_appends() {
    let dir = TempDir::new().unwrap();
    let mut book = ContactBook::open(book_path(&dir)).unwrap();
    book.add(contact("Ann", "111", "a@x.com", "1 St")).unwrap();

    let before = book.len();
    let bob = contact("Bob", "222", "b@x.com", "2 St");
    book.add(bob.clone()).unwrap();

    assert_eq!(book.len(), before + 1);
    assert_eq!(book.contacts().last().unwrap(), &bob);
}

#[test]
fn test_update_preserves_position_and_count() {
    let dir = TempDir::new().unwrap();
    let mut book = ContactBook::open(book_path(&dir)).unwrap();
    book.add(contact("Ann", "111", "a@x.com", "1 St")).unwrap();
    book.add(contact("Bob", "222", "b@x.com", "2 St")).unwrap();
    book.add(contact("Cid", "333", "c@x.com", "3 St")).unwrap();

    let replacement = contact("Bobby", "999", "b9@x.com", "9 St");
    assert!(book.update("Bob", replacement.clone()).unwrap());

    assert_eq!(book.len(), 3);
    assert_eq!(&book.contacts()[1], &replacement);
}

#[test]
fn test_update_miss_reports_failure_and_changes_nothing() {
    let dir = TempDir::new().unwrap();
    let mut book = ContactBook::open(book_path(&dir)).unwrap();
    book.add(contact("Ann", "111", "a@x.com", "1 St")).unwrap();
    let before = book.contacts().to_vec();

    assert!(!book
        .update("Nobody", contact("X", "0", "x@x.com", "0 St"))
        .unwrap());
    assert_eq!(book.contacts(), &before[..]);
}

#[test]
fn test_delete_removes_only_first_match() {
    let dir = TempDir::new().unwrap();
    let mut book = ContactBook::open(book_path(&dir)).unwrap();
    book.add(contact("Ann", "111", "a1@x.com", "1 St")).unwrap();
    book.add(contact("Ann", "222", "a2@x.com", "2 St")).unwrap();

    assert!(book.delete("Ann").unwrap());

    assert_eq!(book.len(), 1);
    assert_eq!(book.contacts()[0].phone, "222");
}

#[test]
fn test_search_empty_query_matches_every_record() {
    let dir = TempDir::new().unwrap();
    let mut book = ContactBook::open(book_path(&dir)).unwrap();
    book.add(contact("Ann", "111", "a@x.com", "1 St")).unwrap();
    book.add(contact("Bob", "222", "b@x.com", "2 St")).unwrap();

    assert_eq!(book.search("").len(), book.len());
}

#[test]
fn test_search_preserves_original_order() {
    let dir = TempDir::new().unwrap();
    let mut book = ContactBook::open(book_path(&dir)).unwrap();
    book.add(contact("Joanne", "1", "j@x.com", "1 St")).unwrap();
    book.add(contact("Bob", "2", "b@x.com", "2 St")).unwrap();
    book.add(contact("Ann", "3", "a@x.com", "3 St")).unwrap();

    let names: Vec<&str> = book.search("AN").iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Joanne", "Ann"]);
}
