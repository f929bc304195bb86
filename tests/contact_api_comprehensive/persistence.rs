//! Persistence tests: the file mirror invariant, reopen behavior, and the
//! load-time error contract.

use crate::*;

#[test]
fn test_missing_file_yields_empty_book() {
    let dir = TempDir::new().unwrap();
    let book = ContactBook::open(book_path(&dir)).unwrap();
    assert!(book.is_empty());
    // Opening alone must not create the file
    assert!(!book_path(&dir).exists());
}

#[test]
fn test_file_mirrors_records_after_each_mutation() {
    let dir = TempDir::new().unwrap();
    let path = book_path(&dir);
    let mut book = ContactBook::open(&path).unwrap();

    book.add(contact("Ann", "111", "a@x.com", "1 St")).unwrap();
    assert_eq!(file_records(&path), book.contacts());

    book.update("Ann", contact("Annie", "222", "a2@x.com", "2 St"))
        .unwrap();
    assert_eq!(file_records(&path), book.contacts());

    book.delete("Annie").unwrap();
    assert_eq!(file_records(&path), book.contacts());
    assert!(file_records(&path).is_empty());
}

#[test]
fn test_round_trip_across_reopen() {
    let dir = TempDir::new().unwrap();
    let path = book_path(&dir);
    let records = vec![
        contact("Ann Lee", "555-0100", "ann@example.com", "1 Oak St"),
        contact("Bob O'Neil", "555-0200", "bob@example.com", "2 Elm St"),
        contact("José", "555-0300", "jose@example.com", "3 Pine St"),
    ];

    {
        let mut book = ContactBook::open(&path).unwrap();
        for record in &records {
            book.add(record.clone()).unwrap();
        }
    }

    let reopened = ContactBook::open(&path).unwrap();
    assert_eq!(reopened.contacts(), &records[..]);
}

#[test]
fn test_open_fails_on_invalid_json() {
    let dir = TempDir::new().unwrap();
    let path = book_path(&dir);
    fs::write(&path, "[{\"name\":").unwrap();

    assert!(matches!(
        ContactBook::open(&path).unwrap_err(),
        Error::Malformed { .. }
    ));
}

#[test]
fn test_open_fails_on_wrong_shape() {
    let dir = TempDir::new().unwrap();
    let path = book_path(&dir);
    // An array of objects missing required fields
    fs::write(&path, r#"[{"name":"Ann","phone":"111"}]"#).unwrap();

    assert!(matches!(
        ContactBook::open(&path).unwrap_err(),
        Error::Malformed { .. }
    ));
}

#[test]
fn test_file_format_matches_contract_example() {
    let dir = TempDir::new().unwrap();
    let path = book_path(&dir);
    let mut book = ContactBook::open(&path).unwrap();
    book.add(contact("Ann Lee", "555-0100", "ann@example.com", "1 Oak St"))
        .unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(
        text,
        r#"[{"name":"Ann Lee","phone":"555-0100","email":"ann@example.com","address":"1 Oak St"}]"#
    );
}
