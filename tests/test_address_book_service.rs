//! Integration tests for the async address book service.

mod fixtures;

use address_book::services::{AddressBookService, AddressBookServiceImpl};
use address_book::{AddressBookError, AddressBookManager, Config, ContactDetails};
use fixtures::*;
use std::sync::Arc;

fn service_with_books(names: &[&str]) -> AddressBookServiceImpl {
    let config = Config {
        default_books: names.iter().map(|n| n.to_string()).collect(),
        ..Default::default()
    };
    AddressBookServiceImpl::from_config(&config)
}

#[tokio::test]
async fn test_service_walkthrough() {
    let service = service_with_books(&["Personal", "Work"]);

    service.add_contact("Personal", prize()).await.unwrap();
    service.add_contact("Work", kunal()).await.unwrap();
    assert_eq!(service.count_contacts("Personal").await.unwrap(), 1);

    let details = ContactDetails {
        city: Some("NewCity".to_string()),
        phone_number: Some("555-9999".to_string()),
        ..Default::default()
    };
    let edited = service
        .edit_contact("Personal", "Prize", "Aseeja", details)
        .await
        .unwrap();
    assert_eq!(edited.city(), "NewCity");
    assert_eq!(edited.phone_number(), "555-9999");

    let found = service
        .find_contacts_by_city("Personal", "NewCity")
        .await
        .unwrap();
    assert_eq!(found, vec![edited.clone()]);

    let deleted = service
        .delete_contact("Personal", "Prize", "Aseeja")
        .await
        .unwrap();
    assert_eq!(deleted, edited);
    assert_eq!(service.count_contacts("Personal").await.unwrap(), 0);
    assert_eq!(service.count_contacts("Work").await.unwrap(), 1);
}

#[tokio::test]
async fn test_unknown_book() {
    let service = AddressBookServiceImpl::default();

    let err = service.list_contacts("Missing").await.unwrap_err();
    assert_eq!(err, AddressBookError::AddressBookNotFound("Missing".to_string()));

    let err = service.add_contact("Missing", prize()).await.unwrap_err();
    assert!(matches!(err, AddressBookError::AddressBookNotFound(_)));
}

#[tokio::test]
async fn test_create_and_list_books() {
    let service = AddressBookServiceImpl::default();

    let summary = service
        .create_address_book("Family".to_string())
        .await
        .unwrap();
    assert_eq!(summary.name, "Family");
    assert_eq!(summary.contact_count, 0);

    service.add_contact("Family", prize()).await.unwrap();
    service
        .create_address_book("Friends".to_string())
        .await
        .unwrap();

    let books = service.list_address_books().await;
    let names: Vec<_> = books.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["Family", "Friends"]);
    assert_eq!(books[0].contact_count, 1);

    let err = service.create_address_book("  ".to_string()).await.unwrap_err();
    assert!(matches!(err, AddressBookError::InvalidRequest(_)));
}

#[tokio::test]
async fn test_find_and_remove() {
    let service = service_with_books(&["Personal"]);
    service.add_contact("Personal", prize()).await.unwrap();

    let found = service
        .find_contact("Personal", "Prize", "Aseeja")
        .await
        .unwrap();
    assert_eq!(found, Some(prize()));

    let missing = service
        .find_contact("Personal", "Kunal", "Aseeja")
        .await
        .unwrap();
    assert!(missing.is_none());

    assert_eq!(
        service
            .remove_contact("Personal", "Kunal", "Aseeja")
            .await
            .unwrap(),
        0
    );
    assert_eq!(
        service
            .remove_contact("Personal", "Prize", "Aseeja")
            .await
            .unwrap(),
        1
    );
}

#[tokio::test]
async fn test_grouping_queries() {
    let service = service_with_books(&["Friends"]);
    for contact in [
        sample_contact("Alice", "Walker", "Boston", "Massachusetts"),
        sample_contact("Bruno", "Walker", "Austin", "Texas"),
        sample_contact("Carla", "Mendes", "Boston", "Massachusetts"),
    ] {
        service.add_contact("Friends", contact).await.unwrap();
    }

    let groups = service.view_contacts_by_city("Friends").await.unwrap();
    assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["Boston", "Austin"]);
    assert_eq!(groups["Boston"].len(), 2);

    let counts = service.count_contacts_by_state("Friends").await.unwrap();
    assert_eq!(counts["Massachusetts"], 2);
    assert_eq!(counts["Texas"], 1);

    let by_state = service.view_contacts_by_state("Friends").await.unwrap();
    assert_eq!(by_state["Texas"][0].first_name(), "Bruno");

    let city_counts = service.count_contacts_by_city("Friends").await.unwrap();
    assert_eq!(city_counts.values().sum::<usize>(), 3);

    let texans = service
        .find_contacts_by_state("Friends", "Texas")
        .await
        .unwrap();
    assert_eq!(texans.len(), 1);
}

#[tokio::test]
async fn test_contact_limit() {
    let mut manager = AddressBookManager::new();
    manager.create_address_book("Tiny");
    let service = AddressBookServiceImpl::new(manager).with_max_contacts(1);

    service.add_contact("Tiny", prize()).await.unwrap();
    let err = service.add_contact("Tiny", kunal()).await.unwrap_err();
    assert!(matches!(err, AddressBookError::InvalidRequest(_)));
    assert_eq!(service.count_contacts("Tiny").await.unwrap(), 1);
}

#[tokio::test]
async fn test_concurrent_duplicate_adds() {
    let service = Arc::new(service_with_books(&["Personal"])) as Arc<dyn AddressBookService>;

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = service.clone();
            tokio::spawn(async move { service.add_contact("Personal", prize()).await })
        })
        .collect();

    let mut successes = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            successes += 1;
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(service.count_contacts("Personal").await.unwrap(), 1);
}
