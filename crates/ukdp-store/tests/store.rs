//! Integration tests for the SQLite sink.

use chrono::{DateTime, NaiveDate, Utc};

use ukdp_clean::derive_user_id;
use ukdp_model::{Login, User, UserId};
use ukdp_store::{Store, StoreError};

fn user(email: &str) -> User {
    User {
        id: derive_user_id(Some(email)).into_option().unwrap(),
        first_name: "Ada".into(),
        middle_initials: None,
        surname: "Lovelace".into(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 12, 10),
        gender: Some("F".into()),
        favourite_colour: None,
        favourite_animal: None,
        favourite_food: None,
        city: Some("London".into()),
        county: None,
        postcode: Some("EC1A 1BB".into()),
        email: email.to_string(),
        phone: None,
        mobile: None,
        rqf: None,
        salary: Some(1234.5),
        password_hash: Some("feedface".into()),
    }
}

fn login(user_id: UserId, epoch: i64) -> Login {
    Login {
        user_id,
        login_timestamp: DateTime::<Utc>::from_timestamp(epoch, 0).unwrap(),
    }
}

#[test]
fn schema_is_idempotent() {
    let store = Store::open_in_memory().unwrap();
    store.ensure_schema().unwrap();
    store.ensure_schema().unwrap();
    assert_eq!(store.user_count().unwrap(), 0);
}

#[test]
fn stores_users_then_logins() {
    let mut store = Store::open_in_memory().unwrap();
    store.ensure_schema().unwrap();

    let a = user("a@x.com");
    store.store_users(std::slice::from_ref(&a)).unwrap();
    store
        .store_logins(&[login(a.id, 1_700_000_000), login(a.id, 1_700_000_500)])
        .unwrap();

    assert_eq!(store.user_count().unwrap(), 1);
    assert_eq!(store.login_count().unwrap(), 2);
}

#[test]
fn login_for_unknown_user_is_an_integrity_error() {
    let mut store = Store::open_in_memory().unwrap();
    store.ensure_schema().unwrap();
    store.store_users(&[user("a@x.com")]).unwrap();

    let ghost = derive_user_id(Some("ghost@x.com")).into_option().unwrap();
    let err = store.store_logins(&[login(ghost, 1_700_000_000)]).unwrap_err();
    let StoreError::MissingUser { user_id } = err else {
        panic!("expected MissingUser, got {err}");
    };
    assert_eq!(user_id, ghost.to_hex());
    // The failed batch must not be partially committed.
    assert_eq!(store.login_count().unwrap(), 0);
}

#[test]
fn reinserting_a_user_updates_in_place() {
    let mut store = Store::open_in_memory().unwrap();
    store.ensure_schema().unwrap();

    let mut a = user("a@x.com");
    store.store_users(std::slice::from_ref(&a)).unwrap();
    a.city = Some("Leeds".into());
    store.store_users(std::slice::from_ref(&a)).unwrap();

    assert_eq!(store.user_count().unwrap(), 1);
}

#[test]
fn opens_on_disk_database() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("user_data.db");
    let mut store = Store::open(&path).unwrap();
    store.ensure_schema().unwrap();
    store.store_users(&[user("a@x.com")]).unwrap();
    drop(store);

    let reopened = Store::open(&path).unwrap();
    reopened.ensure_schema().unwrap();
    assert_eq!(reopened.user_count().unwrap(), 1);
}
