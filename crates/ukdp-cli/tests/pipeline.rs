//! End-to-end tests for the staged pipeline.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use ukdp_assemble::UsernameMatchPolicy;
use ukdp_cli::pipeline::{RunConfig, RunSummary, run};
use ukdp_ingest::TextEncoding;
use ukdp_store::Store;

const USER_HEADER: &str = "First Name,Middle Initials,Surname,DoB,Age Last Birthday,Gender,\
                           Postcode,Email,Salary,Password\n";

fn config(dir: &TempDir) -> RunConfig {
    RunConfig {
        users_csv: dir.path().join("users.csv"),
        logins_csv: dir.path().join("logins.csv"),
        database: dir.path().join("databases").join("user_data.db"),
        users_encoding: TextEncoding::Latin1,
        username_policy: UsernameMatchPolicy::CaseSensitive,
        dry_run: false,
    }
}

fn write_users(dir: &TempDir, body: &str) {
    fs::write(dir.path().join("users.csv"), format!("{USER_HEADER}{body}")).unwrap();
}

fn write_users_latin1(dir: &TempDir, body: &[u8]) {
    let mut bytes = USER_HEADER.as_bytes().to_vec();
    bytes.extend_from_slice(body);
    fs::write(dir.path().join("users.csv"), bytes).unwrap();
}

fn write_logins(dir: &TempDir, body: &str) {
    fs::write(
        dir.path().join("logins.csv"),
        format!("username,logints\n{body}"),
    )
    .unwrap();
}

fn counts(database: &Path) -> (usize, usize) {
    let store = Store::open(database).unwrap();
    (store.user_count().unwrap(), store.login_count().unwrap())
}

#[test]
fn full_run_links_and_persists() {
    let dir = TempDir::new().unwrap();
    write_users(
        &dir,
        "Ada,none,Lovelace,10/12/15,36,F,EC1A 1BB,a@x.com,\"1,234.50\",secret\n",
    );
    write_logins(&dir, "a@x.com,1700000000\nghost@x.com,1700000000\n");

    let config = config(&dir);
    let summary = run(&config).unwrap();

    assert_eq!(
        summary,
        RunSummary {
            users_loaded: 1,
            users_rejected: 0,
            logins_loaded: 1,
            logins_dropped_unresolved: 1,
            logins_dropped_bad_timestamp: 0,
            database: Some(config.database.clone()),
        }
    );
    assert_eq!(counts(&config.database), (1, 1));
}

#[test]
fn latin1_user_dataset_loads() {
    let dir = TempDir::new().unwrap();
    // 0xE9 is é in Latin-1; invalid on its own as UTF-8.
    write_users_latin1(
        &dir,
        b"Jos\xe9,,-,15/6/91,30,M,W1A 0AX,jose@x.com,na,pw\n",
    );
    write_logins(&dir, "jose@x.com,1700000001\n");

    let summary = run(&config(&dir)).unwrap();
    assert_eq!(summary.users_loaded, 1);
    assert_eq!(summary.logins_loaded, 1);
}

#[test]
fn bad_user_rows_are_counted_not_fatal() {
    let dir = TempDir::new().unwrap();
    write_users(
        &dir,
        "Ada,,Lovelace,10/12/15,36,F,EC1A 1BB,a@x.com,na,pw\n\
         NoEmail,,Smith,1/1/70,50,M,,,na,pw\n",
    );
    write_logins(&dir, "a@x.com,1700000000\n");

    let summary = run(&config(&dir)).unwrap();
    assert_eq!(summary.users_loaded, 1);
    assert_eq!(summary.users_rejected, 1);
    assert_eq!(counts(&config(&dir).database), (1, 1));
}

#[test]
fn rerun_is_idempotent() {
    let dir = TempDir::new().unwrap();
    write_users(&dir, "Ada,,Lovelace,10/12/15,36,F,EC1A 1BB,a@x.com,na,pw\n");
    write_logins(&dir, "a@x.com,1700000000\n");

    let config = config(&dir);
    run(&config).unwrap();
    run(&config).unwrap();

    let (users, logins) = counts(&config.database);
    // Users upsert in place; logins are an append-only audit trail.
    assert_eq!(users, 1);
    assert_eq!(logins, 2);
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    write_users(&dir, "Ada,,Lovelace,10/12/15,36,F,EC1A 1BB,a@x.com,na,pw\n");
    write_logins(&dir, "a@x.com,1700000000\n");

    let mut config = config(&dir);
    config.dry_run = true;
    let summary = run(&config).unwrap();

    assert_eq!(summary.database, None);
    assert_eq!(summary.users_loaded, 1);
    assert!(!config.database.exists());
}

#[test]
fn missing_source_fails_the_run() {
    let dir = TempDir::new().unwrap();
    write_logins(&dir, "a@x.com,1700000000\n");
    // users.csv deliberately absent

    let err = run(&config(&dir)).unwrap_err();
    assert!(err.to_string().contains("load user dataset"));
}

#[test]
fn case_insensitive_policy_resolves_other_casing() {
    let dir = TempDir::new().unwrap();
    write_users(&dir, "Ada,,Lovelace,10/12/15,36,F,EC1A 1BB,Ada@X.com,na,pw\n");
    write_logins(&dir, "ada@x.com,1700000000\n");

    let mut config = config(&dir);
    let summary = run(&config).unwrap();
    assert_eq!(summary.logins_dropped_unresolved, 1);

    config.username_policy = UsernameMatchPolicy::CaseInsensitive;
    let summary = run(&config).unwrap();
    assert_eq!(summary.logins_loaded, 1);
    assert_eq!(summary.logins_dropped_unresolved, 0);
}
