use credential_store::auth::{CredentialStore, Password, UserRecord, sample_users};
use credential_store::config::{HashingConfig, InputLimits, StoreConfig};
use credential_store::error::AuthFailure;

// Cheap parameters keep the suite fast
fn store() -> CredentialStore {
    CredentialStore::new(&StoreConfig {
        hashing: HashingConfig {
            memory_cost_kib: 1024,
            time_cost: 1,
            parallelism: 1,
            ..HashingConfig::default()
        },
        limits: InputLimits::default(),
    })
    .expect("store should build")
}

#[test]
fn test_hash_and_verify() {
    let store = store();
    for plaintext in ["x", "password1", "pass word with spaces", "ünïcødé"] {
        let hash = store.hash(plaintext).unwrap();
        assert!(store.verify(plaintext, &hash));
        assert!(!store.verify("something else", &hash));
    }
}

#[test]
fn test_hash_is_salted() {
    let store = store();
    let first = store.hash("password1").unwrap();
    let second = store.hash("password1").unwrap();
    assert_ne!(first, second);
    assert!(store.verify("password1", &first));
    assert!(store.verify("password1", &second));
}

#[test]
fn test_verify_fails_closed_on_foreign_hashes() {
    let store = store();
    assert!(!store.verify("password1", "not a hash"));
    assert!(!store.verify("password1", "$argon2id$v=19$m=1024,t=1,p=1$"));
    assert!(!store.verify("", ""));
}

#[test]
fn test_single_user_round() {
    let store = store();
    let mut records = vec![UserRecord::new("a", "x")];
    store.secure_all(&mut records).unwrap();

    assert_eq!(records.len(), 1);
    assert!(matches!(&records[0].password, Password::Secured(hash) if hash != "x"));

    assert_eq!(store.authenticate("a", "x", &records).unwrap().username, "a");
    assert_eq!(store.authenticate("a", "wrong", &records), Err(AuthFailure));
    assert_eq!(store.authenticate("nobody", "x", &records), Err(AuthFailure));
}

#[test]
fn test_mashrur_and_jack_scenario() {
    let store = store();
    let mut records = vec![
        UserRecord::new("mashrur", "password1"),
        UserRecord::new("jack", "password2"),
    ];
    store.secure_all(&mut records).unwrap();

    let jack = store.authenticate("jack", "password2", &records).unwrap();
    assert_eq!(jack.username, "jack");
    assert_eq!(store.authenticate("jack", "password1", &records), Err(AuthFailure));
    assert_eq!(
        store.authenticate("mashrur", "password1", &records).unwrap().username,
        "mashrur"
    );
}

#[test]
fn test_secure_all_mutates_in_place() {
    let store = store();
    let mut users = sample_users();
    let returned_len = store.secure_all(&mut users).unwrap().len();

    assert_eq!(returned_len, 5);
    assert!(users.iter().all(UserRecord::is_secured));
    assert_eq!(
        store
            .authenticate("heisenberg", "password5", &users)
            .unwrap()
            .username,
        "heisenberg"
    );
}

#[test]
fn test_unknown_user_and_wrong_password_are_indistinguishable() {
    let store = store();
    let mut users = sample_users();
    store.secure_all(&mut users).unwrap();

    let unknown = store.authenticate("nobody", "password1", &users).unwrap_err();
    let wrong = store.authenticate("arya", "password1", &users).unwrap_err();
    assert_eq!(unknown, wrong);
    assert_eq!(unknown.to_string(), wrong.to_string());
}

#[test]
fn test_blank_and_multiline_credentials_round_trip() {
    let store = store();
    let mut records = vec![
        UserRecord::new("a", ""),
        UserRecord::new("b", "   "),
        UserRecord::new("c", "line1\nline2"),
    ];
    store.secure_all(&mut records).unwrap();

    assert_eq!(store.authenticate("a", "", &records).unwrap().username, "a");
    assert_eq!(store.authenticate("b", "   ", &records).unwrap().username, "b");
    assert_eq!(
        store.authenticate("c", "line1\nline2", &records).unwrap().username,
        "c"
    );
    assert_eq!(store.authenticate("a", " ", &records), Err(AuthFailure));
}
