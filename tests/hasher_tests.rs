//! Integration tests for the saltcheck credential hasher.

use std::thread;

use saltcheck::access::{admin_access, AccessDecision, Session};
use saltcheck::crypto::{hash, hash_with_salt, verify, StoredHash, SALT_LEN};

const GOLDEN_SALT: [u8; SALT_LEN] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];
const GOLDEN_SECRET: &str = "correct horse battery staple";
const GOLDEN_STORED: &str = "000102030405060708090a0b0c0d0e0f:\
                             5ff47702d78280cd4e0ff53ee04dfe6bb394eb21606f98c18f52686e7a492601";

// ---------------------------------------------------------------------------
// Round trip
// ---------------------------------------------------------------------------

#[test]
fn verify_accepts_hash_of_same_secret() {
    let long = "x".repeat(4096);
    for secret in ["", "a", "hunter2", "pässwörd", "emoji 🔑 key", long.as_str()] {
        let stored = hash(secret);
        assert!(verify(secret, &stored), "round trip failed for {secret:?}");
    }
}

#[test]
fn verify_rejects_hash_of_different_secret() {
    let stored = hash("first-secret");
    assert!(!verify("second-secret", &stored));
    assert!(!verify("first-secret ", &stored));
    assert!(!verify("First-secret", &stored));
}

#[test]
fn hash_uses_fresh_salt_each_time() {
    let a = hash("same secret");
    let b = hash("same secret");

    assert_ne!(a, b, "two hashes of the same secret must differ");
    assert_ne!(a.split_once(':').unwrap().0, b.split_once(':').unwrap().0);
}

// ---------------------------------------------------------------------------
// Golden vector
// ---------------------------------------------------------------------------

#[test]
fn golden_vector_verifies() {
    assert!(verify(GOLDEN_SECRET, GOLDEN_STORED));
    assert!(!verify("correct horse battery stapler", GOLDEN_STORED));
}

#[test]
fn hash_with_salt_reproduces_golden_vector() {
    assert_eq!(hash_with_salt(&GOLDEN_SALT, GOLDEN_SECRET), GOLDEN_STORED);
}

#[test]
fn non_ascii_secret_is_hashed_as_utf8() {
    let stored = hash_with_salt(&GOLDEN_SALT, "pässwörd");
    assert_eq!(
        stored,
        "000102030405060708090a0b0c0d0e0f:\
         bf56e00073396d17aa10fe3b9d51780da34c977626a53983d2e0d23b9b5831b8"
    );
}

// ---------------------------------------------------------------------------
// Malformed stored hashes resolve to `false`
// ---------------------------------------------------------------------------

#[test]
fn malformed_stored_hashes_are_rejected() {
    let cases = [
        "",
        ":",
        "onlyonepart",
        "bad:bad",
        "000102030405060708090a0b0c0d0e0f:",
        ":5ff47702d78280cd4e0ff53ee04dfe6bb394eb21606f98c18f52686e7a492601",
        "000102030405060708090a0b0c0d0e0f:not-hex-at-all",
        "000102030405060708090a0b0c0d0e0f:5ff", // odd length
    ];

    for stored in cases {
        assert!(!verify(GOLDEN_SECRET, stored), "{stored:?} must not verify");
    }
}

#[test]
fn non_hex_salt_is_rejected() {
    let (_, digest) = GOLDEN_STORED.split_once(':').unwrap();
    let stored = format!("{}:{digest}", "z".repeat(32));
    assert!(!verify(GOLDEN_SECRET, &stored));
}

#[test]
fn trailing_field_is_rejected() {
    assert!(!verify(GOLDEN_SECRET, &format!("{GOLDEN_STORED}:extra")));
}

#[test]
fn verify_and_strict_parser_agree_on_hash_output() {
    let stored = hash("agreement");
    let parsed = StoredHash::parse(&stored).expect("hash output must parse");
    assert!(parsed.matches("agreement"));
    assert!(!parsed.matches("disagreement"));
}

// ---------------------------------------------------------------------------
// Concurrency
// ---------------------------------------------------------------------------

#[test]
fn hash_and_verify_from_many_threads() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let secret = format!("thread-secret-{i}");
                let stored = hash(&secret);
                assert!(verify(&secret, &stored));
                stored
            })
        })
        .collect();

    let mut salts: Vec<String> = handles
        .into_iter()
        .map(|h| h.join().expect("thread panicked"))
        .map(|s| s.split_once(':').unwrap().0.to_string())
        .collect();
    salts.sort();
    salts.dedup();
    assert_eq!(salts.len(), 8, "every thread must draw its own salt");
}

// ---------------------------------------------------------------------------
// End-to-end: stored hash -> sign in -> admin gate
// ---------------------------------------------------------------------------

#[test]
fn admin_sign_in_flow() {
    let stored = hash("dashboard-pass");

    // Wrong password never yields a session.
    let session = verify("guess", &stored).then(|| Session::new("ops", "admin"));
    assert_eq!(admin_access(session.as_ref()), AccessDecision::SignInRequired);

    let session = verify("dashboard-pass", &stored).then(|| Session::new("ops", "admin"));
    assert_eq!(admin_access(session.as_ref()), AccessDecision::Granted);

    let viewer = Session::new("guest", "viewer");
    assert_eq!(admin_access(Some(&viewer)), AccessDecision::Forbidden);
}
