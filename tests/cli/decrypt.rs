//! Tests for `cred decrypt`.

use crate::support::*;

#[test]
fn test_roundtrip_restores_plaintext() {
    let t = Test::with_files(&[("api.secret", "API_KEY=abc"), ("db.secret", SECRET_ENV)]);
    assert_success(&t.encrypt(PASSWORD));
    t.remove("api.secret");
    t.remove("db.secret");

    let output = t.decrypt(PASSWORD);
    assert_success(&output);
    assert_stdout_contains(&output, "decrypted");

    assert_eq!(t.read("api.secret"), "API_KEY=abc");
    assert_eq!(t.read("db.secret"), SECRET_ENV);
}

#[test]
fn test_roundtrip_with_24_byte_key() {
    let t = Test::with_files(&[("api.secret", SECRET_ENV)]);
    assert_success(&t.encrypt(LONG_PASSWORD));
    t.remove("api.secret");

    assert_success(&t.decrypt(LONG_PASSWORD));
    assert_eq!(t.read("api.secret"), SECRET_ENV);
}

#[test]
fn test_decrypt_strips_trailing_whitespace() {
    let t = Test::with_files(&[("api.secret", "API_KEY=abc\n\n")]);
    assert_success(&t.encrypt(PASSWORD));

    assert_success(&t.decrypt(PASSWORD));
    assert_eq!(t.read("api.secret"), "API_KEY=abc");
}

#[test]
fn test_wrong_password_fails_without_output() {
    let t = Test::with_files(&[("api.secret", SECRET_ENV)]);
    assert_success(&t.encrypt(PASSWORD));
    t.remove("api.secret");

    let output = t.decrypt(WRONG_PASSWORD);
    assert_failure(&output);
    assert_stderr_contains(&output, "api.secret.enc");
    assert_stderr_contains(&output, "invalid password");
    assert!(!t.exists("api.secret"));
}

#[test]
fn test_wrong_password_stops_batch() {
    // a.secret.enc is encrypted with another password and sorts first
    let t = Test::with_files(&[("a.secret", SECRET_ENV)]);
    assert_success(&t.encrypt(WRONG_PASSWORD));
    t.write("b.secret", SECRET_ENV);
    let b_enc = {
        let other = Test::with_files(&[("b.secret", SECRET_ENV)]);
        assert_success(&other.encrypt(PASSWORD));
        other.read_bytes("b.secret.enc")
    };
    std::fs::write(t.path("b.secret.enc"), b_enc).unwrap();
    t.remove("a.secret");
    t.remove("b.secret");

    let output = t.decrypt(PASSWORD);
    assert_failure(&output);
    assert_stderr_contains(&output, "a.secret.enc");
    assert!(!t.exists("a.secret"));
    assert!(!t.exists("b.secret"), "processing must stop at the first failure");
}

#[test]
fn test_decrypt_rejects_truncated_ciphertext() {
    let t = Test::new();
    std::fs::write(t.path("bad.secret.enc"), [0u8; 12]).unwrap();

    let output = t.decrypt(PASSWORD);
    assert_failure(&output);
    assert_stderr_contains(&output, "not a positive multiple of 8");
    assert!(!t.exists("bad.secret"));
}

#[test]
fn test_decrypt_no_files_warns() {
    let t = Test::with_files(&[("api.secret", "API_KEY=abc")]);

    let output = t.decrypt(PASSWORD);
    assert_success(&output);
    assert_stdout_contains(&output, "no *.secret.enc files found");
    assert_eq!(t.read("api.secret"), "API_KEY=abc");
}

#[test]
fn test_decrypt_password_from_piped_stdin() {
    let t = Test::with_files(&[("api.secret", "API_KEY=abc")]);
    assert_success(&t.encrypt(PASSWORD));
    t.remove("api.secret");

    let output = t
        .cmd()
        .arg("decrypt")
        .write_stdin(format!("{}\n", PASSWORD))
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(t.read("api.secret"), "API_KEY=abc");
}

#[test]
fn test_decrypt_empty_stdin_fails() {
    let t = Test::with_files(&[("api.secret", "API_KEY=abc")]);
    assert_success(&t.encrypt(PASSWORD));

    let output = t.cmd().arg("decrypt").write_stdin("").output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "between 1 and 24 bytes");
}
