//! Tests for `cred encrypt`.

use crate::support::*;

#[test]
fn test_encrypt_creates_enc_files() {
    let t = Test::with_files(&[("api.secret", "API_KEY=abc"), ("db.secret", SECRET_ENV)]);

    let output = t.encrypt(PASSWORD);
    assert_success(&output);
    assert_stdout_contains(&output, "api.secret.enc");
    assert_stdout_contains(&output, "db.secret.enc");

    assert!(t.exists("api.secret.enc"));
    assert!(t.exists("db.secret.enc"));
    // plaintext is left in place
    assert_eq!(t.read("api.secret"), "API_KEY=abc");
}

#[test]
fn test_encrypted_size_is_padded_block_multiple() {
    let t = Test::with_files(&[("api.secret", "API_KEY=abc")]);

    assert_success(&t.encrypt(PASSWORD));

    let encrypted = t.read_bytes("api.secret.enc");
    assert_eq!(encrypted.len(), 16);
    assert!(!encrypted.windows(7).any(|w| w == b"API_KEY"));
}

#[test]
fn test_encrypt_is_deterministic() {
    let t = Test::with_files(&[("api.secret", SECRET_ENV)]);

    assert_success(&t.encrypt(PASSWORD));
    let first = t.read_bytes("api.secret.enc");
    assert_success(&t.encrypt(PASSWORD));
    let second = t.read_bytes("api.secret.enc");

    assert_eq!(first, second);
}

#[test]
fn test_encrypt_ignores_other_files() {
    let t = Test::with_files(&[
        ("api.secret", "API_KEY=abc"),
        ("shared.public", "FOO=1"),
        ("mine.local", "BAR=2"),
        (".hidden.secret", "X=1"),
    ]);

    assert_success(&t.encrypt(PASSWORD));

    assert!(t.exists("api.secret.enc"));
    assert!(!t.exists("shared.public.enc"));
    assert!(!t.exists("mine.local.enc"));
    assert!(!t.exists(".hidden.secret.enc"));
}

#[test]
fn test_encrypt_skips_directories() {
    let t = Test::with_files(&[("api.secret", "API_KEY=abc")]);
    std::fs::create_dir(t.path("folder.secret")).unwrap();

    assert_success(&t.encrypt(PASSWORD));
    assert!(!t.exists("folder.secret.enc"));
}

#[test]
fn test_encrypt_no_files_warns() {
    let t = Test::new();

    let output = t.encrypt(PASSWORD);
    assert_success(&output);
    assert_stdout_contains(&output, "no *.secret files found");
}

#[test]
fn test_encrypt_password_from_env() {
    let t = Test::with_files(&[("api.secret", "API_KEY=abc")]);

    let output = t
        .cmd()
        .env("CRED_PASSWORD", PASSWORD)
        .arg("encrypt")
        .output()
        .unwrap();
    assert_success(&output);

    t.remove("api.secret");
    assert_success(&t.decrypt(PASSWORD));
    assert_eq!(t.read("api.secret"), "API_KEY=abc");
}

#[test]
fn test_encrypt_in_other_directory() {
    let t = Test::with_files(&[("api.secret", "API_KEY=abc")]);
    let other = tempfile::TempDir::new().unwrap();

    let output = t
        .cmd()
        .current_dir(other.path())
        .args(["encrypt", "-p", PASSWORD, "-C"])
        .arg(t.dir.path())
        .output()
        .unwrap();
    assert_success(&output);
    assert!(t.exists("api.secret.enc"));
}

#[test]
fn test_encrypt_rejects_long_password_before_io() {
    let t = Test::with_files(&[("api.secret", "API_KEY=abc")]);

    let output = t.encrypt(&"x".repeat(25));
    assert_failure(&output);
    assert_stderr_contains(&output, "between 1 and 24 bytes");
    assert!(!t.exists("api.secret.enc"));
}

#[test]
fn test_encrypt_rejects_non_utf8() {
    let t = Test::new();
    std::fs::write(t.path("bin.secret"), [0xff, 0xfe, 0xfd]).unwrap();

    let output = t.encrypt(PASSWORD);
    assert_failure(&output);
    assert_stderr_contains(&output, "bin.secret");
    assert!(!t.exists("bin.secret.enc"));
}

#[test]
fn test_encrypt_password_from_piped_stdin() {
    let t = Test::with_files(&[("api.secret", "API_KEY=abc")]);

    let output = t
        .cmd()
        .arg("encrypt")
        .write_stdin(format!("{}\n", LONG_PASSWORD))
        .output()
        .unwrap();
    assert_success(&output);

    t.remove("api.secret");
    assert_success(&t.decrypt(LONG_PASSWORD));
    assert_eq!(t.read("api.secret"), "API_KEY=abc");
}
