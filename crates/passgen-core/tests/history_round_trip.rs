use std::fs;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tempfile::tempdir;

use passgen_core::crypto::{load_or_create_key, HistoryKey};
use passgen_core::{HistoryLog, PassgenError, Session, StoragePaths};

fn passwords(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn rewrite_line(path: &std::path::Path, index: usize, edit: impl FnOnce(&str) -> String) {
    let contents = fs::read_to_string(path).expect("read history");
    let mut lines: Vec<String> = contents.lines().map(str::to_string).collect();
    lines[index] = edit(&lines[index]);
    let mut rewritten = lines.join("\n");
    rewritten.push('\n');
    fs::write(path, rewritten).expect("write history");
}

#[test]
fn test_round_trip_joins_with_trailing_newline() {
    let dir = tempdir().unwrap();
    let paths = StoragePaths::in_dir(dir.path());
    let key = load_or_create_key(&paths.key_file).unwrap();
    let log = HistoryLog::new(&paths.history_file);

    log.append(&key, &passwords(&["Br@veF0x12!", "qu1etR1ver7#"]))
        .unwrap();

    let batches = log.read_all(&key).unwrap().expect("history should exist");
    assert_eq!(batches, vec!["Br@veF0x12!\nqu1etR1ver7#\n".to_string()]);
}

#[test]
fn test_history_survives_key_reload() {
    let dir = tempdir().unwrap();
    let paths = StoragePaths::in_dir(dir.path());
    let log = HistoryLog::new(&paths.history_file);

    let key = load_or_create_key(&paths.key_file).unwrap();
    log.append(&key, &passwords(&["First1!"])).unwrap();
    drop(key);

    let reloaded = load_or_create_key(&paths.key_file).unwrap();
    let batches = log.read_all(&reloaded).unwrap().unwrap();
    assert_eq!(batches, vec!["First1!\n".to_string()]);
}

#[test]
fn test_flipped_ciphertext_byte_is_decryption_error() {
    let dir = tempdir().unwrap();
    let paths = StoragePaths::in_dir(dir.path());
    let key = load_or_create_key(&paths.key_file).unwrap();
    let log = HistoryLog::new(&paths.history_file);
    log.append(&key, &passwords(&["Tamper1!"])).unwrap();

    rewrite_line(&paths.history_file, 0, |line| {
        let mut raw = STANDARD.decode(line).unwrap();
        let middle = raw.len() - 8;
        raw[middle] ^= 0x01;
        STANDARD.encode(raw)
    });

    let err = log.read_all(&key).unwrap_err();
    assert!(err.is_decryption());
    assert!(matches!(err, PassgenError::CorruptHistory { line: 1, .. }));
}

#[test]
fn test_wrong_key_is_decryption_error() {
    let dir = tempdir().unwrap();
    let log = HistoryLog::new(dir.path().join("password_history.enc"));
    let key_a = HistoryKey::generate();
    let key_b = HistoryKey::generate();

    log.append(&key_a, &passwords(&["Secret1!"])).unwrap();

    let err = log.read_all(&key_b).unwrap_err();
    assert!(err.is_decryption());
}

#[test]
fn test_corrupt_first_line_hides_later_valid_lines() {
    let dir = tempdir().unwrap();
    let paths = StoragePaths::in_dir(dir.path());
    let key = load_or_create_key(&paths.key_file).unwrap();
    let log = HistoryLog::new(&paths.history_file);

    log.append(&key, &passwords(&["One1!"])).unwrap();
    log.append(&key, &passwords(&["Two2@"])).unwrap();
    rewrite_line(&paths.history_file, 0, |line| format!("x{}", &line[1..]));

    let err = log.read_all(&key).unwrap_err();
    assert!(matches!(err, PassgenError::CorruptHistory { line: 1, .. }));
}

#[test]
fn test_truncated_key_file_breaks_history() {
    let dir = tempdir().unwrap();
    let paths = StoragePaths::in_dir(dir.path());

    let mut session = Session::open(&paths).unwrap();
    session
        .generate(&passgen_core::GenerationRequest::new(1, 1, 1, 1), 1)
        .unwrap();
    drop(session);

    let full = fs::read(&paths.key_file).unwrap();
    fs::write(&paths.key_file, &full[..full.len() / 2]).unwrap();

    let mut session = Session::open(&paths).unwrap();
    assert!(session.history().unwrap_err().is_decryption());

    let err = session
        .generate(&passgen_core::GenerationRequest::new(1, 0, 0, 0), 1)
        .unwrap_err();
    assert!(matches!(err, PassgenError::Crypto(_)));
}

#[test]
fn test_missing_key_file_with_existing_history_fails() {
    let dir = tempdir().unwrap();
    let paths = StoragePaths::in_dir(dir.path());

    let mut session = Session::open(&paths).unwrap();
    session
        .generate(&passgen_core::GenerationRequest::new(1, 1, 0, 0), 2)
        .unwrap();
    drop(session);

    fs::remove_file(&paths.key_file).unwrap();

    // A fresh key is created, which cannot read the old lines.
    let session = Session::open(&paths).unwrap();
    assert!(session.history().unwrap_err().is_decryption());
}
