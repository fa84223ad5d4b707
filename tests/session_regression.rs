//! Regression tests for request validation, rendering, and the JSON form
//! of reports.

use classicrypt::cipher::Direction;
use classicrypt::error::{ClassicryptError, InputField};
use classicrypt::render::{columnar_matrix, vigenere_table, DEFAULT_MAX_ROWS};
use classicrypt::session::{process, Algorithm, Diagnostics, InputPolicy, Report, Request, Warning};
use classicrypt::{columnar_encrypt, vigenere_encrypt};

fn lenient<'a>(algorithm: Algorithm, direction: Direction, key: &'a str, text: &'a str) -> Request<'a> {
    Request {
        algorithm,
        direction,
        key,
        text,
        policy: InputPolicy::Lenient,
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Validation order
// ═══════════════════════════════════════════════════════════════════════

/// A blank key is reported before anything about the text.
#[test]
fn blank_key_wins_over_missing_text() {
    let req = lenient(Algorithm::Columnar, Direction::Encrypt, " \t", "");
    assert_eq!(process(&req).unwrap_err(), ClassicryptError::MissingKey);
}

/// A key without letters is reported before a text without letters.
#[test]
fn empty_key_wins_over_empty_text() {
    let req = lenient(Algorithm::Vigenere, Direction::Encrypt, "abc", "xyz");
    assert_eq!(
        process(&req).unwrap_err(),
        ClassicryptError::EmptyKey { alphabet: "Cyrillic" }
    );
}

/// Strict mode still reports empty inputs rather than invalid characters.
#[test]
fn strict_mode_reports_empty_key_first() {
    let mut req = lenient(Algorithm::Columnar, Direction::Encrypt, "1234", "HELLO!");
    req.policy = InputPolicy::Strict;
    assert_eq!(
        process(&req).unwrap_err(),
        ClassicryptError::EmptyKey { alphabet: "Latin" }
    );
}

#[test]
fn strict_mode_counts_every_invalid_character() {
    let mut req = lenient(Algorithm::Vigenere, Direction::Encrypt, "КЛЮЧ", "При вет, мир!");
    req.policy = InputPolicy::Strict;
    assert_eq!(
        process(&req).unwrap_err(),
        ClassicryptError::InvalidCharacters {
            field: InputField::Text,
            count: 4
        }
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Full requests
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn columnar_request_roundtrip() {
    let enc = process(&lenient(
        Algorithm::Columnar,
        Direction::Encrypt,
        "secret key",
        "Meet me at the usual place at ten",
    ))
    .unwrap();
    assert_eq!(
        enc.warnings,
        vec![
            Warning::KeyCharactersDropped { count: 1 },
            Warning::TextCharactersDropped { count: 7 },
        ]
    );
    let dec = process(&lenient(
        Algorithm::Columnar,
        Direction::Decrypt,
        "SECRETKEY",
        &enc.text,
    ))
    .unwrap();
    assert_eq!(dec.text, "MEETMEATTHEUSUALPLACEATTEN");
    assert!(dec.warnings.is_empty());
}

#[test]
fn vigenere_request_roundtrip() {
    let enc = process(&lenient(
        Algorithm::Vigenere,
        Direction::Encrypt,
        "шифр",
        "Встречаемся у старого моста в десять",
    ))
    .unwrap();
    let dec = process(&lenient(Algorithm::Vigenere, Direction::Decrypt, "ШИФР", &enc.text)).unwrap();
    assert_eq!(dec.text, "ВСТРЕЧАЕМСЯУСТАРОГОМОСТАВДЕСЯТЬ");
}

// ═══════════════════════════════════════════════════════════════════════
// Rendering
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn render_zebra_matrix_frozen() {
    let out = columnar_encrypt("WEAREDISCOVERED", "ZEBRA").unwrap();
    let table = columnar_matrix(out.diagnostics.as_ref().unwrap(), DEFAULT_MAX_ROWS);
    assert_eq!(
        table,
        "Intermediate matrix (columnar transposition)\n\
         Z E B R A\n\
         5 3 2 4 1\n\
         W E A R E\n\
         D I S C O\n\
         V E R E D\n\
         Read the columns in rank order\n"
    );
}

#[test]
fn render_vigenere_table_frozen() {
    let out = vigenere_encrypt("ААА", "Я").unwrap();
    assert_eq!(
        vigenere_table("ААА", &out.diagnostics, &out.text),
        "Correspondence table (progressive-key Vigenère)\n\
         А А А\n\
         Я А Б\n\
         Я А Б\n\
         Top row: input text; middle row: progressive key; bottom row: result\n"
    );
}

#[test]
fn render_row_limit_is_configurable() {
    let report = process(&lenient(
        Algorithm::Columnar,
        Direction::Encrypt,
        "AB",
        "ABCDEFGHIJ",
    ))
    .unwrap();
    let table = report.render_diagnostics(1);
    assert!(table.contains("... and 4 more rows\n"));
}

// ═══════════════════════════════════════════════════════════════════════
// JSON form
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn report_json_shape() {
    let report = process(&lenient(Algorithm::Columnar, Direction::Encrypt, "KEY", "HELLO WORLD")).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["algorithm"], "columnar");
    assert_eq!(json["direction"], "encrypt");
    assert_eq!(json["text"], "EORHLODLWL");
    assert_eq!(json["diagnostics"]["cipher"], "columnar");
    assert_eq!(json["diagnostics"]["order"], serde_json::json!([1, 0, 2]));
    assert_eq!(json["diagnostics"]["column_lengths"], serde_json::json!([4, 3, 3]));
    assert_eq!(json["warnings"][0]["kind"], "text_characters_dropped");
    assert_eq!(json["warnings"][0]["count"], 1);
}

#[test]
fn report_json_roundtrip() {
    let report = process(&lenient(Algorithm::Vigenere, Direction::Encrypt, "КЛЮЧ", "ПРИВЕТ")).unwrap();
    let json = serde_json::to_string(&report).unwrap();
    let back: Report = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
    match back.diagnostics {
        Diagnostics::Vigenere { key_stream, .. } => {
            assert_eq!(key_stream.into_iter().collect::<String>(), "КЛЮЧЛМ")
        }
        other => panic!("unexpected diagnostics: {:?}", other),
    }
}

#[test]
fn report_json_rejects_broken_column_order() {
    let report = process(&lenient(Algorithm::Columnar, Direction::Encrypt, "KEY", "HELLOWORLD")).unwrap();
    let mut json = serde_json::to_value(&report).unwrap();
    json["diagnostics"]["order"] = serde_json::json!([0, 0, 7]);
    let err = serde_json::from_value::<Report>(json).unwrap_err();
    assert!(err.to_string().contains("not a permutation"), "{}", err);
}
