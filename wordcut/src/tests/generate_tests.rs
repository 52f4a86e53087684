//! End-to-end tests for table → source generation.

use std::io::Write;

use crate::config::{GeneratorConfig, Target};
use crate::error::GenError;
use crate::simulate::{Outcome, Recognizer};
use crate::table::WordTable;
use crate::{generate, generate_from_path};

const KEYWORDS: &str = "\
# sample keyword table
---*---   T_SYMBOL    -   false false
if        T_IF        -   true  false
iffy      T_IFFY      -   false false
else      T_ELSE      -   true  false
true      T_CONSTVAL  1   true  false
false     T_CONSTVAL  0   true  false
==        T_EQ        -   false false
=         T_ASSIGN    -   false false   # assignment
";

fn write_table(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp table");
    file.write_all(text.as_bytes()).expect("write temp table");
    file
}

#[test]
fn test_generate_from_path_names_the_table() {
    let file = write_table(KEYWORDS);
    let config = GeneratorConfig::default().with_function_name("cut_keyword");
    let generated = generate_from_path(file.path(), &config).expect("generate");

    let name = file
        .path()
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .expect("temp file has a name");
    assert!(generated
        .source
        .starts_with(&format!("// Generated by wordcut from {name}.\n")));
    assert_eq!(generated.stats.entries, 7);
    assert!(generated.stats.fallback);
    assert_eq!(generated.stats.bytes, generated.source.len());
}

#[test]
fn test_unreadable_table_produces_nothing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("missing.txt");
    let err = generate_from_path(&missing, &GeneratorConfig::default())
        .expect_err("missing table must fail");
    match err {
        GenError::Io { path, .. } => assert_eq!(path, missing),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn test_generation_is_idempotent() {
    let table = WordTable::parse(KEYWORDS);
    for target in [Target::Rust, Target::Cpp] {
        let config = GeneratorConfig::for_target(target).with_function_name("cut_keyword");
        let first = generate(&table, &config).expect("first run");
        let second = generate(&table, &config).expect("second run");
        assert_eq!(first, second, "{} output differs between runs", target.name());
    }
}

#[test]
fn test_strict_mode_rejects_ambiguity() {
    let table = WordTable::parse("do T_DO - true false\ndo T_DO2 - true false\n");

    let err = generate(&table, &GeneratorConfig::default().with_strict(true))
        .expect_err("strict mode must reject");
    assert!(matches!(err, GenError::Ambiguous { ref prefix, .. } if prefix == "do"));

    let lenient = generate(&table, &GeneratorConfig::default()).expect("lenient mode");
    assert!(lenient.source.contains("return T_DO;"));
    assert!(!lenient.source.contains("T_DO2"));
}

#[test]
fn test_invalid_config_is_reported_before_building() {
    let table = WordTable::parse(KEYWORDS);
    let err = generate(&table, &GeneratorConfig::default().with_function_name("match"))
        .expect_err("keyword function name");
    assert!(matches!(err, GenError::Config(_)));
}

#[test]
fn test_unparsable_rust_is_rejected() {
    let table = WordTable::parse("if T_IF) - true false\n");
    let err = generate(&table, &GeneratorConfig::default()).expect_err("broken id");
    assert!(matches!(err, GenError::InvalidRust(_)));

    // C++ output is not checked.
    let config = GeneratorConfig::for_target(Target::Cpp);
    assert!(generate(&table, &config).is_ok());
}

#[test]
fn test_keyword_scenarios() {
    let recognizer = Recognizer::from_table(&WordTable::parse(KEYWORDS), true).expect("build");

    let cases: &[(&str, Option<&str>, usize)] = &[
        ("if(", Some("T_IF"), 2),
        ("iffy(", Some("T_IFFY"), 4),
        ("iff(", Some("T_SYMBOL"), 3),
        ("ifx = 1", Some("T_SYMBOL"), 3),
        ("else{", Some("T_ELSE"), 4),
        ("elsewhere", Some("T_SYMBOL"), 9),
        ("el", Some("T_SYMBOL"), 2),
        ("== b", Some("T_EQ"), 2),
        ("= b", Some("T_ASSIGN"), 1),
        ("x1y2+", Some("T_SYMBOL"), 4),
        ("+", None, 0),
        ("", None, 0),
    ];
    for (input, id, consumed) in cases {
        let outcome = recognizer.recognize_str(input);
        assert_eq!(outcome.id(), *id, "id for {input:?}");
        assert_eq!(outcome.consumed(), *consumed, "consumed for {input:?}");
    }

    assert_eq!(
        recognizer.recognize_str("true)"),
        Outcome::Matched {
            id: "T_CONSTVAL".to_string(),
            value: Some("1".to_string()),
            consumed: 4,
        }
    );
}

#[test]
fn test_case_ignore_first_character() {
    let table = WordTable::parse("jan DP_MONTH 0 true true\njun DP_MONTH 5 true true\n");
    let recognizer = Recognizer::from_table(&table, true).expect("build");

    for input in ["jan 1", "Jan 1", "jun,", "Jun,"] {
        assert_eq!(recognizer.recognize_str(input).id(), Some("DP_MONTH"), "{input:?}");
    }
    assert_eq!(recognizer.recognize_str("Janx").id(), None);
    assert_eq!(recognizer.recognize_str("feb").id(), None);
}
