//! Tests for the recognizers compiled from `words/`.
//!
//! The compiled functions are checked on hand-picked inputs and against
//! `wordcut::Recognizer` running the same tables.

use std::path::Path;

use proptest::prelude::*;
use wordcut::{Outcome, Recognizer, WordTable};
use wordcut_tables::{dates, keywords, operators, NO_MATCH};

type CutFn = fn(&mut &[char], &mut i64) -> i32;

/// Run `cut` at the start of `input`, returning the id, the value slot and
/// the unconsumed rest.
fn run(cut: CutFn, input: &str) -> (i32, i64, String) {
    let chars: Vec<char> = input.chars().collect();
    let mut cursor: &[char] = &chars;
    let mut value = -1;
    let id = cut(&mut cursor, &mut value);
    (id, value, cursor.iter().collect())
}

fn load(name: &str) -> Recognizer {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("words")
        .join(format!("{name}.txt"));
    let table = WordTable::load(&path).expect("load word table");
    Recognizer::from_table(&table, true).expect("build trie")
}

fn keyword_id(name: &str) -> i32 {
    match name {
        "T_SYMBOL" => keywords::T_SYMBOL,
        "T_IF" => keywords::T_IF,
        "T_IFFY" => keywords::T_IFFY,
        "T_ELSE" => keywords::T_ELSE,
        "T_WHILE" => keywords::T_WHILE,
        "T_RETURN" => keywords::T_RETURN,
        "T_CONSTVAL" => keywords::T_CONSTVAL,
        "T_EQ" => keywords::T_EQ,
        "T_ASSIGN" => keywords::T_ASSIGN,
        "T_NE" => keywords::T_NE,
        "T_NOT" => keywords::T_NOT,
        other => panic!("unknown keyword id {other}"),
    }
}

fn date_id(name: &str) -> i32 {
    match name {
        "DP_MONTH" => dates::DP_MONTH,
        "DP_AM" => dates::DP_AM,
        "DP_PM" => dates::DP_PM,
        "DP_TZ" => dates::DP_TZ,
        other => panic!("unknown date id {other}"),
    }
}

#[test]
fn test_keywords_at_word_boundaries() {
    let cases = [
        ("if(x)", keywords::T_IF, "(x)"),
        ("iffy(x)", keywords::T_IFFY, "(x)"),
        ("iffy2", keywords::T_IFFY, "2"),
        ("else {", keywords::T_ELSE, " {"),
        ("while(", keywords::T_WHILE, "("),
        ("return;", keywords::T_RETURN, ";"),
        ("== y", keywords::T_EQ, " y"),
        ("= y", keywords::T_ASSIGN, " y"),
        ("!=y", keywords::T_NE, "y"),
        ("!y", keywords::T_NOT, "y"),
    ];
    for (input, expected, rest) in cases {
        let (id, _, left) = run(keywords::cut_keywords, input);
        assert_eq!(id, expected, "id for {input:?}");
        assert_eq!(left, rest, "rest for {input:?}");
    }
}

#[test]
fn test_keyword_prefixes_fall_back_to_symbol() {
    let cases = [
        ("ifx = 1", " = 1"),
        ("iff)", ")"),
        ("i", ""),
        ("elsewhere;", ";"),
        ("returns", ""),
        ("x1y2+z", "+z"),
        ("whiles", ""),
    ];
    for (input, rest) in cases {
        let (id, _, left) = run(keywords::cut_keywords, input);
        assert_eq!(id, keywords::T_SYMBOL, "id for {input:?}");
        assert_eq!(left, rest, "rest for {input:?}");
    }
}

#[test]
fn test_no_match_leaves_cursor() {
    for input in ["", "+", " if", "(", "_if"] {
        let (id, value, left) = run(keywords::cut_keywords, input);
        assert_eq!(id, NO_MATCH, "id for {input:?}");
        assert_eq!(value, -1, "value untouched for {input:?}");
        assert_eq!(left, input);
    }
}

#[test]
fn test_values_are_written_only_on_match() {
    assert_eq!(run(keywords::cut_keywords, "true)"), (keywords::T_CONSTVAL, 1, ")".to_string()));
    assert_eq!(run(keywords::cut_keywords, "false"), (keywords::T_CONSTVAL, 0, String::new()));

    let (id, value, _) = run(keywords::cut_keywords, "truest");
    assert_eq!(id, keywords::T_SYMBOL);
    assert_eq!(value, -1);
}

#[test]
fn test_months_in_any_case() {
    let cases = [
        ("jan 1", 0),
        ("Jan 1", 0),
        ("JANUARY 1", 0),
        ("mAy,", 4),
        ("March", 2),
        ("sept", -1),
        ("december.", 11),
        ("Dec", 11),
    ];
    for (input, month) in cases {
        let (id, value, _) = run(dates::cut_dates, input);
        if month < 0 {
            assert_eq!(id, NO_MATCH, "{input:?}");
        } else {
            assert_eq!(id, dates::DP_MONTH, "{input:?}");
            assert_eq!(value, month, "{input:?}");
        }
    }
}

#[test]
fn test_meridiem_and_time_zones() {
    assert_eq!(run(dates::cut_dates, "AM").0, dates::DP_AM);
    assert_eq!(run(dates::cut_dates, "pm ").0, dates::DP_PM);
    assert_eq!(run(dates::cut_dates, "JST"), (dates::DP_TZ, 900, String::new()));
    assert_eq!(run(dates::cut_dates, "est)"), (dates::DP_TZ, -500, ")".to_string()));
    assert_eq!(run(dates::cut_dates, "Pst"), (dates::DP_TZ, -800, String::new()));
    assert_eq!(run(dates::cut_dates, "amber").0, NO_MATCH);
}

#[test]
fn test_operators_take_the_longest_literal() {
    let cases = [
        ("+1", operators::T_PLUS, "1"),
        ("++i", operators::T_INC, "i"),
        ("+=2", operators::T_PLUS_EQ, "2"),
        ("->x", operators::T_ARROW, "x"),
        ("-x", operators::T_MINUS, "x"),
        ("<<=1", operators::T_SHL_EQ, "1"),
        ("<<1", operators::T_SHL, "1"),
        ("<1", operators::T_LT, "1"),
        (">>>1", operators::T_USHR, "1"),
        (">>1", operators::T_SHR, "1"),
        ("\\n", operators::T_BACKSLASH, "n"),
        ("'a'", operators::T_QUOTE, "a'"),
    ];
    for (input, expected, rest) in cases {
        let (id, _, left) = run(operators::cut_operators, input);
        assert_eq!(id, expected, "id for {input:?}");
        assert_eq!(left, rest, "rest for {input:?}");
    }
    assert_eq!(run(operators::cut_operators, "/").0, NO_MATCH);
}

/// Compiled output and simulated trie must agree on id, consumption and value.
fn assert_agrees(cut: CutFn, recognizer: &Recognizer, id_of: fn(&str) -> i32, input: &str) {
    let (id, value, left) = run(cut, input);
    let consumed = input.chars().count() - left.chars().count();
    let outcome = recognizer.recognize_str(input);

    assert_eq!(id, outcome.id().map_or(NO_MATCH, id_of), "id for {input:?}");
    assert_eq!(consumed, outcome.consumed(), "consumed for {input:?}");
    let expected: i64 = match &outcome {
        Outcome::Matched { value: Some(v), .. } => v.parse().expect("numeric value"),
        _ => -1,
    };
    assert_eq!(value, expected, "value for {input:?}");
}

fn keyword_input() -> impl Strategy<Value = String> {
    let words = prop::sample::select(vec![
        "if", "iffy", "else", "while", "return", "true", "false", "==", "=", "!=", "!",
    ]);
    (words, "[a-z0-9_ =!(]{0,3}").prop_map(|(word, tail)| format!("{word}{tail}"))
}

fn date_input() -> impl Strategy<Value = String> {
    let words = prop::sample::select(vec![
        "jan", "january", "mar", "march", "may", "jun", "june", "am", "pm", "est", "jst",
    ]);
    (words, "[A-Za-z]{0,1}", "[ .,0-9a-z]{0,2}").prop_map(|(word, lead, tail)| {
        // Flip the case of the first letter half the time.
        let word = if lead.is_empty() {
            word.to_string()
        } else {
            let mut chars = word.chars();
            let first = chars.next().map(|c| c.to_ascii_uppercase()).unwrap_or_default();
            format!("{first}{}", chars.as_str())
        };
        format!("{word}{tail}")
    })
}

proptest! {
    #[test]
    fn prop_keywords_match_simulation(input in keyword_input()) {
        let recognizer = load("keywords");
        assert_agrees(keywords::cut_keywords, &recognizer, keyword_id, &input);
    }

    #[test]
    fn prop_keywords_match_simulation_on_noise(input in "[a-z=!( ]{0,8}") {
        let recognizer = load("keywords");
        assert_agrees(keywords::cut_keywords, &recognizer, keyword_id, &input);
    }

    #[test]
    fn prop_dates_match_simulation(input in date_input()) {
        let recognizer = load("dates");
        assert_agrees(dates::cut_dates, &recognizer, date_id, &input);
    }
}
