//! Recognizers generated at build time from the tables in `words/`.
//!
//! Every module pairs the identifiers a table names with the function
//! `build.rs` generated for it. Each function takes a cursor over the
//! remaining input and a value slot:
//!
//! ```
//! use wordcut_tables::keywords;
//!
//! let input: Vec<char> = "while (x)".chars().collect();
//! let mut cursor: &[char] = &input;
//! let mut value = 0;
//! assert_eq!(keywords::cut_keywords(&mut cursor, &mut value), keywords::T_WHILE);
//! assert_eq!(cursor.iter().collect::<String>(), " (x)");
//! ```

/// Returned by every recognizer when nothing matches.
pub const NO_MATCH: i32 = 0;

/// Reserved words and comparisons, with identifier fallback.
pub mod keywords {
    pub const T_SYMBOL: i32 = 1;
    pub const T_IF: i32 = 2;
    pub const T_IFFY: i32 = 3;
    pub const T_ELSE: i32 = 4;
    pub const T_WHILE: i32 = 5;
    pub const T_RETURN: i32 = 6;
    pub const T_CONSTVAL: i32 = 7;
    pub const T_EQ: i32 = 8;
    pub const T_ASSIGN: i32 = 9;
    pub const T_NE: i32 = 10;
    pub const T_NOT: i32 = 11;

    include!(concat!(env!("OUT_DIR"), "/keywords.rs"));
}

/// Month names, meridiem markers and time zones, any letter case.
pub mod dates {
    pub const DP_MONTH: i32 = 1;
    pub const DP_AM: i32 = 2;
    pub const DP_PM: i32 = 3;
    pub const DP_TZ: i32 = 4;

    include!(concat!(env!("OUT_DIR"), "/dates.rs"));
}

/// Punctuation, longest match first.
pub mod operators {
    pub const T_PLUS: i32 = 1;
    pub const T_INC: i32 = 2;
    pub const T_PLUS_EQ: i32 = 3;
    pub const T_MINUS: i32 = 4;
    pub const T_DEC: i32 = 5;
    pub const T_MINUS_EQ: i32 = 6;
    pub const T_ARROW: i32 = 7;
    pub const T_STAR: i32 = 8;
    pub const T_STAR_EQ: i32 = 9;
    pub const T_LT: i32 = 10;
    pub const T_LE: i32 = 11;
    pub const T_SHL: i32 = 12;
    pub const T_SHL_EQ: i32 = 13;
    pub const T_GT: i32 = 14;
    pub const T_GE: i32 = 15;
    pub const T_SHR: i32 = 16;
    pub const T_USHR: i32 = 17;
    pub const T_BACKSLASH: i32 = 18;
    pub const T_QUOTE: i32 = 19;

    include!(concat!(env!("OUT_DIR"), "/operators.rs"));
}
