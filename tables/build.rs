//! Build script that generates a recognizer for every table in `words/`.
//!
//! Each `words/NAME.txt` becomes `$OUT_DIR/NAME.rs` holding one function,
//! `cut_NAME`, which `src/lib.rs` includes next to the table's identifiers.

use std::env;
use std::fs;
use std::path::Path;

use wordcut::{generate_from_path, GeneratorConfig};

const TABLES: &[&str] = &["keywords", "dates", "operators"];

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let words_dir = Path::new(&manifest_dir).join("words");

    for name in TABLES {
        let table = words_dir.join(format!("{name}.txt"));
        println!("cargo:rerun-if-changed={}", table.display());

        let config = GeneratorConfig::default()
            .with_function_name(format!("cut_{name}"))
            .with_strict(true);
        let generated = generate_from_path(&table, &config)
            .unwrap_or_else(|e| panic!("Failed to generate {}: {e}", table.display()));

        let dest = Path::new(&out_dir).join(format!("{name}.rs"));
        fs::write(&dest, generated.source)
            .unwrap_or_else(|e| panic!("Failed to write {}: {e}", dest.display()));
    }
    println!("cargo:rerun-if-changed=build.rs");
}
