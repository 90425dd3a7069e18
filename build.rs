//! Build script to generate embedded level sets
//!
//! Reads the level data files and generates Rust source code with const arrays
//! of `(difficulty, solution, clue)` tuples.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_level_set(
        "data/levels_en.txt",
        &Path::new(&out_dir).join("levels_en.rs"),
        "ENGLISH_LEVELS",
        "Built-in English clue levels",
    );

    generate_level_set(
        "data/levels_ar.txt",
        &Path::new(&out_dir).join("levels_ar.rs"),
        "ARABIC_LEVELS",
        "Built-in Arabic clue levels",
    );

    // Rebuild if level data changes
    println!("cargo:rerun-if-changed=data/levels_en.txt");
    println!("cargo:rerun-if-changed=data/levels_ar.txt");
}

fn generate_level_set(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let records: Vec<(&str, &str, &str)> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let mut fields = line.splitn(3, '|').map(str::trim);
            match (fields.next(), fields.next(), fields.next()) {
                (Some(difficulty), Some(solution), Some(clue)) => (difficulty, solution, clue),
                _ => panic!("Malformed level line in {input_path}: {line}"),
            }
        })
        .collect();
    let count = records.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated level set").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment} as `(difficulty, solution, clue)`").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, &str, &str)] = &[").unwrap();

    for (difficulty, solution, clue) in records {
        writeln!(output, "    ({difficulty:?}, {solution:?}, {clue:?}),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of levels in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
