//! Build script to generate the embedded puzzle list
//!
//! Reads `data/puzzles.txt` and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_puzzle_list(
        "data/puzzles.txt",
        &Path::new(&out_dir).join("puzzles.rs"),
        "PUZZLES",
        "Embedded daily puzzles as (target, solution) pairs",
    );

    // Rebuild if the puzzle list changes
    println!("cargo:rerun-if-changed=data/puzzles.txt");
}

fn generate_puzzle_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let entries: Vec<(i64, &str)> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let (target, solution) = line
                .split_once(char::is_whitespace)
                .unwrap_or_else(|| panic!("Malformed puzzle line: {line}"));
            let target: i64 = target
                .parse()
                .unwrap_or_else(|e| panic!("Bad target in '{line}': {e}"));
            (target, solution.trim())
        })
        .collect();
    let count = entries.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated puzzle list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(i64, &str)] = &[").unwrap();

    for (target, solution) in entries {
        writeln!(output, "    ({target}, \"{solution}\"),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of puzzles in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
