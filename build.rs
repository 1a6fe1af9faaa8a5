//! Build script to generate embedded word tables
//!
//! Reads the word list files and packs them into fixed-record byte strings,
//! five bytes per word with no separators.

use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const WORDS_PER_LINE: usize = 16;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let solutions = read_words("data/solutions.txt");
    let allowed = read_words("data/allowed.txt");

    // Solutions stay in day order
    write_table(
        &Path::new(&out_dir).join("solutions.rs"),
        "SOLUTIONS",
        "Secret words in puzzle order, index 0 is the epoch day",
        &solutions,
    );

    // Accepted guesses: every solution plus the extra allowed words, byte-sorted
    let accepted: BTreeSet<&str> = solutions
        .iter()
        .chain(allowed.iter())
        .map(String::as_str)
        .collect();
    let accepted: Vec<String> = accepted.into_iter().map(str::to_string).collect();
    write_table(
        &Path::new(&out_dir).join("accepted.rs"),
        "ACCEPTED",
        "Accepted guesses, byte-sorted ascending",
        &accepted,
    );

    println!("cargo:rerun-if-changed=data/solutions.txt");
    println!("cargo:rerun-if-changed=data/allowed.txt");
}

fn read_words(input_path: &str) -> Vec<String> {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            assert!(
                line.len() == 5 && line.bytes().all(|b| b.is_ascii_lowercase()),
                "{input_path}: '{line}' is not a five letter lowercase word"
            );
            line.to_string()
        })
        .collect()
}

fn write_table(output_path: &Path, const_name: &str, doc_comment: &str, words: &[String]) {
    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word table").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[u8] = b\"\\").unwrap();

    for line in words.chunks(WORDS_PER_LINE) {
        writeln!(output, "    {}\\", line.concat()).unwrap();
    }

    writeln!(output, "\";").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {};", words.len()).unwrap();
}
