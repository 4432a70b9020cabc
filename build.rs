// Compiles data/limits.ron into a postcard blob plus a phf index keyed by
// format name, so the runtime never parses RON for the limit table.

use schema::{EntityFormat, IntoEnumIterator, LimitEntry};
use std::collections::HashSet;
use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const LIMITS_SOURCE: &str = "data/limits.ron";

fn main() {
    println!("cargo:rerun-if-changed={}", LIMITS_SOURCE);
    println!("cargo:rerun-if-changed=schema/src");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let raw = fs::read_to_string(LIMITS_SOURCE)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", LIMITS_SOURCE, e));
    let entries: Vec<LimitEntry> = ron::from_str(&raw)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {}", LIMITS_SOURCE, e));

    validate_entries(&entries);

    let blob = postcard::to_allocvec(&entries).expect("limit entries serialize");
    fs::write(Path::new(&out_dir).join("limits.postcard"), blob)
        .expect("Failed to write limits.postcard");

    let mut index = phf_codegen::Map::new();
    let positions: Vec<String> = (0..entries.len()).map(|i| i.to_string()).collect();
    for (entry, position) in entries.iter().zip(&positions) {
        let name: &'static str = entry.format.into();
        index.entry(name, position);
    }

    let mut file = fs::File::create(Path::new(&out_dir).join("limits_index.rs"))
        .expect("Failed to create limits_index.rs");
    writeln!(
        file,
        "static LIMIT_INDEX: phf::Map<&'static str, usize> = {};",
        index.build()
    )
    .expect("Failed to write limits_index.rs");
}

/// Every format needs exactly one row.
fn validate_entries(entries: &[LimitEntry]) {
    let mut seen = HashSet::new();
    for entry in entries {
        if !seen.insert(entry.format) {
            panic!("Duplicate limit entry for {}", entry.format);
        }
    }
    for format in EntityFormat::iter() {
        if !seen.contains(&format) {
            panic!("Missing limit entry for {}", format);
        }
    }
}

