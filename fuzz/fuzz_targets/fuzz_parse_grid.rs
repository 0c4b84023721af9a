//! Fuzz target for the grid parser.
//!
//! This target feeds arbitrary text to the grid parser to find:
//! - Panics on malformed, ragged, or marker-less input
//! - Markers that stand outside the floor set
//! - Excessive memory allocation
//!
//! # Running
//!
//! ```bash
//! cd fuzz
//! cargo +nightly fuzz run fuzz_parse_grid
//! ```

#![no_main]

use cesta_core::grid::{parse_grid, CARDINAL_STEPS};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to string (UTF-8 validation)
    if let Ok(text) = std::str::from_utf8(data) {
        // The parser should never panic on any input
        let parsed = parse_grid(text, &CARDINAL_STEPS);

        // A marker in the graph always stands on connected floor
        if let Some(start) = parsed.start {
            if parsed.graph.has_node(&start) {
                assert!(!parsed.graph.neighbors(&start).is_empty());
            }
        }
    }
});
