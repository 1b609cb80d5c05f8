//! Shared helpers for markup integration tests.

use dom::Node;
use tree::Session;

/// Build one session over `declare` and render its fragment.
pub fn build_str(declare: impl FnOnce(&mut Session<Node>)) -> String {
    markup::build(declare).to_string()
}

/// Assert rendered markup, pointing at the first mismatching byte.
pub fn assert_markup(actual: &str, expected: &str) {
    if actual == expected {
        return;
    }
    let mismatch = actual
        .bytes()
        .zip(expected.bytes())
        .position(|(a, e)| a != e)
        .unwrap_or_else(|| actual.len().min(expected.len()));
    panic!(
        "markup mismatch at byte {mismatch}:\n expected: {expected}\n   actual: {actual}\n           {caret}^",
        caret = " ".repeat(mismatch)
    );
}
