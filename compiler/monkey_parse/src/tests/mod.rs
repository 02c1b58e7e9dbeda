//! Parser tests.
//!
//! - `parser`: statements, literals and compound expressions
//! - `precedence`: operator binding checked through the rendered form
//! - `recovery`: error messages and continuing past failed statements

mod parser;

use crate::{parse, ParseOutput};

/// Parse and fail the test on any syntax error.
fn parse_ok(source: &str) -> ParseOutput {
    let output = parse(source);
    assert!(
        !output.has_errors(),
        "unexpected parse errors for {source:?}: {:?}",
        output.errors
    );
    output
}
