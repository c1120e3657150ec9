//! Render an unevaluated Lisp tree into:
//! - Lisp on stdout, i.e. the canonical rendering of the input
//! - Debug on stderr - the internal representation from the `mal_reader` crate.
//!
//! The debug format is given by the defaults of the `derive(Debug)` macro in Rust.
//! Input is read as one top-level form per line; blank lines are skipped.
//!
//! ```ignore
//! <input.lisp lisp_to_debug
//! ```

use std::io::{BufRead, Write};

fn main() -> std::io::Result<()> {
    let stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr().lock();

    for line in stdin.lines() {
        let line = line?;
        if mal_reader::repl::is_blank(&line) {
            continue;
        }
        let form = mal_reader::read_str(&line)?;
        writeln!(stdout, "{}", form)?;
        writeln!(stderr, "{:?}", form)?;
    }
    Ok(())
}
