//! Read-eval-print.
//!
//! [`rep`] handles one line. [`repl`] drives it over any line source;
//! the interactive binary supplies lines from a line editor instead.

use std::io::{BufRead, Write};

use crate::eval::eval;
use crate::reader::{properly_quoted_string, read_str, tokenize, ReadResult};

/// Read, evaluate, and print one top-level form.
///
/// A read failure is printed in place of the result.
pub fn rep(line: &str) -> String {
    match read_eval(line) {
        Ok(s) => s,
        Err(e) => e.to_string(),
    }
}

fn read_eval(line: &str) -> ReadResult<String> {
    let form = read_str(line)?;
    Ok(eval(form).to_string())
}

/// True if the line has nothing to read: only whitespace, commas, or comments.
pub fn is_blank(line: &str) -> bool {
    tokenize(line).is_empty()
}

/// False if the input ends inside an open string, so a line editor should keep reading.
///
/// Only the last token can be an unterminated string: the string pattern runs to the
/// end of input when there is no closing quote. Comments are already gone by then,
/// so a quote inside a comment does not count.
pub fn is_complete(input: &str) -> bool {
    match tokenize(input).last() {
        Some(last) if last.starts_with('"') => properly_quoted_string(last),
        _ => true,
    }
}

/// Run a non-interactive loop: one top-level form per input line.
///
/// Results go to `output`, read errors go to `errors`.
/// Blank lines are skipped. Returns at end of input.
pub fn repl(
    input: &mut impl BufRead,
    output: &mut impl Write,
    errors: &mut impl Write,
) -> std::io::Result<()> {
    let mut line = String::new();
    let mut count = 0usize;
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        if is_blank(&line) {
            continue;
        }
        count += 1;
        match read_eval(&line) {
            Ok(s) => writeln!(output, "{s}")?,
            Err(e) => {
                tracing::debug!("line {count}: {e}");
                writeln!(errors, "{e}")?
            }
        }
    }
    tracing::debug!("read {count} forms");
    Ok(())
}
