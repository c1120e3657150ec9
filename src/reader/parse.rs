//! Recursive-descent parser from tokens to values.
//!
//! Each function consumes exactly the tokens of one form.
//! Any failure aborts the whole read; there is no recovery mid-form.

use super::cursor::Cursor;
use super::quotes::properly_quoted_string;
use super::{ReadErr, ReadResult};
use crate::data::{Integer, Mapping, Value};

/// Read one form, starting at the cursor's current token.
///
/// Nesting deeper than [`MAX_DEPTH`](super::cursor::MAX_DEPTH) is an error.
pub fn read_form(cursor: &mut Cursor<'_>) -> ReadResult<Value> {
    cursor.descend()?;
    let form = read_nested(cursor);
    cursor.ascend();
    form
}

fn read_nested(cursor: &mut Cursor<'_>) -> ReadResult<Value> {
    match cursor.peek()? {
        "(" => read_sequence(cursor, ")").map(Value::List),
        "[" => read_sequence(cursor, "]").map(Value::Vector),
        "{" => read_mapping(cursor).map(Value::from),
        "'" => read_quote(cursor, "quote"),
        "`" => read_quote(cursor, "quasiquote"),
        "~" => read_quote(cursor, "unquote"),
        "~@" => read_quote(cursor, "splice-unquote"),
        "@" => read_quote(cursor, "deref"),
        "^" => read_metadata(cursor),
        _ => read_atom(cursor),
    }
}

/// Read the forms between an opening bracket and `closing`.
fn read_sequence(cursor: &mut Cursor<'_>, closing: &str) -> ReadResult<Vec<Value>> {
    let start = cursor.position();
    cursor.advance(); // opening bracket
    let mut items = Vec::new();
    loop {
        let token = cursor.peek().map_err(|err| {
            err.annotate(format!(
                "expected '{closing}' to close the form at token {start}"
            ))
        })?;
        if token == closing {
            break;
        }
        items.push(read_form(cursor)?);
    }
    cursor.advance(); // closing bracket
    Ok(items)
}

/// Read a `{...}` form as alternating keys and values.
fn read_mapping(cursor: &mut Cursor<'_>) -> ReadResult<Mapping> {
    let start = cursor.position();
    let opening = cursor.next()?;
    if opening != "{" {
        return Err(ReadErr::eof(format!(
            "expected '{{' at token {start}, found {opening:?}"
        )));
    }
    let unclosed =
        |err: ReadErr| err.annotate(format!("expected '}}' to close the mapping at token {start}"));

    let mut mapping = Mapping::new();
    while cursor.peek().map_err(unclosed)? != "}" {
        let key = read_form(cursor)?;
        if cursor.peek().map_err(unclosed)? == "}" {
            return Err(ReadErr::eof(format!(
                "mapping at token {start} has a key without a value"
            )));
        }
        let value = read_form(cursor)?;
        mapping.insert(key, value);
    }
    cursor.advance(); // closing brace
    Ok(mapping)
}

/// Read a reader macro: `(name <next form>)`.
fn read_quote(cursor: &mut Cursor<'_>, name: &str) -> ReadResult<Value> {
    cursor.advance(); // sigil
    let form = read_form(cursor).map_err(|err| err.annotate(format!("in {name}")))?;
    Ok(Value::list([Value::symbol(name), form]))
}

/// Read `^{meta} form` as `(with-meta form {meta})`.
///
/// The metadata comes first in the input, but last in the output.
fn read_metadata(cursor: &mut Cursor<'_>) -> ReadResult<Value> {
    cursor.advance(); // ^
    let meta = read_mapping(cursor).map_err(|err| err.annotate("in with-meta"))?;
    let form = read_form(cursor).map_err(|err| err.annotate("in with-meta"))?;
    Ok(Value::list([
        Value::symbol("with-meta"),
        form,
        Value::from(meta),
    ]))
}

/// Read a number, string, or symbol.
fn read_atom(cursor: &mut Cursor<'_>) -> ReadResult<Value> {
    let position = cursor.position();
    let token = cursor.next()?;
    if let Ok(n) = token.parse::<Integer>() {
        Ok(Value::from(n))
    } else if token.starts_with('"') {
        if properly_quoted_string(token) {
            Ok(Value::String(token.to_owned()))
        } else {
            Err(ReadErr::eof(format!(
                "unterminated or malformed string at token {position}"
            )))
        }
    } else {
        Ok(Value::Symbol(token.to_owned()))
    }
}
