//! Forward-only view over a token sequence.

use super::{ReadErr, ReadResult};

/// Deepest nesting of forms a single read will descend into.
///
/// Reading recurses once per level, so this bounds stack use;
/// deeper input fails like any other malformed form.
pub const MAX_DEPTH: usize = 512;

/// Position-tracking reader over tokens.
///
/// A cursor belongs to a single parse; it is not meant to be shared.
#[derive(Debug)]
pub struct Cursor<'a> {
    tokens: Vec<&'a str>,
    position: usize,
    depth: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: Vec<&'a str>) -> Self {
        Cursor {
            tokens,
            position: 0,
            depth: 0,
        }
    }

    /// The token at the current position, without consuming it.
    pub fn peek(&self) -> ReadResult<&'a str> {
        self.tokens
            .get(self.position)
            .copied()
            .ok_or_else(|| ReadErr::eof(format!("no token at position {}", self.position)))
    }

    /// The token at the current position; moves past it.
    pub fn next(&mut self) -> ReadResult<&'a str> {
        let token = self.peek()?;
        self.advance();
        Ok(token)
    }

    /// Move past the current token without looking at it.
    pub fn advance(&mut self) {
        self.position += 1;
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of tokens not yet consumed.
    pub fn remaining(&self) -> usize {
        self.tokens.len().saturating_sub(self.position)
    }

    /// True if every token has been consumed.
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Enter a nested form. Fails past [`MAX_DEPTH`].
    pub fn descend(&mut self) -> ReadResult<()> {
        if self.depth >= MAX_DEPTH {
            return Err(ReadErr::eof(format!(
                "form nested too deeply at token {} (limit {MAX_DEPTH})",
                self.position
            )));
        }
        self.depth += 1;
        Ok(())
    }

    /// Leave a nested form entered with [`Cursor::descend`].
    pub fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}
