//! Fixed-width line buffer
//!
//! A line is a fixed-length grid of characters, initially blank. Text is
//! painted into half-open spans `[start, end)`; text longer than its span is
//! truncated, and spans reaching past the line are rejected rather than
//! wrapped. The line length never changes after creation.

use crate::{Error, Result};

/// Half-open character span `[start, end)` within a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Span of `width` characters beginning at `start`
    pub fn at(start: usize, width: usize) -> Self {
        Self {
            start,
            end: start + width,
        }
    }

    pub fn width(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

/// Fixed-length mutable line of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    cells: Vec<char>,
}

impl LineBuffer {
    /// Create a blank line of `width` spaces
    pub fn new(width: usize) -> Self {
        Self {
            cells: vec![' '; width],
        }
    }

    pub fn width(&self) -> usize {
        self.cells.len()
    }

    fn check(&self, span: Span) -> Result<()> {
        if span.start > span.end || span.end > self.cells.len() {
            return Err(Error::line_bounds(span.start, span.end, self.cells.len()));
        }
        Ok(())
    }

    /// Paint `text` from the start of `span`, truncated to the span width
    ///
    /// Characters of the span beyond the end of `text` are left untouched.
    pub fn paint(&mut self, span: Span, text: &str) -> Result<()> {
        self.check(span)?;
        for (cell, ch) in self.cells[span.start..span.end].iter_mut().zip(text.chars()) {
            *cell = ch;
        }
        Ok(())
    }

    /// Paint `text` so that its last character lands on `span.end - 1`
    ///
    /// Text wider than the span is painted from the span start and truncated.
    pub fn paint_right(&mut self, span: Span, text: &str) -> Result<()> {
        self.check(span)?;
        let length = text.chars().count();
        if length >= span.width() {
            return self.paint(span, text);
        }
        self.paint(Span::new(span.end - length, span.end), text)
    }

    /// Fill every character of `span` with `fill`
    pub fn fill(&mut self, span: Span, fill: char) -> Result<()> {
        self.check(span)?;
        for cell in &mut self.cells[span.start..span.end] {
            *cell = fill;
        }
        Ok(())
    }

    /// Character at `index`, if inside the line
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.cells.get(index).copied()
    }

    /// True when every character is a space
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|cell| *cell == ' ')
    }

    pub fn into_string(self) -> String {
        self.cells.into_iter().collect()
    }
}

impl std::fmt::Display for LineBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell)?;
        }
        Ok(())
    }
}
