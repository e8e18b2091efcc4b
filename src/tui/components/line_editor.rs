//! Single-line text buffer with a cursor, shared by `TodoInput` and the
//! inline title editor in `TaskItem`.
//!
//! The cursor is a byte offset that always sits on a char boundary.
//! Horizontal scrolling is tracked in display columns (`unicode-width`), so
//! wide characters keep the terminal cursor where the text actually is.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineEditor {
    text: String,
    /// Byte offset into `text` (0..=text.len())
    cursor: usize,
    /// First visible display column
    scroll: usize,
}

/// The slice of the buffer that fits in a field, plus where the cursor lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    pub text: String,
    pub cursor_col: u16,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        let mut editor = Self::new();
        editor.set_text(text);
        editor
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Replace the buffer and park the cursor at the end.
    pub fn set_text(&mut self, text: &str) {
        self.text = single_line(text);
        self.cursor = self.text.len();
        self.scroll = 0;
    }

    /// Take the buffer, leaving the editor empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        self.scroll = 0;
        std::mem::take(&mut self.text)
    }

    pub fn insert_char(&mut self, c: char) {
        let c = if c == '\n' || c == '\r' { ' ' } else { c };
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_str(&mut self, s: &str) {
        let s = single_line(s);
        self.text.insert_str(self.cursor, &s);
        self.cursor += s.len();
    }

    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let prev = prev_char_boundary(&self.text, self.cursor);
        self.text.drain(prev..self.cursor);
        self.cursor = prev;
        true
    }

    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.text.len() {
            return false;
        }
        let next = next_char_boundary(&self.text, self.cursor);
        self.text.drain(self.cursor..next);
        true
    }

    fn move_to(&mut self, pos: usize) -> bool {
        let moved = pos != self.cursor;
        self.cursor = pos;
        moved
    }

    /// Apply an editing event. Returns `true` if the buffer or cursor changed.
    pub fn handle_event(&mut self, event: &TuiEvent) -> bool {
        match event {
            TuiEvent::InputChar(c) => {
                self.insert_char(*c);
                true
            }
            TuiEvent::Paste(text) => {
                self.insert_str(text);
                !text.is_empty()
            }
            TuiEvent::Backspace => self.backspace(),
            TuiEvent::Delete => self.delete(),
            TuiEvent::CursorLeft => self.move_to(prev_char_boundary(&self.text, self.cursor)),
            TuiEvent::CursorRight => self.move_to(next_char_boundary(&self.text, self.cursor)),
            TuiEvent::CursorHome => self.move_to(0),
            TuiEvent::CursorEnd => self.move_to(self.text.len()),
            TuiEvent::WordLeft => self.move_to(prev_word_boundary(&self.text, self.cursor)),
            TuiEvent::WordRight => self.move_to(next_word_boundary(&self.text, self.cursor)),
            _ => false,
        }
    }

    /// Scroll so the cursor is visible in a field `width` columns wide and
    /// return the visible slice.
    pub fn viewport(&mut self, width: u16) -> Viewport {
        let width = width as usize;
        if width == 0 {
            return Viewport {
                text: String::new(),
                cursor_col: 0,
            };
        }

        let cursor_col = self.text[..self.cursor].width();
        // Keep one column free for the cursor itself at the end of the line.
        if cursor_col < self.scroll {
            self.scroll = cursor_col;
        } else if cursor_col >= self.scroll + width {
            self.scroll = cursor_col + 1 - width;
        }

        let mut col = 0;
        let mut visible = String::new();
        for c in self.text.chars() {
            let w = c.width().unwrap_or(0);
            if col >= self.scroll && col + w <= self.scroll + width {
                visible.push(c);
            }
            col += w;
            if col >= self.scroll + width {
                break;
            }
        }

        Viewport {
            text: visible,
            cursor_col: (cursor_col - self.scroll) as u16,
        }
    }
}

fn single_line(s: &str) -> String {
    s.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

/// Byte offset of the previous char boundary before `pos`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Byte offset of the next char boundary after `pos`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Readline `backward-word`: skip separators, then the word before them.
fn prev_word_boundary(text: &str, pos: usize) -> usize {
    let mut chars = text[..pos].char_indices().rev().peekable();

    while chars.peek().is_some_and(|&(_, c)| !is_word_char(c)) {
        chars.next();
    }

    let mut boundary = 0;
    while let Some(&(i, c)) = chars.peek() {
        if !is_word_char(c) {
            boundary = i + c.len_utf8();
            break;
        }
        boundary = i;
        chars.next();
    }
    boundary
}

/// Readline `forward-word`: skip separators, then the next word.
fn next_word_boundary(text: &str, pos: usize) -> usize {
    let mut chars = text[pos..].char_indices().peekable();

    while chars.peek().is_some_and(|&(_, c)| !is_word_char(c)) {
        chars.next();
    }
    while chars.peek().is_some_and(|&(_, c)| is_word_char(c)) {
        chars.next();
    }

    match chars.peek() {
        Some(&(i, _)) => pos + i,
        None => text.len(),
    }
}
