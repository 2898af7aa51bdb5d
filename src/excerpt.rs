use serde::{Deserialize, Serialize};

/// How many characters to keep around a keyword hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExcerptWindow {
    pub before: usize,
    pub after: usize,
}

impl Default for ExcerptWindow {
    fn default() -> Self {
        Self {
            before: 100,
            after: 5000,
        }
    }
}

/// A window of the original text around the first hit of a keyword.
/// Positions are character (not byte) offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Excerpt<'a> {
    pub position: usize,
    pub start: usize,
    pub text: &'a str,
}

/// Original text paired with its lowercased form, computed once and
/// searched for every keyword.
#[derive(Debug)]
pub struct SearchText<'a> {
    original: &'a str,
    lowered: String,
}

impl<'a> SearchText<'a> {
    pub fn new(original: &'a str) -> Self {
        Self {
            original,
            lowered: original.to_lowercase(),
        }
    }

    /// Case-insensitive search for the first occurrence of `keyword`.
    ///
    /// The hit position is counted in the lowercased text and applied to the
    /// original one; the window start clamps at 0 and the end silently
    /// stops at the end of the text.
    pub fn find(&self, keyword: &str, window: ExcerptWindow) -> Option<Excerpt<'a>> {
        let needle = keyword.to_lowercase();
        let byte_index = self.lowered.find(&needle)?;
        let position = self.lowered[..byte_index].chars().count();

        let start = position.saturating_sub(window.before);
        let end = position.saturating_add(window.after);

        Some(Excerpt {
            position,
            start,
            text: char_slice(self.original, start, end),
        })
    }
}

fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map_or(text.len(), |(offset, _)| offset)
}

/// `text[start..end]` by character index, truncated to the text length.
pub fn char_slice(text: &str, start: usize, end: usize) -> &str {
    if start >= end {
        return "";
    }
    let from = byte_offset(text, start);
    let to = byte_offset(text, end);
    &text[from..to]
}
