//! Autocomplete field state and the suggestion filter.
//!
//! Each text input owns one [`FieldState`]; the keyword and location fields
//! are two independent instances over different candidate lists rather than
//! one state machine parameterized by a field tag.

use std::time::{Duration, Instant};

/// Candidate job titles for the keyword field
pub const KEYWORD_CANDIDATES: &[&str] = &[
    "Software Engineer",
    "Data Scientist",
    "Product Manager",
    "Designer",
];

/// Candidate locations for the location field
pub const LOCATION_CANDIDATES: &[&str] = &["Mangalore", "Bangalore", "Kerala", "Remote"];

/// How long a suggestion list stays up after its field loses focus, so a
/// click on a suggestion can still land. Best-effort: a click that arrives
/// later than this simply misses.
pub const DEFAULT_BLUR_HIDE_DELAY: Duration = Duration::from_millis(200);

/// Filter candidates down to those whose lowercase form contains the
/// lowercase query as a literal substring, preserving candidate order.
/// An empty query matches everything. No fuzziness, no ranking.
pub fn filter_candidates(query: &str, candidates: &'static [&'static str]) -> Vec<&'static str> {
    if query.is_empty() {
        return candidates.to_vec();
    }
    let needle = query.to_lowercase();
    candidates
        .iter()
        .copied()
        .filter(|c| c.to_lowercase().contains(&needle))
        .collect()
}

/// State of one autocomplete text input
pub struct FieldState {
    pub text: String,
    /// Byte offset of the cursor within `text`
    pub cursor_pos: usize,
    candidates: &'static [&'static str],
    pub suggestions: Vec<&'static str>,
    pub visible: bool,
    /// Keyboard highlight within the suggestion list
    pub highlighted: Option<usize>,
    /// When set, the list hides once this deadline passes
    hide_at: Option<Instant>,
    blur_delay: Duration,
}

impl FieldState {
    pub fn new(candidates: &'static [&'static str]) -> Self {
        Self {
            text: String::new(),
            cursor_pos: 0,
            candidates,
            suggestions: candidates.to_vec(),
            visible: false,
            highlighted: None,
            hide_at: None,
            blur_delay: DEFAULT_BLUR_HIDE_DELAY,
        }
    }

    pub fn set_blur_delay(&mut self, delay: Duration) {
        self.blur_delay = delay;
    }

    /// The field gained focus: show its suggestion list and cancel any
    /// pending hide.
    pub fn focus(&mut self) {
        self.visible = true;
        self.hide_at = None;
    }

    /// The field lost focus: schedule the list to hide after the blur
    /// delay instead of hiding it immediately.
    pub fn blur(&mut self, now: Instant) {
        if self.visible {
            self.hide_at = Some(now + self.blur_delay);
        }
        self.highlighted = None;
    }

    /// Apply a pending blur-hide deadline. Called from the event loop tick.
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.hide_at {
            if now >= deadline {
                self.visible = false;
                self.hide_at = None;
                self.highlighted = None;
            }
        }
    }

    /// Recompute suggestions from the current text and show the list
    fn on_edit(&mut self) {
        self.suggestions = filter_candidates(&self.text, self.candidates);
        self.visible = true;
        self.hide_at = None;
        self.highlighted = None;
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
        self.on_edit();
    }

    pub fn backspace(&mut self) {
        if self.cursor_pos > 0 {
            // Find the previous character boundary
            let prev = self.text[..self.cursor_pos]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.remove(prev);
            self.cursor_pos = prev;
            self.on_edit();
        }
    }

    pub fn delete(&mut self) {
        if self.cursor_pos < self.text.len() {
            self.text.remove(self.cursor_pos);
            self.on_edit();
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor_pos > 0 {
            let prev = self.text[..self.cursor_pos]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.cursor_pos = prev;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor_pos < self.text.len() {
            let next = self.text[self.cursor_pos..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_pos + i)
                .unwrap_or(self.text.len());
            self.cursor_pos = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor_pos = self.text.len();
    }

    /// Reset the field: empty text, full candidate list, list hidden
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor_pos = 0;
        self.suggestions = self.candidates.to_vec();
        self.visible = false;
        self.hide_at = None;
        self.highlighted = None;
    }

    /// Accept the suggestion at `index`: the field takes the suggestion
    /// verbatim and the list hides. Suggestions are not recomputed until
    /// the next edit.
    pub fn accept(&mut self, index: usize) -> Option<&'static str> {
        let suggestion = *self.suggestions.get(index)?;
        self.text = suggestion.to_string();
        self.cursor_pos = self.text.len();
        self.visible = false;
        self.hide_at = None;
        self.highlighted = None;
        Some(suggestion)
    }

    pub fn highlight_next(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        self.highlighted = Some(match self.highlighted {
            Some(i) => (i + 1).min(self.suggestions.len() - 1),
            None => 0,
        });
    }

    pub fn highlight_prev(&mut self) {
        self.highlighted = match self.highlighted {
            Some(0) | None => None,
            Some(i) => Some(i - 1),
        };
    }

    /// Whether the list should currently render (visible, with content)
    pub fn list_showing(&self) -> bool {
        self.visible && !self.suggestions.is_empty()
    }
}
