//! The widget's event loop and input dispatch.
//!
//! `App` owns the four pieces of interaction state (two autocomplete
//! fields, the filter selections, the popover) and mutates them from
//! keyboard and mouse events. Rendering records hit-test rectangles into
//! [`HitMap`] each frame; mouse dispatch consults them top-most first.

use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::prelude::*;

use crate::error::{JobSeekError, Result};
use crate::filters::{FilterCategory, SelectionStore};
use crate::logging;
use crate::query::SearchRequest;
use crate::suggest::{FieldState, KEYWORD_CANDIDATES, LOCATION_CANDIDATES};
use crate::tui::popover::{hit, HitRect, PopoverState};
use crate::tui::ui;

/// Which part of the widget owns keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Keyword,
    Location,
    Filters,
}

/// Layout rectangles recorded during draw, consumed by mouse dispatch.
/// Rebuilt every frame; `None` means the element is not currently shown.
#[derive(Debug, Default, Clone)]
pub struct HitMap {
    pub keyword_input: Option<HitRect>,
    pub location_input: Option<HitRect>,
    pub keyword_clear: Option<HitRect>,
    pub location_clear: Option<HitRect>,
    /// Inner row area of each suggestion list (one row per suggestion)
    pub keyword_suggestions: Option<HitRect>,
    pub location_suggestions: Option<HitRect>,
    pub search_button: Option<HitRect>,
    /// One rect per category, in `FilterCategory::ALL` order
    pub filter_buttons: [Option<HitRect>; 4],
    /// The whole popover panel including its border
    pub popover: Option<HitRect>,
    /// Inner option rows of the popover
    pub popover_options: Option<HitRect>,
}

pub struct App {
    pub keyword: FieldState,
    pub location: FieldState,
    pub selections: SelectionStore,
    pub popover: PopoverState,
    pub focus: Focus,
    /// Highlighted button in the filter bar
    pub filter_cursor: FilterCategory,
    /// Highlighted row inside the open popover
    pub option_cursor: usize,
    pub status_message: String,
    pub hits: HitMap,
    pub should_quit: bool,
    search_tx: Sender<SearchRequest>,
}

impl App {
    pub fn new(search_tx: Sender<SearchRequest>) -> Self {
        let mut keyword = FieldState::new(KEYWORD_CANDIDATES);
        keyword.focus();

        Self {
            keyword,
            location: FieldState::new(LOCATION_CANDIDATES),
            selections: SelectionStore::new(),
            popover: PopoverState::default(),
            focus: Focus::Keyword,
            filter_cursor: FilterCategory::Experience,
            option_cursor: 0,
            status_message: "Ready".to_string(),
            hits: HitMap::default(),
            should_quit: false,
            search_tx,
        }
    }

    /// Override the blur-hide grace window on both fields
    pub fn set_blur_delay(&mut self, delay: Duration) {
        self.keyword.set_blur_delay(delay);
        self.location.set_blur_delay(delay);
    }

    pub fn run(
        &mut self,
        terminal: &mut Terminal<impl Backend<Error = std::io::Error>>,
        tick_rate: Duration,
    ) -> Result<()> {
        let mut last_tick = Instant::now();

        loop {
            terminal.draw(|frame| ui::draw(frame, self))?;

            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout).unwrap_or(false) {
                match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key)?;
                    }
                    Ok(Event::Mouse(mouse)) => self.handle_mouse(mouse)?,
                    _ => {}
                }
            }

            if last_tick.elapsed() >= tick_rate {
                self.tick(Instant::now());
                last_tick = Instant::now();
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    /// Apply time-based state: pending blur-hide deadlines on both fields
    pub fn tick(&mut self, now: Instant) {
        self.keyword.tick(now);
        self.location.tick(now);
    }

    fn set_focus(&mut self, focus: Focus) {
        if self.focus == focus {
            return;
        }
        let now = Instant::now();
        match self.focus {
            Focus::Keyword => self.keyword.blur(now),
            Focus::Location => self.location.blur(now),
            Focus::Filters => {}
        }
        self.focus = focus;
        match focus {
            Focus::Keyword => self.keyword.focus(),
            Focus::Location => self.location.focus(),
            Focus::Filters => {}
        }
    }

    // --- Key handling ---

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.should_quit = true;
                return Ok(());
            }
            KeyCode::Esc => {
                if self.popover.is_open() {
                    self.popover.close();
                } else {
                    self.should_quit = true;
                }
                return Ok(());
            }
            KeyCode::Tab => {
                let next = match self.focus {
                    Focus::Keyword => Focus::Location,
                    Focus::Location => Focus::Filters,
                    Focus::Filters => Focus::Keyword,
                };
                self.set_focus(next);
                return Ok(());
            }
            KeyCode::BackTab => {
                let prev = match self.focus {
                    Focus::Keyword => Focus::Filters,
                    Focus::Location => Focus::Keyword,
                    Focus::Filters => Focus::Location,
                };
                self.set_focus(prev);
                return Ok(());
            }
            _ => {}
        }

        match self.focus {
            Focus::Keyword | Focus::Location => self.handle_field_key(key),
            Focus::Filters => self.handle_filter_key(key),
        }
    }

    fn handle_field_key(&mut self, key: KeyEvent) -> Result<()> {
        let field = match self.focus {
            Focus::Keyword => &mut self.keyword,
            Focus::Location => &mut self.location,
            Focus::Filters => return Ok(()),
        };

        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                field.clear();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                field.insert_char(c);
            }
            KeyCode::Backspace => field.backspace(),
            KeyCode::Delete => field.delete(),
            KeyCode::Left => field.move_left(),
            KeyCode::Right => field.move_right(),
            KeyCode::Home => field.move_home(),
            KeyCode::End => field.move_end(),
            KeyCode::Down => field.highlight_next(),
            KeyCode::Up => field.highlight_prev(),
            KeyCode::Enter => {
                if field.list_showing() {
                    if let Some(i) = field.highlighted {
                        field.accept(i);
                        return Ok(());
                    }
                }
                return self.submit_search();
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_filter_key(&mut self, key: KeyEvent) -> Result<()> {
        if let Some(category) = self.popover.open() {
            let options = category.options();
            match key.code {
                KeyCode::Up => self.option_cursor = self.option_cursor.saturating_sub(1),
                KeyCode::Down => {
                    self.option_cursor = (self.option_cursor + 1).min(options.len() - 1);
                }
                KeyCode::Char(' ') | KeyCode::Enter => {
                    self.toggle_option(category, self.option_cursor)?;
                }
                KeyCode::Left => {
                    self.filter_cursor = self.filter_cursor.prev();
                    self.switch_popover_to_cursor();
                }
                KeyCode::Right => {
                    self.filter_cursor = self.filter_cursor.next();
                    self.switch_popover_to_cursor();
                }
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Left => self.filter_cursor = self.filter_cursor.prev(),
            KeyCode::Right => self.filter_cursor = self.filter_cursor.next(),
            KeyCode::Enter | KeyCode::Char(' ') => self.switch_popover_to_cursor(),
            _ => {}
        }
        Ok(())
    }

    /// Click the filter-bar cursor's button: opens, closes, or switches the
    /// popover per the one-open-at-a-time rule
    fn switch_popover_to_cursor(&mut self) {
        let anchor = self
            .button_rect(self.filter_cursor)
            .map(|r| r.0)
            .unwrap_or(0);
        self.popover.click(self.filter_cursor, anchor);
        self.option_cursor = 0;
        match self.popover.open() {
            Some(category) => {
                logging::debug("APP", &format!("popover opened: {}", category.label()));
            }
            None => logging::debug("APP", "popover closed"),
        }
    }

    fn toggle_option(&mut self, category: FilterCategory, index: usize) -> Result<()> {
        let options = category.options();
        if index >= options.len() {
            return Ok(());
        }
        self.selections.toggle(category, options[index])?;
        logging::debug(
            "APP",
            &format!(
                "{}: '{}' now {}",
                category.label(),
                options[index],
                if self.selections.is_selected(category, options[index]) {
                    "selected"
                } else {
                    "deselected"
                }
            ),
        );
        Ok(())
    }

    fn button_rect(&self, category: FilterCategory) -> Option<HitRect> {
        FilterCategory::ALL
            .iter()
            .position(|c| *c == category)
            .and_then(|i| self.hits.filter_buttons[i])
    }

    // --- Mouse handling ---

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return Ok(());
        }
        let (col, row) = (mouse.column, mouse.row);

        // Suggestion lists render on top of everything else. A click here
        // may land during the blur grace window; once the deadline hides
        // the list the click falls through and does nothing. The click is
        // still outside the popover, so an open one closes.
        if self.keyword.list_showing() && hit(self.hits.keyword_suggestions, col, row) {
            if let Some(rect) = self.hits.keyword_suggestions {
                self.keyword.accept((row - rect.1) as usize);
            }
            self.popover.close();
            return Ok(());
        }
        if self.location.list_showing() && hit(self.hits.location_suggestions, col, row) {
            if let Some(rect) = self.hits.location_suggestions {
                self.location.accept((row - rect.1) as usize);
            }
            self.popover.close();
            return Ok(());
        }

        if self.popover.is_open() {
            if let Some(rect) = self.hits.popover_options {
                if hit(Some(rect), col, row) {
                    if let Some(category) = self.popover.open() {
                        let index = (row - rect.1) as usize;
                        self.option_cursor = index.min(category.options().len().saturating_sub(1));
                        self.toggle_option(category, index)?;
                    }
                    return Ok(());
                }
            }
            // Clicks on the panel chrome neither toggle nor close
            if hit(self.hits.popover, col, row) {
                return Ok(());
            }
        }

        // Filter buttons participate in the popover state machine directly;
        // switching categories has no closed intermediate.
        for (i, category) in FilterCategory::ALL.iter().enumerate() {
            if hit(self.hits.filter_buttons[i], col, row) {
                let anchor = self.hits.filter_buttons[i].map(|r| r.0).unwrap_or(col);
                self.popover.click(*category, anchor);
                self.option_cursor = 0;
                self.filter_cursor = *category;
                self.set_focus(Focus::Filters);
                return Ok(());
            }
        }

        // Any other pointer-down closes an open popover, then the click
        // still acts on whatever it landed on
        if self.popover.is_open() {
            self.popover.close();
            logging::debug("APP", "popover closed by outside click");
        }

        if !self.keyword.text.is_empty() && hit(self.hits.keyword_clear, col, row) {
            self.keyword.clear();
            return Ok(());
        }
        if !self.location.text.is_empty() && hit(self.hits.location_clear, col, row) {
            self.location.clear();
            return Ok(());
        }

        if hit(self.hits.keyword_input, col, row) {
            self.set_focus(Focus::Keyword);
            return Ok(());
        }
        if hit(self.hits.location_input, col, row) {
            self.set_focus(Focus::Location);
            return Ok(());
        }

        if hit(self.hits.search_button, col, row) {
            return self.submit_search();
        }

        Ok(())
    }

    /// Snapshot the current query and selections and hand them to the
    /// search consumer
    fn submit_search(&mut self) -> Result<()> {
        let request = SearchRequest::new(&self.keyword.text, &self.location.text, &self.selections);
        logging::info(
            "APP",
            &format!(
                "search requested: keyword='{}' location='{}' selections={}",
                request.query.keyword,
                request.query.location,
                self.selections.total()
            ),
        );
        self.status_message = format!(
            "Search requested: '{}' in '{}'",
            if request.query.keyword.is_empty() {
                "any role"
            } else {
                request.query.keyword.as_str()
            },
            if request.query.location.is_empty() {
                "anywhere"
            } else {
                request.query.location.as_str()
            },
        );
        self.search_tx
            .send(request)
            .map_err(|_| JobSeekError::SearchChannelClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::{channel, Receiver};

    fn test_app() -> (App, Receiver<SearchRequest>) {
        let (tx, rx) = channel();
        let mut app = App::new(tx);
        // Rects as the draw pass would record them on an 80x24 terminal
        app.hits.keyword_input = Some((0, 0, 32, 3));
        app.hits.location_input = Some((32, 0, 32, 3));
        app.hits.keyword_clear = Some((29, 1, 2, 1));
        app.hits.location_clear = Some((61, 1, 2, 1));
        app.hits.search_button = Some((64, 0, 16, 3));
        app.hits.filter_buttons = [
            Some((0, 3, 20, 3)),
            Some((20, 3, 20, 3)),
            Some((40, 3, 20, 3)),
            Some((60, 3, 20, 3)),
        ];
        (app, rx)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::empty()))
            .unwrap();
    }

    fn click(app: &mut App, column: u16, row: u16) {
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::empty(),
        })
        .unwrap();
    }

    #[test]
    fn typing_filters_keyword_suggestions() {
        let (mut app, _rx) = test_app();
        for c in "eng".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.keyword.text, "eng");
        assert_eq!(app.keyword.suggestions, vec!["Software Engineer"]);
        assert!(app.keyword.visible);
    }

    #[test]
    fn tab_cycles_focus_and_schedules_blur() {
        let (mut app, _rx) = test_app();
        assert_eq!(app.focus, Focus::Keyword);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Location);
        // The keyword list survives its blur until the deadline passes
        assert!(app.keyword.visible);
        app.tick(Instant::now() + Duration::from_millis(500));
        assert!(!app.keyword.visible);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Filters);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Keyword);
    }

    #[test]
    fn enter_accepts_highlighted_suggestion() {
        let (mut app, rx) = test_app();
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.keyword.text, "Data Scientist");
        assert!(!app.keyword.visible);
        assert!(rx.try_recv().is_err(), "accepting must not trigger a search");
    }

    #[test]
    fn enter_without_highlight_emits_search_request() {
        let (mut app, rx) = test_app();
        for c in "Designer".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        let request = rx.try_recv().expect("one search request");
        assert_eq!(request.query.keyword, "Designer");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn clicking_filter_buttons_opens_switches_and_toggles() {
        let (mut app, _rx) = test_app();
        click(&mut app, 5, 4); // Experience
        assert_eq!(app.popover.open(), Some(FilterCategory::Experience));
        assert_eq!(app.popover.anchor_x(), 0);

        click(&mut app, 25, 4); // Job Type: switches directly
        assert_eq!(app.popover.open(), Some(FilterCategory::JobType));
        assert_eq!(app.popover.anchor_x(), 20);

        click(&mut app, 25, 4); // same button again: closes
        assert!(!app.popover.is_open());
    }

    #[test]
    fn outside_pointer_down_closes_popover() {
        let (mut app, _rx) = test_app();
        click(&mut app, 45, 4); // open Salary
        assert_eq!(app.popover.open(), Some(FilterCategory::Salary));
        app.hits.popover = Some((40, 6, 28, 6));
        app.hits.popover_options = Some((41, 7, 26, 4));

        click(&mut app, 10, 20); // far away
        assert!(!app.popover.is_open());
    }

    #[test]
    fn clicks_inside_popover_toggle_but_do_not_close() {
        let (mut app, _rx) = test_app();
        click(&mut app, 25, 4); // open Job Type
        app.hits.popover = Some((20, 6, 28, 6));
        app.hits.popover_options = Some((21, 7, 26, 4));

        click(&mut app, 25, 8); // second row: "Part Time"
        assert!(app.popover.is_open());
        assert!(app.selections.is_selected(FilterCategory::JobType, "Part Time"));

        click(&mut app, 25, 8); // toggle off
        assert!(!app.selections.is_selected(FilterCategory::JobType, "Part Time"));
        assert!(app.popover.is_open());

        click(&mut app, 22, 6); // border chrome: no-op
        assert!(app.popover.is_open());
    }

    #[test]
    fn keyboard_drives_popover_options() {
        let (mut app, _rx) = test_app();
        app.set_focus(Focus::Filters);
        press(&mut app, KeyCode::Right); // Job Type
        press(&mut app, KeyCode::Enter); // open
        assert_eq!(app.popover.open(), Some(FilterCategory::JobType));

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' ')); // "Contract"
        assert!(app.selections.is_selected(FilterCategory::JobType, "Contract"));

        press(&mut app, KeyCode::Esc);
        assert!(!app.popover.is_open());
    }

    #[test]
    fn suggestion_click_lands_during_grace_window_but_not_after() {
        let (mut app, _rx) = test_app();
        press(&mut app, KeyCode::Char('e')); // keyword list narrows
        app.hits.keyword_suggestions = Some((1, 3, 30, app.keyword.suggestions.len() as u16));

        click(&mut app, 32 + 2, 1); // focus location: keyword blurs
        assert_eq!(app.focus, Focus::Location);
        assert!(app.keyword.visible, "grace window keeps the list up");

        click(&mut app, 5, 3); // first keyword suggestion, within the window
        assert_eq!(app.keyword.text, "Software Engineer");

        // Again, but let the deadline pass before the click
        press(&mut app, KeyCode::Tab); // -> Filters
        press(&mut app, KeyCode::Tab); // -> Keyword
        app.keyword.clear();
        press(&mut app, KeyCode::Char('e'));
        app.hits.keyword_suggestions = Some((1, 3, 30, app.keyword.suggestions.len() as u16));
        click(&mut app, 32 + 2, 1); // blur keyword again
        app.tick(Instant::now() + Duration::from_millis(500));
        assert!(!app.keyword.visible);

        click(&mut app, 5, 3); // too late: no effect
        assert_eq!(app.keyword.text, "e");
    }

    #[test]
    fn suggestion_click_during_grace_window_closes_open_popover() {
        let (mut app, _rx) = test_app();
        press(&mut app, KeyCode::Char('e')); // keyword list narrows
        app.hits.keyword_suggestions = Some((1, 3, 30, app.keyword.suggestions.len() as u16));

        click(&mut app, 45, 4); // open Salary: keyword blurs, grace window starts
        assert_eq!(app.popover.open(), Some(FilterCategory::Salary));
        assert!(app.keyword.visible, "grace window keeps the list up");

        // Both overlays are live; the suggestion wins the click, and the
        // click is still an outside pointer-down for the popover
        click(&mut app, 5, 3);
        assert_eq!(app.keyword.text, "Software Engineer");
        assert!(!app.popover.is_open());
    }

    #[test]
    fn clear_click_resets_field_and_hides_list() {
        let (mut app, _rx) = test_app();
        press(&mut app, KeyCode::Char('x'));
        assert!(app.keyword.visible);
        click(&mut app, 29, 1);
        assert!(app.keyword.text.is_empty());
        assert_eq!(app.keyword.suggestions, KEYWORD_CANDIDATES);
        assert!(!app.keyword.visible);
    }

    #[test]
    fn search_button_click_snapshots_query_and_filters() {
        let (mut app, rx) = test_app();
        for c in "data".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        click(&mut app, 45, 4); // open Salary
        app.hits.popover = Some((40, 6, 28, 6));
        app.hits.popover_options = Some((41, 7, 26, 4));
        click(&mut app, 45, 10); // "$150k+"

        click(&mut app, 70, 1); // Search button (closes popover first, still searches)
        let request = rx.try_recv().expect("search request");
        assert_eq!(request.query.keyword, "data");
        let salary = request
            .filters
            .iter()
            .find(|f| f.category == "Salary")
            .unwrap();
        assert_eq!(salary.options, vec!["$150k+"]);
        assert!(!app.popover.is_open());
    }

    #[test]
    fn ctrl_q_quits() {
        let (mut app, _rx) = test_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL))
            .unwrap();
        assert!(app.should_quit);
    }
}
