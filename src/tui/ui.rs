use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::filters::FilterCategory;
use crate::suggest::FieldState;
use crate::tui::app::{App, Focus};
use crate::tui::colors;
use crate::tui::popover::HitRect;

/// Display width of the leading search icon plus its trailing space
const ICON_PAD: u16 = 3;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    // Hit rects are rebuilt from scratch every frame
    app.hits = Default::default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Length(3), // Filter buttons
            Constraint::Min(4),    // Canvas the dropdowns overlay
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_search_row(frame, app, chunks[0]);
    draw_filter_row(frame, app, chunks[1]);
    draw_status_bar(frame, app, chunks[3]);

    // Overlays: the popover first, suggestion lists on top of it
    if app.popover.is_open() {
        draw_popover(frame, app, area, chunks[1]);
    }
    draw_suggestion_lists(frame, app, area);

    position_cursor(frame, app);
}

fn draw_search_row(frame: &mut Frame, app: &mut App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(40),
            Constraint::Percentage(20),
        ])
        .split(area);

    app.hits.keyword_input = Some(rect_tuple(cols[0]));
    app.hits.location_input = Some(rect_tuple(cols[1]));

    app.hits.keyword_clear = draw_input(
        frame,
        cols[0],
        &app.keyword,
        app.focus == Focus::Keyword,
        "Keyword, job title",
    );
    app.hits.location_clear = draw_input(
        frame,
        cols[1],
        &app.location,
        app.focus == Focus::Location,
        "Job location",
    );

    app.hits.search_button = Some(rect_tuple(cols[2]));
    let button = Paragraph::new(Line::from("Search").centered())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::ACCENT)),
        )
        .style(
            Style::default()
                .fg(Color::White)
                .bg(colors::ACCENT)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(button, cols[2]);
}

/// Render one autocomplete input; returns the clear-affordance rect when
/// the field has text
fn draw_input(
    frame: &mut Frame,
    area: Rect,
    field: &FieldState,
    focused: bool,
    placeholder: &str,
) -> Option<HitRect> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(colors::input_border_style(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (text, style) = if field.text.is_empty() {
        (
            format!("{} {}", colors::ICON_SEARCH, placeholder),
            colors::placeholder_style(),
        )
    } else {
        (
            format!("{} {}", colors::ICON_SEARCH, field.text),
            Style::default().fg(Color::White),
        )
    };
    frame.render_widget(Paragraph::new(text).style(style), inner);

    if !field.text.is_empty() && inner.width > 2 {
        let clear_area = Rect::new(inner.x + inner.width - 2, inner.y, 2, 1);
        frame.render_widget(
            Paragraph::new(colors::ICON_CLEAR).style(Style::default().fg(Color::DarkGray)),
            clear_area,
        );
        return Some(rect_tuple(clear_area));
    }
    None
}

fn draw_filter_row(frame: &mut Frame, app: &mut App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (i, category) in FilterCategory::ALL.iter().enumerate() {
        let open = app.popover.open() == Some(*category);
        let highlighted = app.focus == Focus::Filters && app.filter_cursor == *category;
        let arrow = if open {
            colors::ICON_ARROW_UP
        } else {
            colors::ICON_ARROW_DOWN
        };
        let count = app.selections.count(*category);
        let label = if count > 0 {
            format!("{} ({}) {}", category.label(), count, arrow)
        } else {
            format!("{} {}", category.label(), arrow)
        };

        let button = Paragraph::new(Line::from(label).centered())
            .block(Block::default().borders(Borders::ALL))
            .style(colors::filter_button_style(open, highlighted));
        frame.render_widget(button, cols[i]);
        app.hits.filter_buttons[i] = Some(rect_tuple(cols[i]));
    }
}

fn draw_popover(frame: &mut Frame, app: &mut App, area: Rect, filter_row: Rect) {
    let Some(category) = app.popover.open() else {
        return;
    };
    let options = category.options();

    let width = 28u16.min(area.width);
    let x = app.popover.anchor_x().min(area.width.saturating_sub(width));
    let y = filter_row.y + filter_row.height;
    let height = (options.len() as u16 + 2).min(area.height.saturating_sub(y + 1));
    if height < 3 {
        return;
    }
    let popup = Rect::new(x, y, width, height);

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::ACCENT))
        .title(format!(" {} ", category.label()))
        .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    for (i, option) in options.iter().enumerate() {
        if i as u16 >= inner.height {
            break;
        }
        let checkbox = if app.selections.is_selected(category, option) {
            colors::CHECKBOX_CHECKED
        } else {
            colors::CHECKBOX_EMPTY
        };
        let pad = (inner.width as usize)
            .saturating_sub(option.width() + checkbox.len() + 2);
        let text = format!(" {}{:pad$}{} ", option, "", checkbox, pad = pad);

        let highlighted = app.focus == Focus::Filters && app.option_cursor == i;
        let row_area = Rect::new(inner.x, inner.y + i as u16, inner.width, 1);
        frame.render_widget(
            Paragraph::new(text).style(colors::suggestion_style(highlighted)),
            row_area,
        );
    }

    app.hits.popover = Some(rect_tuple(popup));
    app.hits.popover_options = Some((
        inner.x,
        inner.y,
        inner.width,
        (options.len() as u16).min(inner.height),
    ));
}

fn draw_suggestion_lists(frame: &mut Frame, app: &mut App, area: Rect) {
    app.hits.keyword_suggestions = {
        let anchor = app.hits.keyword_input;
        draw_suggestion_list(frame, &app.keyword, anchor, area)
    };
    app.hits.location_suggestions = {
        let anchor = app.hits.location_input;
        draw_suggestion_list(frame, &app.location, anchor, area)
    };
}

/// Render one suggestion dropdown under its input; returns the inner row
/// area (one row per suggestion) for hit-testing
fn draw_suggestion_list(
    frame: &mut Frame,
    field: &FieldState,
    anchor: Option<HitRect>,
    area: Rect,
) -> Option<HitRect> {
    if !field.list_showing() {
        return None;
    }
    let (ax, ay, aw, ah) = anchor?;

    let y = ay + ah;
    // Keep clear of the status bar on the last row
    let max_height = area.height.saturating_sub(y + 1);
    let height = (field.suggestions.len() as u16 + 2).min(max_height);
    if height < 3 {
        return None;
    }
    let popup = Rect::new(ax, y, aw, height);

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    for (i, suggestion) in field.suggestions.iter().enumerate() {
        if i as u16 >= inner.height {
            break;
        }
        let row_area = Rect::new(inner.x, inner.y + i as u16, inner.width, 1);
        let highlighted = field.highlighted == Some(i);
        frame.render_widget(
            Paragraph::new(format!(" {} ", suggestion))
                .style(colors::suggestion_style(highlighted)),
            row_area,
        );
    }

    Some((
        inner.x,
        inner.y,
        inner.width,
        (field.suggestions.len() as u16).min(inner.height),
    ))
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let left_text = format!(" {}", app.status_message);
    let right_text =
        " Tab:Focus  Enter:Search  Space:Toggle  Ctrl+U:Clear  Esc:Close  Ctrl+Q:Quit ";

    let available_width = area.width as usize;
    let left_len = left_text.width();
    let right_len = right_text.width();

    let status_str = if left_len + right_len < available_width {
        let padding = available_width - left_len - right_len;
        format!("{}{:padding$}{}", left_text, "", right_text, padding = padding)
    } else {
        format!("{:width$}", left_text, width = available_width)
    };

    frame.render_widget(
        Paragraph::new(status_str).style(colors::status_bar_style()),
        area,
    );
}

/// Place the terminal cursor inside the focused input
fn position_cursor(frame: &mut Frame, app: &App) {
    let (field, rect) = match app.focus {
        Focus::Keyword => (&app.keyword, app.hits.keyword_input),
        Focus::Location => (&app.location, app.hits.location_input),
        Focus::Filters => return,
    };
    let Some((x, y, w, _)) = rect else {
        return;
    };

    let text_width = field.text[..field.cursor_pos].width() as u16;
    // Border + icon padding, clamped to the input's interior
    let cursor_x = (x + 1 + ICON_PAD + text_width).min(x + w.saturating_sub(2));
    frame.set_cursor_position(Position::new(cursor_x, y + 1));
}

fn rect_tuple(rect: Rect) -> HitRect {
    (rect.x, rect.y, rect.width, rect.height)
}
