use ratatui::style::{Color, Modifier, Style};

// Stable glyphs standing in for the widget's icon assets
pub const ICON_SEARCH: &str = "\u{1F50D}"; // magnifying glass
pub const ICON_CLEAR: &str = "\u{2716}"; // heavy multiplication x
pub const ICON_ARROW_UP: &str = "\u{25B2}";
pub const ICON_ARROW_DOWN: &str = "\u{25BC}";
pub const CHECKBOX_CHECKED: &str = "[x]";
pub const CHECKBOX_EMPTY: &str = "[ ]";

/// The search button / open-filter accent
pub const ACCENT: Color = Color::Rgb(128, 80, 224);

pub fn input_border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub fn filter_button_style(open: bool, highlighted: bool) -> Style {
    let base = if open {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    if highlighted {
        base.bg(Color::Rgb(40, 40, 50))
    } else {
        base
    }
}

pub fn suggestion_style(highlighted: bool) -> Style {
    if highlighted {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

pub fn placeholder_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

pub fn status_bar_style() -> Style {
    Style::default().fg(Color::White).bg(Color::Rgb(0, 95, 135))
}
