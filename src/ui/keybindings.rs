use crate::domain::AppLanguage;
use crate::localization::text;
use crate::ui::styles::Palette;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Hints in display order
const HINT_KEYS: [&str; 11] = [
    "keys.select",
    "keys.reorder",
    "keys.focus",
    "keys.reset",
    "keys.add",
    "keys.toggle_done",
    "keys.delete",
    "keys.float",
    "keys.theme",
    "keys.settings",
    "keys.quit",
];

/// Hints in the order they are kept when the bar is too narrow
const HINT_PRIORITY: [&str; 11] = [
    "keys.quit",
    "keys.focus",
    "keys.select",
    "keys.add",
    "keys.settings",
    "keys.toggle_done",
    "keys.delete",
    "keys.reset",
    "keys.float",
    "keys.theme",
    "keys.reorder",
];

const HINT_SEPARATOR: &str = "   ";

/// Hints that fit in `width` columns, highest priority first
fn visible_hints(language: AppLanguage, width: usize) -> Vec<&'static str> {
    let sep = Span::raw(HINT_SEPARATOR).width();
    // Leading space
    let mut used = 1;
    let mut kept = Vec::new();

    for key in HINT_PRIORITY {
        let cost = Span::raw(text(key, language)).width() + if kept.is_empty() { 0 } else { sep };
        if used + cost <= width {
            used += cost;
            kept.push(key);
        }
    }
    kept
}

fn hint_line(language: AppLanguage, width: u16) -> Line<'static> {
    let kept = visible_hints(language, width as usize);
    let mut line = vec![Span::raw(" ")];
    for (i, key) in HINT_KEYS.iter().filter(|key| kept.contains(*key)).enumerate() {
        if i > 0 {
            line.push(Span::raw(HINT_SEPARATOR));
        }
        line.push(Span::raw(text(key, language).into_owned()));
    }
    Line::from(line)
}

/// Render the keybindings hint bar, dropping low-priority hints to fit
pub fn render_keybindings(f: &mut Frame, language: AppLanguage, palette: &Palette, area: Rect) {
    let paragraph = Paragraph::new(hint_line(language, area.width)).style(palette.hint_style());
    f.render_widget(paragraph, area);
}
