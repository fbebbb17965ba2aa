use crate::app::{AppState, SettingsField};
use crate::localization::{text, text_with};
use crate::ui::{layout::create_modal_area, styles::Palette};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn field_label_key(field: SettingsField) -> &'static str {
    match field {
        SettingsField::Focus => "settings.duration.focus",
        SettingsField::ShortBreak => "settings.duration.short_break",
        SettingsField::LongBreak => "settings.duration.long_break",
        SettingsField::Theme => "settings.theme",
        SettingsField::Language => "settings.language",
    }
}

/// Value column of one settings row
fn field_value(app: &AppState, field: SettingsField) -> String {
    let language = app.store.language();
    match field {
        SettingsField::Theme => text(app.store.theme_mode().text_key(), language).into_owned(),
        SettingsField::Language => language.display_name().to_string(),
        duration => {
            let minutes = app.settings_minutes(duration).unwrap_or_default();
            text_with("settings.duration.minutes", language, minutes)
        }
    }
}

/// Render the settings modal
pub fn render_settings(f: &mut Frame, app: &AppState, palette: &Palette, area: Rect) {
    let language = app.store.language();
    let modal_area = create_modal_area(area, 13);
    f.render_widget(Clear, modal_area);

    let mut lines = vec![
        Line::from(Span::styled(
            text("settings.subtitle", language).into_owned(),
            palette.hint_style(),
        )),
        Line::raw(""),
    ];

    for field in SettingsField::ALL {
        let focused = field == app.settings_field;
        let marker = if focused { "▶ " } else { "  " };
        let label = format!("{}{:<20}", marker, text(field_label_key(field), language));
        let value = format!("◀ {} ▶", field_value(app, field));
        let style = if focused {
            palette.selected_style()
        } else {
            palette.modal_bg_style()
        };
        lines.push(Line::from(vec![Span::styled(label, style), Span::styled(value, style)]));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        text("settings.hint", language).into_owned(),
        palette.hint_style(),
    )));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    format!(" {} ", text("settings.title", language)),
                    palette.modal_title_style(),
                ))
                .style(palette.modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
