use crate::app::AppState;
use crate::localization::text;
use crate::ui::{layout::create_modal_area, styles::Palette};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the input form for adding tasks
pub fn render_input_form(f: &mut Frame, app: &AppState, palette: &Palette, area: Rect) {
    let Some(form) = &app.input_form else {
        return;
    };
    let language = app.store.language();
    let modal_area = create_modal_area(area, 7);

    // Clear the area behind the form
    f.render_widget(Clear, modal_area);

    let field = if form.title.is_empty() {
        Span::styled(text("task.add.placeholder", language).into_owned(), palette.hint_style())
    } else {
        Span::styled(form.title.clone(), palette.modal_title_style())
    };

    let lines = vec![
        Line::raw(""),
        Line::from(vec![
            Span::raw("> "),
            field,
            Span::styled("█", palette.modal_title_style()), // Cursor
        ]),
        Line::raw(""),
        Line::from(Span::styled(
            text("task.add.hint", language).into_owned(),
            palette.hint_style(),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    format!(" {} ", text("task.add.title", language)),
                    palette.modal_title_style(),
                ))
                .style(palette.modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
