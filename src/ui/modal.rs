use crate::app::AppState;
use crate::localization::{text, text_with};
use crate::ui::{layout::create_modal_area, styles::Palette};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the delete confirmation modal
pub fn render_delete_modal(f: &mut Frame, app: &AppState, palette: &Palette, area: Rect) {
    let Some(task) = app.pending_delete_task() else {
        return;
    };
    let language = app.store.language();
    let modal_area = create_modal_area(area, 8);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let lines = vec![
        Line::raw(""),
        Line::raw(text_with("alert.delete_task.message", language, &task.title)),
        Line::raw(""),
        Line::from(vec![
            Span::styled("[y]", palette.modal_title_style()),
            Span::raw(format!(" {}   ", text("alert.delete_task.confirm", language))),
            Span::styled("[n]", palette.modal_title_style()),
            Span::raw(format!(" {}", text("alert.delete_task.cancel", language))),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    format!(" {} ", text("alert.delete_task.title", language)),
                    palette.modal_title_style(),
                ))
                .style(palette.modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
