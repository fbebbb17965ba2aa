use crate::app::AppState;
use crate::domain::{format_clock, phase_glyph};
use crate::localization::text;
use crate::ui::{layout::create_floating_area, styles::Palette};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
    Frame,
};

/// Render the compact timer in the corner, above everything but modals
pub fn render_floating_timer(f: &mut Frame, app: &AppState, palette: &Palette, area: Rect) {
    let float_area = create_floating_area(area);
    f.render_widget(Clear, float_area);

    let phase = app.store.phase();
    let language = app.store.language();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.clock_style(phase))
        .style(palette.modal_bg_style())
        .title(Span::styled(
            format!(" {} ", text("common.float", language)),
            palette.modal_title_style(),
        ));
    let inner = block.inner(float_area);
    f.render_widget(block, float_area);
    if inner.height == 0 {
        return;
    }

    let title = app
        .store
        .timer_display_task()
        .map(|t| t.title.clone())
        .unwrap_or_else(|| text("task.select.prompt", language).into_owned());
    let lines = vec![
        Line::from(vec![
            Span::raw(format!("{} ", phase_glyph(phase, app.use_emoji))),
            Span::styled(format_clock(app.store.remaining_seconds()), palette.clock_style(phase)),
        ]),
        Line::raw(title),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);

    if inner.height >= 3 {
        let gauge_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
        let gauge = Gauge::default()
            .gauge_style(palette.gauge_style(phase))
            .ratio(app.store.elapsed_progress())
            .label("");
        f.render_widget(gauge, gauge_area);
    }
}
