use crate::app::AppState;
use crate::domain::{format_clock, phase_glyph};
use crate::localization::{text, text_with};
use crate::ui::styles::Palette;
use chrono::{DateTime, Local};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

/// Wall-clock time the current phase ends, as HH:MM
pub fn ends_at(now: DateTime<Local>, remaining_seconds: u32) -> String {
    (now + chrono::Duration::seconds(remaining_seconds as i64))
        .format("%H:%M")
        .to_string()
}

/// Render the timer pane for the display task
pub fn render_timer_pane(f: &mut Frame, app: &AppState, palette: &Palette, area: Rect) {
    let language = app.store.language();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style())
        .style(palette.default_style())
        .title(Span::styled(
            format!(" {} ", text("app.title", language)),
            palette.title_style(),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Task title and count
            Constraint::Length(4), // Clock and phase
            Constraint::Length(1), // Gauge
            Constraint::Length(2), // Status
            Constraint::Min(0),
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(task_lines(app, palette))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(clock_lines(app, palette)).alignment(Alignment::Center),
        chunks[1],
    );

    let phase = app.store.phase();
    let ratio = app.store.elapsed_progress();
    let gauge = Gauge::default()
        .gauge_style(palette.gauge_style(phase))
        .ratio(ratio)
        .label(format!("{:.0}%", ratio * 100.0));
    f.render_widget(gauge, chunks[2]);

    let status = if app.store.is_timer_running() {
        text_with("timer.ends_at", language, ends_at(Local::now(), app.store.remaining_seconds()))
    } else {
        text("timer.idle", language).into_owned()
    };
    f.render_widget(
        Paragraph::new(vec![Line::raw(""), Line::from(Span::styled(status, palette.hint_style()))])
            .alignment(Alignment::Center),
        chunks[3],
    );
}

/// Display task title and its pomodoro count, or a prompt
fn task_lines(app: &AppState, palette: &Palette) -> Vec<Line<'static>> {
    let language = app.store.language();
    match app.store.timer_display_task() {
        Some(task) => vec![
            Line::raw(""),
            Line::from(Span::styled(task.title.clone(), palette.title_style())),
            Line::from(Span::styled(
                text_with("task.completed.count", language, task.completed_pomodoros),
                palette.hint_style(),
            )),
        ],
        None => vec![
            Line::raw(""),
            Line::from(Span::styled(
                text("task.select.prompt", language).into_owned(),
                palette.hint_style(),
            )),
        ],
    }
}

fn clock_lines(app: &AppState, palette: &Palette) -> Vec<Line<'static>> {
    let phase = app.store.phase();
    let language = app.store.language();
    vec![
        Line::raw(""),
        Line::from(Span::styled(
            format_clock(app.store.remaining_seconds()),
            palette.clock_style(phase),
        )),
        Line::raw(""),
        Line::from(vec![
            Span::raw(format!("{} ", phase_glyph(phase, app.use_emoji))),
            Span::styled(text(phase.text_key(), language).into_owned(), palette.clock_style(phase)),
        ]),
    ]
}
