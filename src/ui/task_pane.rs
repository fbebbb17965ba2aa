use crate::app::AppState;
use crate::domain::{completion_box, pomodoro_badge, Task};
use crate::localization::text;
use crate::ui::styles::Palette;
use chrono::Local;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Render the task list pane
pub fn render_task_pane(f: &mut Frame, app: &AppState, palette: &Palette, area: Rect) {
    let language = app.store.language();
    let date = Local::now().format("%a %b %d");
    let title = format!(" {} ({}) ", text("task.section_title", language), date);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style())
        .style(palette.default_style())
        .title(Span::styled(title, palette.title_style()));

    let tasks = app.store.tasks();
    if tasks.is_empty() {
        let lines = vec![
            Line::raw(""),
            Line::from(Span::styled(
                format!("  {}", text("task.empty.title", language)),
                palette.title_style(),
            )),
            Line::from(Span::styled(
                format!("  {}", text("task.empty.subtitle", language)),
                palette.hint_style(),
            )),
        ];
        let empty = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
        f.render_widget(empty, area);
        return;
    }

    let selected = app.selected_index();
    let items: Vec<ListItem> = tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let line = create_task_line(task, app.use_emoji, palette);
            let style = if Some(idx) == selected {
                palette.selected_style()
            } else {
                palette.default_style()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

/// Format: [x] Write proposal  🍅×3
fn create_task_line(task: &Task, use_emoji: bool, palette: &Palette) -> Line<'static> {
    let mut spans = vec![Span::raw(format!(" {} ", completion_box(task.is_completed)))];

    if task.is_completed {
        spans.push(Span::styled(task.title.clone(), palette.done_style()));
    } else {
        spans.push(Span::raw(task.title.clone()));
    }

    let badge = pomodoro_badge(task.completed_pomodoros, use_emoji);
    if !badge.is_empty() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(badge, palette.badge_style()));
    }

    Line::from(spans)
}
