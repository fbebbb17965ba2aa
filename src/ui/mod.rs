pub mod floating;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod modal;
pub mod settings;
pub mod styles;
pub mod task_pane;
pub mod timer_pane;

use crate::app::AppState;
use crate::domain::UiMode;
use floating::render_floating_timer;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use modal::render_delete_modal;
use ratatui::{widgets::Block, Frame};
use settings::render_settings;
use styles::Palette;
use task_pane::render_task_pane;
use timer_pane::render_timer_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let palette = Palette::for_mode(app.store.theme_mode());
    let layout = create_layout(size);

    f.render_widget(Block::default().style(palette.default_style()), size);
    render_keybindings(f, app.store.language(), &palette, layout.keybindings_area);
    render_task_pane(f, app, &palette, layout.task_area);
    render_timer_pane(f, app, &palette, layout.timer_area);

    if app.store.showing_floating_window() {
        render_floating_timer(f, app, &palette, size);
    }

    match app.ui_mode {
        UiMode::AddingTask => render_input_form(f, app, &palette, size),
        UiMode::ConfirmDelete => render_delete_modal(f, app, &palette, size),
        UiMode::Settings => render_settings(f, app, &palette, size),
        UiMode::Normal => {}
    }
}
