use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub task_area: Rect,
    pub timer_area: Rect,
    pub keybindings_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Main area: Tasks (55%) | Timer (45%)
pub fn create_layout(area: Rect) -> MainLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Min(0),    // Main content
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Task pane
            Constraint::Percentage(45), // Timer pane
        ])
        .split(main_chunks[1]);

    MainLayout {
        task_area: horizontal[0],
        timer_area: horizontal[1],
        keybindings_area: main_chunks[0],
    }
}

/// Create centered modal area `height` rows tall
pub fn create_modal_area(area: Rect, height: u16) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(height),
            Constraint::Percentage(25),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

pub const FLOATING_WIDTH: u16 = 34;
pub const FLOATING_HEIGHT: u16 = 6;

/// Bottom-right corner box for the floating timer, clipped to `area`
pub fn create_floating_area(area: Rect) -> Rect {
    let width = FLOATING_WIDTH.min(area.width);
    let height = FLOATING_HEIGHT.min(area.height);
    Rect::new(
        area.x + area.width - width,
        area.y + area.height - height,
        width,
        height,
    )
}
