pub mod enums;
pub mod progress;
pub mod task;
pub mod views;

pub use enums::{AppLanguage, ThemeMode, TimerPhase, UiMode};
pub use progress::{elapsed_progress, format_clock, progress};
pub use task::{decode_tasks, Task};
pub use views::{completion_box, phase_glyph, pomodoro_badge};
