use super::enums::TimerPhase;

/// Pomodoro count badge, e.g. "🍅×3" (empty when none yet)
pub fn pomodoro_badge(count: u32, use_emoji: bool) -> String {
    if count == 0 {
        return String::new();
    }
    if use_emoji {
        format!("🍅×{}", count)
    } else {
        format!("({})", count)
    }
}

/// Checkbox shown in front of a task title
pub fn completion_box(is_completed: bool) -> &'static str {
    if is_completed {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Glyph for the current phase
pub fn phase_glyph(phase: TimerPhase, use_emoji: bool) -> &'static str {
    if use_emoji {
        match phase {
            TimerPhase::Work => "🔥",
            TimerPhase::ShortBreak => "🍃",
            TimerPhase::LongBreak => "🌙",
        }
    } else {
        match phase {
            TimerPhase::Work => "*",
            TimerPhase::ShortBreak => "~",
            TimerPhase::LongBreak => "z",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pomodoro_badge() {
        assert_eq!(pomodoro_badge(0, true), "");
        assert_eq!(pomodoro_badge(3, true), "🍅×3");
        assert_eq!(pomodoro_badge(2, false), "(2)");
    }

    #[test]
    fn test_completion_box() {
        assert_eq!(completion_box(true), "[x]");
        assert_eq!(completion_box(false), "[ ]");
    }

    #[test]
    fn test_phase_glyph_ascii() {
        assert_eq!(phase_glyph(TimerPhase::Work, false), "*");
        assert_eq!(phase_glyph(TimerPhase::ShortBreak, false), "~");
        assert_eq!(phase_glyph(TimerPhase::LongBreak, false), "z");
    }
}
