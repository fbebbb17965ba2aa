use crate::domain::{ThemeMode, TimerPhase};
use ratatui::style::{Color, Modifier, Style};

const TOMATO_PRIMARY: Color = Color::Rgb(224, 59, 51);
const TOMATO_SECONDARY: Color = Color::Rgb(247, 115, 79);
const ACCENT_MINT: Color = Color::Rgb(54, 176, 158);
const SKY_BLUE: Color = Color::Rgb(51, 133, 242);

const BUSINESS_PRIMARY: Color = Color::Rgb(51, 64, 79);
const BUSINESS_SECONDARY: Color = Color::Rgb(84, 102, 122);
const BUSINESS_ACCENT: Color = Color::Rgb(82, 138, 148);
const BUSINESS_NAVY: Color = Color::Rgb(61, 94, 145);
const BUSINESS_TEXT: Color = Color::Rgb(41, 51, 64);
const BUSINESS_MUTED: Color = Color::Rgb(99, 112, 128);
const BUSINESS_PAPER: Color = Color::Rgb(242, 245, 247);

/// Colors for one theme mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: Color,
    pub muted: Color,
    /// `Color::Reset` keeps the terminal's own background
    pub background: Color,
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub long_break: Color,
}

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::GlassVivid => Self {
                text: Color::White,
                muted: Color::Gray,
                background: Color::Reset,
                primary: TOMATO_PRIMARY,
                secondary: TOMATO_SECONDARY,
                accent: ACCENT_MINT,
                long_break: SKY_BLUE,
            },
            ThemeMode::BusinessMotion => Self {
                text: BUSINESS_TEXT,
                muted: BUSINESS_MUTED,
                background: BUSINESS_PAPER,
                primary: BUSINESS_PRIMARY,
                secondary: BUSINESS_SECONDARY,
                accent: BUSINESS_ACCENT,
                long_break: BUSINESS_NAVY,
            },
        }
    }

    pub fn phase_color(&self, phase: TimerPhase) -> Color {
        match phase {
            TimerPhase::Work => self.primary,
            TimerPhase::ShortBreak => self.accent,
            TimerPhase::LongBreak => self.long_break,
        }
    }

    /// Default text style
    pub fn default_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    /// Selected row highlight style
    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(self.secondary)
            .add_modifier(Modifier::BOLD)
    }

    /// Completed task style
    pub fn done_style(&self) -> Style {
        Style::default()
            .fg(self.muted)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    /// Title style for panes
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Keybinding hint style
    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Pomodoro badge next to a task
    pub fn badge_style(&self) -> Style {
        Style::default().fg(self.secondary)
    }

    /// Big countdown digits
    pub fn clock_style(&self, phase: TimerPhase) -> Style {
        Style::default()
            .fg(self.phase_color(phase))
            .add_modifier(Modifier::BOLD)
    }

    pub fn gauge_style(&self, phase: TimerPhase) -> Style {
        Style::default().fg(self.phase_color(phase)).bg(self.background)
    }

    /// Modal background style
    pub fn modal_bg_style(&self) -> Style {
        match self.background {
            Color::Reset => Style::default().bg(Color::DarkGray).fg(Color::White),
            paper => Style::default().bg(paper).fg(self.text),
        }
    }

    pub fn modal_title_style(&self) -> Style {
        Style::default()
            .fg(self.secondary)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glass_vivid_phase_colors() {
        let palette = Palette::for_mode(ThemeMode::GlassVivid);
        assert_eq!(palette.phase_color(TimerPhase::Work), Color::Rgb(224, 59, 51));
        assert_eq!(palette.phase_color(TimerPhase::ShortBreak), Color::Rgb(54, 176, 158));
        assert_eq!(palette.phase_color(TimerPhase::LongBreak), Color::Rgb(51, 133, 242));
    }

    #[test]
    fn test_business_motion_is_distinct() {
        let glass = Palette::for_mode(ThemeMode::GlassVivid);
        let business = Palette::for_mode(ThemeMode::BusinessMotion);
        assert_ne!(glass, business);
        assert_eq!(business.phase_color(TimerPhase::LongBreak), Color::Rgb(61, 94, 145));
        assert_eq!(business.modal_bg_style().bg, Some(BUSINESS_PAPER));
    }
}
