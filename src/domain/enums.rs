/// Phase of the Pomodoro cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    Work,
    ShortBreak,
    LongBreak,
}

impl TimerPhase {
    /// Localization key for the phase label shown under the countdown
    pub fn text_key(&self) -> &'static str {
        match self {
            TimerPhase::Work => "timer.phase.work",
            TimerPhase::ShortBreak => "timer.phase.short_break",
            TimerPhase::LongBreak => "timer.phase.long_break",
        }
    }

    pub fn is_break(&self) -> bool {
        matches!(self, TimerPhase::ShortBreak | TimerPhase::LongBreak)
    }
}

/// Visual theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    GlassVivid,
    BusinessMotion,
}

impl ThemeMode {
    /// Parse from the persisted raw tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "glassVivid" => Some(Self::GlassVivid),
            "businessMotion" => Some(Self::BusinessMotion),
            _ => None,
        }
    }

    /// Raw tag used in the defaults file
    pub fn to_tag(&self) -> &'static str {
        match self {
            Self::GlassVivid => "glassVivid",
            Self::BusinessMotion => "businessMotion",
        }
    }

    pub fn text_key(&self) -> &'static str {
        match self {
            Self::GlassVivid => "theme.mode.glass_vivid",
            Self::BusinessMotion => "theme.mode.business_motion",
        }
    }

    /// The other theme (quick switch)
    pub fn toggled(&self) -> Self {
        match self {
            Self::GlassVivid => Self::BusinessMotion,
            Self::BusinessMotion => Self::GlassVivid,
        }
    }
}

/// UI language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppLanguage {
    Chinese,
    English,
}

impl AppLanguage {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "zh-Hans" => Some(Self::Chinese),
            "en" => Some(Self::English),
            _ => None,
        }
    }

    pub fn to_tag(&self) -> &'static str {
        match self {
            Self::Chinese => "zh-Hans",
            Self::English => "en",
        }
    }

    /// Native name, shown in the settings modal regardless of current language
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Chinese => "中文",
            Self::English => "English",
        }
    }

    /// Language implied by a locale identifier such as "zh_CN.UTF-8" or "en_US"
    pub fn fallback(locale: &str) -> Self {
        if locale.to_lowercase().starts_with("zh") {
            Self::Chinese
        } else {
            Self::English
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Chinese => Self::English,
            Self::English => Self::Chinese,
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
    ConfirmDelete,
    Settings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_mode_tags() {
        assert_eq!(ThemeMode::from_tag("glassVivid"), Some(ThemeMode::GlassVivid));
        assert_eq!(ThemeMode::from_tag("businessMotion"), Some(ThemeMode::BusinessMotion));
        assert_eq!(ThemeMode::from_tag("invalid"), None);
        assert_eq!(ThemeMode::BusinessMotion.to_tag(), "businessMotion");
    }

    #[test]
    fn test_theme_mode_default_and_toggle() {
        assert_eq!(ThemeMode::default(), ThemeMode::GlassVivid);
        assert_eq!(ThemeMode::GlassVivid.toggled(), ThemeMode::BusinessMotion);
    }

    #[test]
    fn test_language_tags() {
        assert_eq!(AppLanguage::from_tag("zh-Hans"), Some(AppLanguage::Chinese));
        assert_eq!(AppLanguage::from_tag("en"), Some(AppLanguage::English));
        assert_eq!(AppLanguage::from_tag("fr"), None);
        assert_eq!(AppLanguage::Chinese.to_tag(), "zh-Hans");
    }

    #[test]
    fn test_language_fallback_from_locale() {
        assert_eq!(AppLanguage::fallback("zh-Hans-CN"), AppLanguage::Chinese);
        assert_eq!(AppLanguage::fallback("ZH_tw.UTF-8"), AppLanguage::Chinese);
        assert_eq!(AppLanguage::fallback("en_US"), AppLanguage::English);
        assert_eq!(AppLanguage::fallback(""), AppLanguage::English);
    }

    #[test]
    fn test_phase_is_break() {
        assert!(!TimerPhase::Work.is_break());
        assert!(TimerPhase::ShortBreak.is_break());
        assert!(TimerPhase::LongBreak.is_break());
    }
}
