//! English and Chinese UI strings.
//!
//! Lookup order: Chinese table, then English table, then the raw key.
//! Templates take at most one `{}` substitution.

use crate::domain::AppLanguage;
use std::borrow::Cow;

type Table = &'static [(&'static str, &'static str)];

const ENGLISH: Table = &[
    ("app.title", "Tomato"),

    ("settings.title", "Settings"),
    ("settings.subtitle", "Tune your focus rhythm"),
    ("settings.theme", "Theme"),
    ("settings.language", "Language"),
    ("settings.duration.focus", "Focus Duration"),
    ("settings.duration.short_break", "Short Break"),
    ("settings.duration.long_break", "Long Break"),
    ("settings.duration.current", "Current: {} min"),
    ("settings.duration.minutes", "{} min"),
    ("settings.done", "Done"),
    ("settings.hint", "↑/↓ field   ←/→ change   Enter/Esc done"),

    ("common.theme", "Theme"),
    ("common.settings", "Settings"),
    ("common.stop", "Stop"),
    ("common.reset", "Reset"),
    ("common.focus", "Focus"),
    ("common.float", "Float"),
    ("common.quit", "Quit"),

    ("task.section_title", "Tasks"),
    ("task.empty.title", "No tasks yet"),
    ("task.empty.subtitle", "Add your first task and start a focus session."),
    ("task.add.title", "Add Task"),
    ("task.add.placeholder", "Add new task..."),
    ("task.add.hint", "Enter to add   Esc to cancel"),
    ("task.completed.count", "{} pomodoros completed"),
    ("task.select.prompt", "Select a task"),
    ("task.mark.done", "Mark as Completed"),
    ("task.mark.undone", "Mark as Incomplete"),
    ("task.delete", "Delete Task"),

    ("help.quick_theme", "Quick theme switch"),
    ("help.settings", "Settings"),
    ("help.back_to_main", "Back to main window"),

    ("alert.delete_task.title", "Delete Task?"),
    ("alert.delete_task.confirm", "Delete"),
    ("alert.delete_task.cancel", "Cancel"),
    ("alert.delete_task.message", "Are you sure you want to delete \"{}\"? This action cannot be undone."),

    ("timer.phase.work", "Focusing..."),
    ("timer.phase.short_break", "Short Break"),
    ("timer.phase.long_break", "Long Break"),
    ("timer.ends_at", "ends at {}"),
    ("timer.idle", "Ready"),

    ("menu.timer", "Timer"),
    ("menu.start_focus", "Start Focus"),
    ("menu.settings", "Settings..."),

    ("keys.select", "↑/↓ select"),
    ("keys.reorder", "Shift+↑/↓ reorder"),
    ("keys.add", "a add"),
    ("keys.toggle_done", "x done"),
    ("keys.delete", "d delete"),
    ("keys.focus", "Enter focus/stop"),
    ("keys.reset", "r reset"),
    ("keys.float", "f float"),
    ("keys.theme", "t theme"),
    ("keys.settings", "s settings"),
    ("keys.quit", "q quit"),

    ("notify.focus_done.title", "Focus session complete"),
    ("notify.focus_done.body", "Time for a break after \"{}\""),
    ("notify.break_done.title", "Break is over"),
    ("notify.break_done.body", "Ready for the next focus session"),

    ("theme.mode.glass_vivid", "Glass Vivid"),
    ("theme.mode.business_motion", "Business Motion"),
];

const CHINESE: Table = &[
    ("app.title", "番茄钟"),

    ("settings.title", "设置"),
    ("settings.subtitle", "调整你的专注节奏"),
    ("settings.theme", "主题"),
    ("settings.language", "语言"),
    ("settings.duration.focus", "专注时长"),
    ("settings.duration.short_break", "短休息"),
    ("settings.duration.long_break", "长休息"),
    ("settings.duration.current", "当前：{} 分钟"),
    ("settings.duration.minutes", "{} 分钟"),
    ("settings.done", "完成"),
    ("settings.hint", "↑/↓ 选择   ←/→ 调整   Enter/Esc 完成"),

    ("common.theme", "主题"),
    ("common.settings", "设置"),
    ("common.stop", "停止"),
    ("common.reset", "重置"),
    ("common.focus", "专注"),
    ("common.float", "悬浮"),
    ("common.quit", "退出"),

    ("task.section_title", "任务"),
    ("task.empty.title", "暂无任务"),
    ("task.empty.subtitle", "添加你的第一个任务并开始一次专注。"),
    ("task.add.title", "添加任务"),
    ("task.add.placeholder", "添加新任务..."),
    ("task.add.hint", "Enter 添加   Esc 取消"),
    ("task.completed.count", "已完成 {} 个番茄钟"),
    ("task.select.prompt", "请选择一个任务"),
    ("task.mark.done", "标记完成"),
    ("task.mark.undone", "标记为未完成"),
    ("task.delete", "删除任务"),

    ("help.quick_theme", "快速切换主题"),
    ("help.settings", "设置"),
    ("help.back_to_main", "返回主窗口"),

    ("alert.delete_task.title", "删除任务？"),
    ("alert.delete_task.confirm", "删除"),
    ("alert.delete_task.cancel", "取消"),
    ("alert.delete_task.message", "确认删除任务“{}”吗？此操作无法撤销。"),

    ("timer.phase.work", "专注中..."),
    ("timer.phase.short_break", "短休息"),
    ("timer.phase.long_break", "长休息"),
    ("timer.ends_at", "{} 结束"),
    ("timer.idle", "就绪"),

    ("menu.timer", "计时器"),
    ("menu.start_focus", "开始专注"),
    ("menu.settings", "设置..."),

    ("keys.select", "↑/↓ 选择"),
    ("keys.reorder", "Shift+↑/↓ 排序"),
    ("keys.add", "a 添加"),
    ("keys.toggle_done", "x 完成"),
    ("keys.delete", "d 删除"),
    ("keys.focus", "Enter 专注/停止"),
    ("keys.reset", "r 重置"),
    ("keys.float", "f 悬浮"),
    ("keys.theme", "t 主题"),
    ("keys.settings", "s 设置"),
    ("keys.quit", "q 退出"),

    ("notify.focus_done.title", "专注完成"),
    ("notify.focus_done.body", "“{}” 告一段落，休息一下"),
    ("notify.break_done.title", "休息结束"),
    ("notify.break_done.body", "准备开始下一次专注"),

    ("theme.mode.glass_vivid", "玻璃炫彩"),
    ("theme.mode.business_motion", "商务律动"),
];

fn lookup(table: Table, key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

fn resolve(key: &str, language: AppLanguage, english: Table, chinese: Table) -> Cow<'static, str> {
    let found = match language {
        AppLanguage::Chinese => lookup(chinese, key).or_else(|| lookup(english, key)),
        AppLanguage::English => lookup(english, key),
    };
    match found {
        Some(text) => Cow::Borrowed(text),
        None => Cow::Owned(key.to_string()),
    }
}

/// Localized string for `key`
pub fn text(key: &str, language: AppLanguage) -> Cow<'static, str> {
    resolve(key, language, ENGLISH, CHINESE)
}

/// Localized string for `key` with its `{}` placeholder filled by `arg`
pub fn text_with(key: &str, language: AppLanguage, arg: impl std::fmt::Display) -> String {
    text(key, language).replacen("{}", &arg.to_string(), 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_settings_title_localizes() {
        assert_eq!(text("settings.title", AppLanguage::English), "Settings");
        assert_eq!(text("settings.title", AppLanguage::Chinese), "设置");
    }

    #[test]
    fn test_duration_template_substitution() {
        assert_eq!(
            text_with("settings.duration.current", AppLanguage::English, 25),
            "Current: 25 min"
        );
        assert_eq!(
            text_with("settings.duration.current", AppLanguage::Chinese, 25),
            "当前：25 分钟"
        );
    }

    #[test]
    fn test_delete_message_takes_title() {
        assert_eq!(
            text_with("alert.delete_task.message", AppLanguage::English, "Write docs"),
            "Are you sure you want to delete \"Write docs\"? This action cannot be undone."
        );
    }

    #[test]
    fn test_unknown_key_echoes_back() {
        assert_eq!(text("no.such.key", AppLanguage::English), "no.such.key");
        assert_eq!(text("no.such.key", AppLanguage::Chinese), "no.such.key");
        assert_eq!(text_with("no.such.key", AppLanguage::English, 3), "no.such.key");
    }

    #[test]
    fn test_chinese_falls_back_to_english_then_key() {
        const EN: Table = &[("only.english", "English only"), ("both", "Both")];
        const ZH: Table = &[("both", "都有"), ("only.chinese", "仅中文")];

        assert_eq!(resolve("both", AppLanguage::Chinese, EN, ZH), "都有");
        assert_eq!(resolve("only.english", AppLanguage::Chinese, EN, ZH), "English only");
        assert_eq!(resolve("missing", AppLanguage::Chinese, EN, ZH), "missing");
        // English never consults the Chinese table
        assert_eq!(resolve("only.chinese", AppLanguage::English, EN, ZH), "only.chinese");
    }

    #[test]
    fn test_tables_have_no_duplicate_keys() {
        for table in [ENGLISH, CHINESE] {
            let mut seen = HashSet::new();
            for (key, _) in table {
                assert!(seen.insert(*key), "duplicate key {}", key);
            }
        }
    }

    #[test]
    fn test_all_english_keys_translated() {
        for (key, _) in ENGLISH {
            assert!(lookup(CHINESE, key).is_some(), "missing Chinese entry for {}", key);
        }
    }
}
