/// Desktop notifications for finished phases
/// Currently only implements macOS notifications

use crate::domain::AppLanguage;
use crate::localization::{text, text_with};

#[cfg(target_os = "macos")]
use std::process::Command;

/// Send a notification when a focus session on `task_title` completes
pub fn notify_focus_complete(task_title: &str, language: AppLanguage) {
    let title = text("notify.focus_done.title", language);
    let body = text_with("notify.focus_done.body", language, task_title);
    send(&title, &body);
}

/// Send a notification when a break ends
pub fn notify_break_over(language: AppLanguage) {
    let title = text("notify.break_done.title", language);
    let body = text("notify.break_done.body", language);
    send(&title, &body);
}

/// AppleScript for one notification banner
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
fn notification_script(title: &str, body: &str) -> String {
    format!(
        r#"display notification "{}" with title "{}""#,
        escape(body),
        escape(title)
    )
}

#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

fn send(title: &str, body: &str) {
    #[cfg(target_os = "macos")]
    {
        let script = notification_script(title, body);
        if let Err(e) = Command::new("osascript").arg("-e").arg(&script).output() {
            tracing::warn!(error = %e, "failed to send notification");
        }
    }

    #[cfg(not(target_os = "macos"))]
    {
        // No-op on other platforms
        tracing::debug!(title, body, "notification skipped on this platform");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_script_escapes_quotes() {
        let script = notification_script("Done", r#"Time for a break after "Write docs""#);
        assert_eq!(
            script,
            r#"display notification "Time for a break after \"Write docs\"" with title "Done""#
        );
    }
}
