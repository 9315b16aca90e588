/// Cross-platform notification support
/// Currently only implements macOS notifications

#[cfg(target_os = "macos")]
use std::process::Command;

/// Send a notification when a Pomodoro session runs out
pub fn notify_pomodoro_finished(minutes: u32) {
    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "⏰ {} minute session complete" with title "Calma - Pomodoro""#,
            minutes
        );

        if let Err(e) = Command::new("osascript").arg("-e").arg(&script).output() {
            tracing::warn!(error = %e, "failed to send notification");
        }
    }

    #[cfg(not(target_os = "macos"))]
    {
        // No-op on other platforms
        let _ = minutes;
    }
}
