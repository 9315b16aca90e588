use crate::domain::Screen;
use crate::domain::pomodoro::{DEFAULT_MINUTES, MAX_MINUTES};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// User settings stored in settings.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Continue a paused breathing phase instead of restarting from the first phase
    pub resume_from_elapsed: bool,

    /// Loop tick in milliseconds (animation refresh and key polling)
    pub tick_ms: u64,

    /// Pomodoro length loaded on the Focus screen
    pub default_pomodoro_minutes: u32,

    /// Desktop notification when a Pomodoro finishes
    pub notifications: bool,

    /// Screen shown at launch
    pub start_screen: Screen,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            resume_from_elapsed: false,
            tick_ms: crate::ticker::DEFAULT_TICK_MS,
            default_pomodoro_minutes: DEFAULT_MINUTES,
            notifications: true,
            start_screen: Screen::Menu,
        }
    }
}

impl Settings {
    /// Reject values the timers cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.tick_ms == 0 {
            anyhow::bail!("tick_ms must be greater than zero");
        }
        if self.default_pomodoro_minutes == 0 || self.default_pomodoro_minutes > MAX_MINUTES {
            anyhow::bail!(
                "default_pomodoro_minutes must be between 1 and {}, got {}",
                MAX_MINUTES,
                self.default_pomodoro_minutes
            );
        }
        Ok(())
    }
}

/// Load settings from settings.json, falling back to defaults when absent
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();

    let Some(content) = super::files::read_file(path)? else {
        return Ok(Settings::default());
    };

    let settings: Settings = serde_json::from_str(&content)
        .with_context(|| format!("Invalid settings file: {}", path.display()))?;
    settings.validate()?;
    Ok(settings)
}

/// Save settings to settings.json
pub fn save_settings<P: AsRef<Path>>(path: P, settings: &Settings) -> Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    super::files::atomic_write(path, &json)?;
    Ok(())
}
