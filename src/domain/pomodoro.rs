use super::error::ConfigError;
use std::time::Duration;
use tracing::{debug, info};

/// Preset lengths offered on the Focus screen, in minutes
pub const PRESETS: [u32; 3] = [25, 15, 5];

/// Default work session length
pub const DEFAULT_MINUTES: u32 = 25;

/// Longest session a preset may load (one day)
pub const MAX_MINUTES: u32 = 24 * 60;

const STEP: Duration = Duration::from_secs(1);

/// One-shot countdown that stops itself at zero.
///
/// Unlike the breathing engine it does not cycle: once it reaches zero it
/// stays there until `reset` or `set_preset`.
#[derive(Debug, Clone)]
pub struct PomodoroTimer {
    minutes: u32,
    total_secs: u32,
    remaining_secs: u32,
    running: bool,
    next_step_at: Duration,
    observed_at: Duration,
    /// Time left until the next decrement, kept across a pause
    carry: Duration,
}

impl PomodoroTimer {
    pub fn new(minutes: u32) -> Result<Self, ConfigError> {
        let total_secs = preset_secs(minutes)?;
        Ok(Self {
            minutes,
            total_secs,
            remaining_secs: total_secs,
            running: false,
            next_step_at: STEP,
            observed_at: Duration::ZERO,
            carry: STEP,
        })
    }

    /// Stop any running countdown and load a new length
    pub fn set_preset(&mut self, minutes: u32) -> Result<(), ConfigError> {
        let total_secs = preset_secs(minutes)?;
        self.running = false;
        self.minutes = minutes;
        self.total_secs = total_secs;
        self.remaining_secs = self.total_secs;
        self.carry = STEP;
        debug!(minutes, "pomodoro preset selected");
        Ok(())
    }

    /// Start if stopped (and not finished), pause if running
    pub fn toggle(&mut self, now: Duration) {
        if self.running {
            self.pause();
        } else {
            self.start(now);
        }
    }

    /// Begin or resume counting down. No-op when running or at zero.
    pub fn start(&mut self, now: Duration) {
        if self.running || self.remaining_secs == 0 {
            return;
        }
        self.running = true;
        self.observed_at = now;
        self.next_step_at = now + self.carry;
        debug!(remaining = self.remaining_secs, "pomodoro started");
    }

    pub fn pause(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.carry = self.next_step_at.saturating_sub(self.observed_at);
        debug!(remaining = self.remaining_secs, "pomodoro paused");
    }

    /// Stop and restore the full preset length
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining_secs = self.total_secs;
        self.carry = STEP;
    }

    /// Sample the clock. Returns true on the tick that reaches zero.
    pub fn tick(&mut self, now: Duration) -> bool {
        if !self.running {
            return false;
        }

        while self.next_step_at <= now && self.remaining_secs > 0 {
            self.remaining_secs -= 1;
            self.next_step_at += STEP;
        }
        self.observed_at = now;

        if self.remaining_secs == 0 {
            self.running = false;
            self.carry = STEP;
            info!(minutes = self.minutes, "pomodoro finished");
            return true;
        }
        false
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_finished(&self) -> bool {
        self.remaining_secs == 0
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn total_secs(&self) -> u32 {
        self.total_secs
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// Fraction of the session already spent, in [0, 1]
    pub fn progress(&self) -> f64 {
        1.0 - f64::from(self.remaining_secs) / f64::from(self.total_secs)
    }

    /// Remaining time as "mm:ss"
    pub fn clock_face(&self) -> String {
        format_clock(self.remaining_secs)
    }
}

impl Default for PomodoroTimer {
    fn default() -> Self {
        Self {
            minutes: DEFAULT_MINUTES,
            total_secs: DEFAULT_MINUTES * 60,
            remaining_secs: DEFAULT_MINUTES * 60,
            running: false,
            next_step_at: STEP,
            observed_at: Duration::ZERO,
            carry: STEP,
        }
    }
}

/// Session length in seconds for a preset in minutes
fn preset_secs(minutes: u32) -> Result<u32, ConfigError> {
    if minutes == 0 {
        return Err(ConfigError::ZeroPreset);
    }
    if minutes > MAX_MINUTES {
        return Err(ConfigError::PresetTooLong { minutes, max: MAX_MINUTES });
    }
    minutes
        .checked_mul(60)
        .ok_or(ConfigError::PresetTooLong { minutes, max: MAX_MINUTES })
}

/// Format whole seconds as zero-padded "mm:ss"
pub fn format_clock(total_secs: u32) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}
