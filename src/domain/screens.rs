use super::engine::PhaseTimerEngine;
use super::error::ConfigError;
use super::patterns::{self, BreathingPattern};
use super::pomodoro::PomodoroTimer;
use std::time::Duration;

/// Decorative focus playlists (no audio engine behind them)
pub const PLAYLISTS: [(&str, &str); 3] = [
    ("Study Beats", "Lo-Fi Hip Hop"),
    ("Deep Focus", "Ambient Electronic"),
    ("Brain Food", "Binaural Beats"),
];

/// Symptoms offered by the allergy log
pub const SYMPTOMS: [&str; 5] = ["Sneezing", "Itchy Eyes", "Runny Nose", "Congestion", "Cough"];

/// A screen that owns one breathing engine
#[derive(Debug, Clone)]
pub struct BreathingScreen {
    pub name: &'static str,
    pub summary: &'static str,
    pub engine: PhaseTimerEngine,
}

impl BreathingScreen {
    pub fn new(pattern: BreathingPattern, resume_from_elapsed: bool) -> Result<Self, ConfigError> {
        Ok(Self {
            name: pattern.name,
            summary: pattern.summary,
            engine: PhaseTimerEngine::new(pattern.table, pattern.shape, resume_from_elapsed)?,
        })
    }
}

/// Stress reduction: triangle breathing and a calm-music toggle
#[derive(Debug, Clone)]
pub struct StressScreen {
    pub breathing: BreathingScreen,
    pub music_playing: bool,
}

impl StressScreen {
    pub fn new(resume_from_elapsed: bool) -> Result<Self, ConfigError> {
        Ok(Self {
            breathing: BreathingScreen::new(patterns::triangle_breathing()?, resume_from_elapsed)?,
            music_playing: false,
        })
    }

    pub fn tick(&mut self, now: Duration) {
        self.breathing.engine.tick(now);
    }

    /// Drop all screen-local state, as when the screen is left
    pub fn unmount(&mut self) {
        self.breathing.engine.reset();
        self.music_playing = false;
    }
}

/// Sleep wind-down: 4-7-8 breathing on a pulsing circle
#[derive(Debug, Clone)]
pub struct SleepScreen {
    pub breathing: BreathingScreen,
}

impl SleepScreen {
    pub fn new(resume_from_elapsed: bool) -> Result<Self, ConfigError> {
        Ok(Self {
            breathing: BreathingScreen::new(patterns::four_seven_eight()?, resume_from_elapsed)?,
        })
    }

    pub fn tick(&mut self, now: Duration) {
        self.breathing.engine.tick(now);
    }

    pub fn unmount(&mut self) {
        self.breathing.engine.reset();
    }
}

/// Focus: box breathing, a Pomodoro clock and playlist toggles
#[derive(Debug, Clone)]
pub struct FocusScreen {
    pub breathing: BreathingScreen,
    pub pomodoro: PomodoroTimer,
    pub default_minutes: u32,
    /// Index into [`PLAYLISTS`] of the playlist shown as playing
    pub playing: Option<usize>,
}

impl FocusScreen {
    pub fn new(resume_from_elapsed: bool, default_minutes: u32) -> Result<Self, ConfigError> {
        Ok(Self {
            breathing: BreathingScreen::new(patterns::box_breathing()?, resume_from_elapsed)?,
            pomodoro: PomodoroTimer::new(default_minutes)?,
            default_minutes,
            playing: None,
        })
    }

    /// Advance both timers. Returns true when the Pomodoro just finished.
    pub fn tick(&mut self, now: Duration) -> bool {
        self.breathing.engine.tick(now);
        self.pomodoro.tick(now)
    }

    /// Step through the playlists: none, first, second, ..., then none again
    pub fn cycle_playlist(&mut self) {
        let next = self.playing.map_or(0, |i| i + 1);
        self.playing = if next < PLAYLISTS.len() { Some(next) } else { None };
    }

    pub fn unmount(&mut self) -> Result<(), ConfigError> {
        self.breathing.engine.reset();
        self.pomodoro.set_preset(self.default_minutes)?;
        self.playing = None;
        Ok(())
    }
}

/// Allergy tracking: static air-quality readout and a reminder switch
#[derive(Debug, Clone, PartialEq)]
pub struct AllergiesScreen {
    pub aqi: u32,
    pub aqi_label: &'static str,
    pub pollen_level: &'static str,
    pub alert: Option<&'static str>,
    pub daily_reminder: bool,
}

impl AllergiesScreen {
    pub fn new() -> Self {
        Self {
            aqi: 41,
            aqi_label: "Good",
            pollen_level: "High",
            alert: Some("Birch pollen levels are high today. Consider taking precautions."),
            daily_reminder: true,
        }
    }

    pub fn toggle_reminder(&mut self) {
        self.daily_reminder = !self.daily_reminder;
    }

    pub fn unmount(&mut self) {
        self.daily_reminder = true;
    }
}

impl Default for AllergiesScreen {
    fn default() -> Self {
        Self::new()
    }
}
