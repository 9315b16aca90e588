use crate::config::Settings;
use crate::domain::screens::BreathingScreen;
use crate::domain::{AllergiesScreen, Clock, FocusScreen, Screen, SleepScreen, StressScreen, PRESETS};
use crate::notifications;
use anyhow::Result;
use std::time::Duration;
use tracing::info;

/// Main application state
pub struct AppState {
    pub screen: Screen,
    /// Highlighted row on the menu (index into `Screen::modules()`)
    pub menu_index: usize,

    // Each screen owns its own timers; leaving a screen resets it
    pub stress: StressScreen,
    pub sleep: SleepScreen,
    pub focus: FocusScreen,
    pub allergies: AllergiesScreen,

    pub notifications: bool,
    /// One-line message shown in the footer until the next screen change
    pub status_message: Option<String>,

    // Animation frame counter for ASCII decorations (increments every tick)
    pub animation_frame: u32,

    clock: Box<dyn Clock>,
}

impl AppState {
    pub fn new(settings: &Settings, clock: Box<dyn Clock>) -> Result<Self> {
        let resume = settings.resume_from_elapsed;

        let mut app = Self {
            screen: Screen::Menu,
            menu_index: 0,
            stress: StressScreen::new(resume)?,
            sleep: SleepScreen::new(resume)?,
            focus: FocusScreen::new(resume, settings.default_pomodoro_minutes)?,
            allergies: AllergiesScreen::new(),
            notifications: settings.notifications,
            status_message: None,
            animation_frame: 0,
            clock,
        };
        app.open(settings.start_screen)?;
        Ok(app)
    }

    /// Current clock reading
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Switch screens. The screen being left is reset, like an unmount.
    pub fn open(&mut self, screen: Screen) -> Result<()> {
        if screen == self.screen {
            return Ok(());
        }
        self.leave_current()?;

        if let Some(idx) = Screen::modules().iter().position(|s| *s == screen) {
            self.menu_index = idx;
        }
        info!(from = self.screen.name(), to = screen.name(), "screen changed");
        self.screen = screen;
        self.status_message = None;
        Ok(())
    }

    /// Return to the menu
    pub fn back_to_menu(&mut self) -> Result<()> {
        self.open(Screen::Menu)
    }

    fn leave_current(&mut self) -> Result<()> {
        match self.screen {
            Screen::Stress => self.stress.unmount(),
            Screen::Sleep => self.sleep.unmount(),
            Screen::Focus => self.focus.unmount()?,
            Screen::Allergies => self.allergies.unmount(),
            Screen::Menu => {}
        }
        Ok(())
    }

    /// Move menu selection up
    pub fn move_selection_up(&mut self) {
        if self.menu_index > 0 {
            self.menu_index -= 1;
        }
    }

    /// Move menu selection down
    pub fn move_selection_down(&mut self) {
        if self.menu_index + 1 < Screen::modules().len() {
            self.menu_index += 1;
        }
    }

    /// Open the highlighted menu entry
    pub fn open_selected(&mut self) -> Result<()> {
        let screen = Screen::modules()[self.menu_index.min(Screen::modules().len() - 1)];
        self.open(screen)
    }

    /// The breathing exercise on the current screen, if it has one
    pub fn active_breathing(&self) -> Option<&BreathingScreen> {
        match self.screen {
            Screen::Stress => Some(&self.stress.breathing),
            Screen::Sleep => Some(&self.sleep.breathing),
            Screen::Focus => Some(&self.focus.breathing),
            Screen::Menu | Screen::Allergies => None,
        }
    }

    fn active_breathing_mut(&mut self) -> Option<&mut BreathingScreen> {
        match self.screen {
            Screen::Stress => Some(&mut self.stress.breathing),
            Screen::Sleep => Some(&mut self.sleep.breathing),
            Screen::Focus => Some(&mut self.focus.breathing),
            Screen::Menu | Screen::Allergies => None,
        }
    }

    /// Start or stop the breathing exercise on the current screen
    pub fn toggle_breathing(&mut self) {
        let now = self.now();
        if let Some(breathing) = self.active_breathing_mut() {
            breathing.engine.toggle(now);
            let engine = &breathing.engine;
            info!(
                exercise = breathing.name,
                running = engine.is_running(),
                phase = engine.phase_index(),
                remaining = engine.seconds_remaining(),
                elapsed_ms = engine.elapsed().as_millis() as u64,
                "breathing toggled"
            );
        }
    }

    /// Start or pause the Pomodoro (Focus screen only)
    pub fn toggle_pomodoro(&mut self) {
        if self.screen != Screen::Focus {
            return;
        }
        let now = self.now();
        self.focus.pomodoro.toggle(now);
    }

    /// Reset the Pomodoro to its preset length (Focus screen only)
    pub fn reset_pomodoro(&mut self) {
        if self.screen == Screen::Focus {
            self.focus.pomodoro.reset();
            self.status_message = None;
        }
    }

    /// Load preset `index` of [`PRESETS`] (Focus screen only)
    pub fn select_preset(&mut self, index: usize) -> Result<()> {
        if self.screen != Screen::Focus {
            return Ok(());
        }
        if let Some(minutes) = PRESETS.get(index) {
            self.focus.pomodoro.set_preset(*minutes)?;
            self.status_message = None;
        }
        Ok(())
    }

    /// Toggle the decorative music control on the current screen
    pub fn toggle_music(&mut self) {
        match self.screen {
            Screen::Stress => self.stress.music_playing = !self.stress.music_playing,
            Screen::Focus => self.focus.cycle_playlist(),
            _ => {}
        }
    }

    /// Toggle the daily medication reminder (Allergies screen only)
    pub fn toggle_reminder(&mut self) {
        if self.screen == Screen::Allergies {
            self.allergies.toggle_reminder();
        }
    }

    /// Sample the clock and advance the timers of the mounted screen
    pub fn tick(&mut self) {
        let now = self.now();

        match self.screen {
            Screen::Stress => self.stress.tick(now),
            Screen::Sleep => self.sleep.tick(now),
            Screen::Focus => {
                if self.focus.tick(now) {
                    let minutes = self.focus.pomodoro.minutes();
                    self.status_message = Some(format!("⏰ {} minute session complete", minutes));
                    if self.notifications {
                        notifications::notify_pomodoro_finished(minutes);
                    }
                }
            }
            Screen::Menu | Screen::Allergies => {}
        }

        // Increment animation frame counter (wraps at u32::MAX)
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }
}
