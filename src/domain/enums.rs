use serde::{Deserialize, Serialize};

/// Name of a breathing phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseLabel {
    Inhale,
    Hold,
    Exhale,
}

impl PhaseLabel {
    /// Display name, as shown above the countdown
    pub fn name(&self) -> &'static str {
        match self {
            PhaseLabel::Inhale => "Inhale",
            PhaseLabel::Hold => "Hold",
            PhaseLabel::Exhale => "Exhale",
        }
    }

    /// Upper-case tag used for the compact label line
    pub fn to_tag(&self) -> &'static str {
        match self {
            PhaseLabel::Inhale => "INHALE",
            PhaseLabel::Hold => "HOLD",
            PhaseLabel::Exhale => "EXHALE",
        }
    }
}

/// Screen the user is currently looking at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    /// Module picker. Default screen.
    Menu,
    /// Triangle breathing 5-5-5.
    Stress,
    /// Air quality, pollen alert and reminders.
    Allergies,
    /// 4-7-8 wind-down breathing.
    Sleep,
    /// Box breathing plus the Pomodoro clock.
    Focus,
}

impl Screen {
    /// Get the emoji symbol for this screen
    pub fn symbol(&self) -> &'static str {
        match self {
            Screen::Menu => "🏡",
            Screen::Stress => "🧠",
            Screen::Allergies => "🍃",
            Screen::Sleep => "🌙",
            Screen::Focus => "🎯",
        }
    }

    /// Get the menu title for this screen
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Menu => "Menu",
            Screen::Stress => "Stress Management",
            Screen::Allergies => "Ask My Allergies",
            Screen::Sleep => "Better Sleep",
            Screen::Focus => "Focus",
        }
    }

    /// Get the one-line subtitle shown under the screen heading
    pub fn tagline(&self) -> &'static str {
        match self {
            Screen::Menu => "What would you like to do today?",
            Screen::Stress => "Triangle Breathing — 5 in • 5 hold • 5 out",
            Screen::Allergies => "Track symptoms and manage medications",
            Screen::Sleep => "Inhale 4s • Hold 7s • Exhale 8s",
            Screen::Focus => "Energize your mind and concentration",
        }
    }

    /// Parse a screen name as given on the command line
    pub fn from_arg(arg: &str) -> Option<Self> {
        match arg.to_lowercase().as_str() {
            "menu" => Some(Self::Menu),
            "stress" => Some(Self::Stress),
            "allergies" => Some(Self::Allergies),
            "sleep" => Some(Self::Sleep),
            "focus" => Some(Self::Focus),
            _ => None,
        }
    }

    /// Modules listed on the menu, in menu order
    pub fn modules() -> &'static [Screen] {
        &[Screen::Stress, Screen::Allergies, Screen::Sleep, Screen::Focus]
    }
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Menu
    }
}
