use super::enums::PhaseLabel;
use super::error::ConfigError;
use super::geometry::Motion;
use std::time::Duration;

/// Display accent for a phase, opaque to the timer logic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accent {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Accent {
    /// Build from a packed 0xRRGGBB value
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }
}

/// One timed segment of a breathing cycle
#[derive(Debug, Clone, PartialEq)]
pub struct Phase {
    pub label: PhaseLabel,
    pub duration_secs: u32,
    pub motion: Motion,
    pub accent: Accent,
    pub hint: &'static str,
}

impl Phase {
    pub fn new(
        label: PhaseLabel,
        duration_secs: u32,
        motion: Motion,
        accent: Accent,
        hint: &'static str,
    ) -> Self {
        Self {
            label,
            duration_secs,
            motion,
            accent,
            hint,
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.duration_secs))
    }
}

/// Ordered, non-empty list of phases that repeats forever
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseTable {
    phases: Vec<Phase>,
}

impl PhaseTable {
    /// Validate and wrap a list of phases
    pub fn new(phases: Vec<Phase>) -> Result<Self, ConfigError> {
        if phases.is_empty() {
            return Err(ConfigError::EmptyPhaseTable);
        }
        if let Some(index) = phases.iter().position(|p| p.duration_secs == 0) {
            return Err(ConfigError::ZeroDuration { index });
        }
        Ok(Self { phases })
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    /// Phase at `index`, wrapping modulo the table length
    pub fn get(&self, index: usize) -> &Phase {
        &self.phases[index % self.phases.len()]
    }

    /// Index of the phase after `index`
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.phases.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Phase> {
        self.phases.iter()
    }

    /// Length of one full cycle
    pub fn cycle_duration(&self) -> Duration {
        self.phases.iter().map(Phase::duration).sum()
    }

    /// Durations joined for display, e.g. "4-7-8"
    pub fn rhythm(&self) -> String {
        self.phases
            .iter()
            .map(|p| p.duration_secs.to_string())
            .collect::<Vec<_>>()
            .join("-")
    }
}
