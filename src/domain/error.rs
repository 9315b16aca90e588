use thiserror::Error;

/// Malformed timer or shape configuration, rejected at construction time
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("phase table must contain at least one phase")]
    EmptyPhaseTable,

    #[error("phase {index} has a zero duration")]
    ZeroDuration { index: usize },

    #[error("phase {index} travels edge {edge}, but the shape only has {edges} edges")]
    EdgeOutOfRange { index: usize, edge: usize, edges: usize },

    #[error("phase {index} motion does not fit the shape it is drawn on")]
    MotionMismatch { index: usize },

    #[error("polygon needs at least two vertices")]
    DegeneratePolygon,

    #[error("pomodoro preset must be at least one minute")]
    ZeroPreset,

    #[error("pomodoro preset of {minutes} minutes is longer than {max} minutes")]
    PresetTooLong { minutes: u32, max: u32 },
}
