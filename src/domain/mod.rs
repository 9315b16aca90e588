pub mod clock;
pub mod engine;
pub mod enums;
pub mod error;
pub mod geometry;
pub mod patterns;
pub mod phase;
pub mod pomodoro;
pub mod screens;

pub use clock::{Clock, SystemClock};
#[cfg(test)]
pub use clock::ManualClock;
pub use engine::Snapshot;
pub use enums::Screen;
pub use geometry::{Motion, Point, RenderCoordinate, Shape, VIEWPORT};
pub use phase::Accent;
pub use pomodoro::PRESETS;
pub use screens::{AllergiesScreen, BreathingScreen, FocusScreen, SleepScreen, StressScreen};
