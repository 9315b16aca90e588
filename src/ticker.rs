use std::time::Duration;

/// Default tick interval in milliseconds (20 FPS keeps the breathing dot smooth)
pub const DEFAULT_TICK_MS: u64 = 50;

/// Get tick duration for a configured interval, never shorter than 1ms
pub fn tick_duration(tick_ms: u64) -> Duration {
    Duration::from_millis(tick_ms.max(1))
}
