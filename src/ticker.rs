use std::time::Duration;

/// Shortest poll interval accepted from settings, in milliseconds
pub const MIN_TICK_MS: u64 = 50;

/// Get tick duration, clamped so a tiny setting can't spin the loop
pub fn tick_duration(tick_ms: u64) -> Duration {
    Duration::from_millis(tick_ms.max(MIN_TICK_MS))
}
