//! Wall-clock timing of named sections and human-readable durations.

use std::time::{Duration, Instant};
use tracing::info;

/// Measures elapsed time for a named section and reports it through `tracing`.
#[derive(Debug, Clone)]
pub struct Stopwatch {
    name: String,
    started: Instant,
}

impl Stopwatch {
    /// Starts timing a section called `name`.
    pub fn start(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            started: Instant::now(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Logs `"<name> took <seconds> seconds"` at info level and returns the elapsed time.
    pub fn finish(self) -> Duration {
        let elapsed = self.elapsed();
        info!(
            section = %self.name,
            "{} took {:.3} seconds",
            self.name,
            elapsed.as_secs_f64()
        );
        elapsed
    }
}

/// Runs `f` inside a [`Stopwatch`] named `name` and returns its result.
pub fn timed<R>(name: &str, f: impl FnOnce() -> R) -> R {
    let watch = Stopwatch::start(name);
    let out = f();
    watch.finish();
    out
}

/// Formats milliseconds as `"[Dd ][Hh ][Mm ]S.Ts "`.
///
/// Days, hours and minutes appear only when non-zero; seconds always appear
/// with one digit of tenths. The trailing space is part of the format.
pub fn format_millis(ms: u64) -> String {
    let tenths = (ms / 100) % 10;
    let total_secs = ms / 1000;
    let secs = total_secs % 60;
    let mins = (total_secs / 60) % 60;
    let hours = (total_secs / 3600) % 24;
    let days = total_secs / 86_400;

    let mut out = String::new();
    for (value, unit) in [(days, 'd'), (hours, 'h'), (mins, 'm')] {
        if value != 0 {
            out.push_str(&format!("{value}{unit} "));
        }
    }
    out.push_str(&format!("{secs}.{tenths}s "));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_millis_sub_second() {
        assert_eq!(format_millis(0), "0.0s ");
        assert_eq!(format_millis(999), "0.9s ");
    }

    #[test]
    fn format_millis_skips_zero_units() {
        assert_eq!(format_millis(61_500), "1m 1.5s ");
        assert_eq!(format_millis(3_600_000), "1h 0.0s ");
    }

    #[test]
    fn format_millis_all_units() {
        assert_eq!(format_millis(3_723_400), "1h 2m 3.4s ");
        assert_eq!(format_millis(90_061_000), "1d 1h 1m 1.0s ");
    }

    #[test]
    fn format_millis_days_do_not_wrap() {
        assert_eq!(format_millis(40 * 86_400_000), "40d 0.0s ");
    }

    #[test]
    fn stopwatch_measures_non_negative_time() {
        let watch = Stopwatch::start("noop");
        assert_eq!(watch.name(), "noop");
        let elapsed = watch.finish();
        assert!(elapsed >= Duration::ZERO);
    }

    #[test]
    fn timed_returns_closure_result() {
        assert_eq!(timed("sum", || (1..=10).sum::<u32>()), 55);
    }
}
