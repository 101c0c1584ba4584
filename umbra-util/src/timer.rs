use std::{
    fmt,
    time::{Duration, Instant},
};

/// A stopwatch that starts measuring when created and reports the elapsed
/// time when asked.
///
/// Surrounding code uses it to profile work such as integration calls; the
/// probe itself holds nothing but its start instant.
///
/// # Examples
///
/// ```
/// use umbra_util::Timer;
///
/// let timer = Timer::new();
/// let elapsed = timer.elapsed_nanos();
/// println!("took {timer}");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    started: Instant,
}

impl Timer {
    /// Starts a new timer at the current instant.
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Time elapsed since this timer was created.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Nanoseconds elapsed since this timer was created.
    pub fn elapsed_nanos(&self) -> u128 {
        self.elapsed().as_nanos()
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the elapsed time scaled to a readable unit.
impl fmt::Display for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&scaled(self.elapsed_nanos()))
    }
}

fn scaled(nanos: u128) -> String {
    if nanos < 1_000 {
        format!("{nanos}ns")
    } else if nanos < 1_000_000 {
        format!("{:.3}us", nanos as f64 / 1e3)
    } else if nanos < 1_000_000_000 {
        format!("{:.3}ms", nanos as f64 / 1e6)
    } else {
        format!("{:.3}s", nanos as f64 / 1e9)
    }
}
