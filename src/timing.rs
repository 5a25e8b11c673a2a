//! Pass timing.
#![allow(unsafe_code)]

use std::fmt;
use std::time::{Duration, Instant};

/// Clock used to time a pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Clock {
    /// Processor time consumed by this process, like C `clock()`.
    #[default]
    Cpu,
    /// Monotonic wall-clock time.
    Wall,
}

/// CPU time used by the process so far.
///
/// Falls back to zero if the platform refuses the query.
pub fn process_cpu_time() -> Duration {
    // SAFETY: timespec is plain old data; all-zero is a valid value.
    let mut ts: libc::timespec = unsafe { std::mem::zeroed() };
    // SAFETY: `ts` is a valid, writable timespec.
    let rc = unsafe { libc::clock_gettime(libc::CLOCK_PROCESS_CPUTIME_ID, &mut ts) };
    if rc != 0 {
        log::warn!("clock_gettime(CLOCK_PROCESS_CPUTIME_ID) failed");
        return Duration::ZERO;
    }
    Duration::new(ts.tv_sec as u64, ts.tv_nsec as u32)
}

#[derive(Debug, Clone, Copy)]
enum Mark {
    Cpu(Duration),
    Wall(Instant),
}

/// A started measurement.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    mark: Mark,
}

impl Stopwatch {
    pub fn start(clock: Clock) -> Self {
        let mark = match clock {
            Clock::Cpu => Mark::Cpu(process_cpu_time()),
            Clock::Wall => Mark::Wall(Instant::now()),
        };
        Self { mark }
    }

    pub fn elapsed(&self) -> Duration {
        match self.mark {
            Mark::Cpu(start) => process_cpu_time().saturating_sub(start),
            Mark::Wall(start) => start.elapsed(),
        }
    }
}

/// Elapsed time of one labelled pass.
///
/// Displays as `"<label>: <seconds> sec"` with millisecond precision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timing {
    label: String,
    elapsed: Duration,
}

impl Timing {
    pub fn new(label: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            label: label.into(),
            elapsed,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.3} sec", self.label, self.elapsed.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, Stopwatch, Timing, process_cpu_time};
    use std::time::Duration;

    #[test]
    fn test_timing_display() {
        let t = Timing::new("strxcpy", Duration::from_millis(1234));
        assert_eq!(t.to_string(), "strxcpy: 1.234 sec");
        assert_eq!(t.elapsed(), Duration::from_millis(1234));
        let t = Timing::new("memcpy from libc", Duration::from_micros(600));
        assert_eq!(t.to_string(), "memcpy from libc: 0.001 sec");
        let t = Timing::new("x", Duration::ZERO);
        assert_eq!(t.to_string(), "x: 0.000 sec");
    }

    #[test]
    fn test_cpu_clock_advances() {
        let before = process_cpu_time();
        let mut acc = 0u64;
        for i in 0..2_000_000u64 {
            acc = acc.wrapping_mul(31).wrapping_add(i);
        }
        std::hint::black_box(acc);
        assert!(process_cpu_time() >= before);
    }

    #[test]
    fn test_stopwatch_wall() {
        let watch = Stopwatch::start(Clock::Wall);
        std::thread::sleep(Duration::from_millis(5));
        assert!(watch.elapsed() >= Duration::from_millis(5));
    }

    #[test]
    fn test_default_clock_is_cpu() {
        assert_eq!(Clock::default(), Clock::Cpu);
    }
}
