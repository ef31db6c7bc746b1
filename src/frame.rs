use std::time::Instant;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    /// Milliseconds since the clock started, the unit camera rigs expect
    pub timestamp_ms: f64,
    /// Seconds since the previous frame
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, timestamp_ms: f64, delta: f32) -> Self {
        Self { number, timestamp_ms, delta }
    }

    pub fn seconds(&self) -> f32 {
        (self.timestamp_ms / 1000.0) as f32
    }
}

#[derive(Debug, Clone, Copy)]
enum Pacing {
    Realtime { start: Instant, last: Instant },
    Fixed { step_ms: f64 },
}

/// Infinite iterator that yields frame information
/// Use this in a loop: `for frame in clock.take(n) { ... }`
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_number: u64,
    pacing: Pacing,
}

impl FrameClock {
    /// Timestamps follow the wall clock
    pub fn realtime() -> Self {
        let now = Instant::now();
        Self {
            frame_number: 0,
            pacing: Pacing::Realtime { start: now, last: now },
        }
    }

    /// Timestamps advance by exactly `1 / hz` seconds per frame, starting at zero
    pub fn fixed(hz: f32) -> Self {
        Self {
            frame_number: 0,
            pacing: Pacing::Fixed { step_ms: 1000.0 / hz as f64 },
        }
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }
}

impl Iterator for FrameClock {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let info = match &mut self.pacing {
            Pacing::Realtime { start, last } => {
                let now = Instant::now();
                let delta = now.duration_since(*last).as_secs_f32();
                let timestamp_ms = now.duration_since(*start).as_secs_f64() * 1000.0;
                *last = now;
                FrameInfo::new(self.frame_number, timestamp_ms, delta)
            }
            Pacing::Fixed { step_ms } => {
                let delta = if self.frame_number == 0 { 0.0 } else { (*step_ms / 1000.0) as f32 };
                FrameInfo::new(self.frame_number, self.frame_number as f64 * *step_ms, delta)
            }
        };

        self.frame_number += 1;
        Some(info)
    }
}
