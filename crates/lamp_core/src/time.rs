use std::time::{Duration, Instant};

const FPS_SAMPLE_COUNT: usize = 60;

/// Frames slower than this are reported but still simulated with their full delta.
const LONG_FRAME_SECS: f32 = 0.25;

/// Variable-step frame clock. The baseline is taken at construction, so the
/// first `begin_frame` measures the time since loop entry.
pub struct FrameClock {
    last_instant: Instant,
    pub dt: f32,
    pub total_time: f64,
    pub frame_count: u64,

    fps_samples: [f32; FPS_SAMPLE_COUNT],
    fps_sample_index: usize,
    pub smoothed_fps: f32,
    pub smoothed_frame_time_ms: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(baseline: Instant) -> Self {
        Self {
            last_instant: baseline,
            dt: 0.0,
            total_time: 0.0,
            frame_count: 0,
            fps_samples: [1.0 / 60.0; FPS_SAMPLE_COUNT],
            fps_sample_index: 0,
            smoothed_fps: 60.0,
            smoothed_frame_time_ms: 16.667,
        }
    }

    /// Samples the monotonic clock and returns seconds since the previous frame.
    pub fn begin_frame(&mut self) -> f32 {
        self.advance_to(Instant::now())
    }

    pub fn advance_to(&mut self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.last_instant);
        self.last_instant = now;
        self.record(elapsed)
    }

    fn record(&mut self, elapsed: Duration) -> f32 {
        self.dt = elapsed.as_secs_f32();
        self.total_time += elapsed.as_secs_f64();
        self.frame_count += 1;

        // Large deltas are not clamped; the simulation overshoots visibly.
        if self.dt > LONG_FRAME_SECS {
            log::warn!("Frame took {:.1}ms", self.dt * 1000.0);
        }

        self.fps_samples[self.fps_sample_index] = self.dt;
        self.fps_sample_index = (self.fps_sample_index + 1) % FPS_SAMPLE_COUNT;
        let avg_dt: f32 = self.fps_samples.iter().sum::<f32>() / FPS_SAMPLE_COUNT as f32;
        self.smoothed_frame_time_ms = avg_dt * 1000.0;
        self.smoothed_fps = if avg_dt > 0.0 { 1.0 / avg_dt } else { 0.0 };

        self.dt
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
