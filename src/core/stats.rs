/// Exponentially smoothed frame timing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    /// Smoothed wall-clock time between frames
    average_frame_millis: f64,

    /// Weight kept from the previous average on every sample
    smoothing: f64,

    /// Frames recorded so far
    frames: u64,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new(0.95)
    }
}

impl FrameStats {
    /// Creates empty stats; `smoothing` is clamped to `[0, 1]`
    pub fn new(smoothing: f64) -> Self {
        Self {
            average_frame_millis: 0.0,
            smoothing: smoothing.clamp(0.0, 1.0),
            frames: 0,
        }
    }

    /// Folds one frame duration into the average
    pub fn record(&mut self, elapsed_millis: u64) {
        self.average_frame_millis =
            self.smoothing * self.average_frame_millis + (1.0 - self.smoothing) * elapsed_millis as f64;
        self.frames += 1;
    }

    /// Returns the smoothed frame duration
    pub fn average_frame_millis(&self) -> f64 {
        self.average_frame_millis
    }

    /// Returns the number of recorded frames
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
