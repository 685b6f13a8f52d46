//! Swipe detection from horizontal pointer samples

/// Minimum horizontal travel, in pixels, for a drag to count as a swipe
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Direction requested by a completed swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved right-to-left
    Forward,
    /// Finger moved left-to-right
    Backward,
}

/// Pair of transient samples for one pointer interaction.
///
/// Samples are explicit options: a pointer at x = 0 is a real sample.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GestureBuffer {
    start: Option<f64>,
    end: Option<f64>,
}

/// What resolving a gesture amounted to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureResolution {
    /// Start or end sample missing (a tap, or a stray release)
    Incomplete,
    /// Travel did not exceed the threshold
    BelowThreshold,
    Swipe(Swipe),
}

impl GestureBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new interaction, dropping anything in flight
    pub fn start(&mut self, x: f64) {
        self.start = Some(x);
        self.end = None;
    }

    /// Record the latest position; last write wins
    pub fn update(&mut self, x: f64) {
        self.end = Some(x);
    }

    /// Classify the interaction and clear both samples
    pub fn resolve(&mut self) -> GestureResolution {
        let samples = (self.start.take(), self.end.take());
        let (Some(start), Some(end)) = samples else {
            return GestureResolution::Incomplete;
        };

        let distance = start - end;
        if distance > SWIPE_THRESHOLD_PX {
            GestureResolution::Swipe(Swipe::Forward)
        } else if distance < -SWIPE_THRESHOLD_PX {
            GestureResolution::Swipe(Swipe::Backward)
        } else {
            GestureResolution::BelowThreshold
        }
    }

    #[cfg(test)]
    pub fn start_sample(&self) -> Option<f64> {
        self.start
    }

    #[cfg(test)]
    pub fn end_sample(&self) -> Option<f64> {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe(from: f64, to: f64) -> GestureResolution {
        let mut buffer = GestureBuffer::new();
        buffer.start(from);
        buffer.update(to);
        buffer.resolve()
    }

    #[test]
    fn test_right_to_left_is_forward() {
        assert_eq!(swipe(200.0, 100.0), GestureResolution::Swipe(Swipe::Forward));
    }

    #[test]
    fn test_left_to_right_is_backward() {
        assert_eq!(swipe(100.0, 200.0), GestureResolution::Swipe(Swipe::Backward));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert_eq!(swipe(100.0, 70.0), GestureResolution::BelowThreshold);
        assert_eq!(swipe(100.0, 50.0), GestureResolution::BelowThreshold);
        assert_eq!(swipe(50.0, 100.0), GestureResolution::BelowThreshold);
        assert_eq!(swipe(100.5, 50.0), GestureResolution::Swipe(Swipe::Forward));
    }

    #[test]
    fn test_zero_is_a_real_sample() {
        assert_eq!(swipe(120.0, 0.0), GestureResolution::Swipe(Swipe::Forward));
        assert_eq!(swipe(0.0, 120.0), GestureResolution::Swipe(Swipe::Backward));
    }

    #[test]
    fn test_missing_samples_are_incomplete() {
        let mut buffer = GestureBuffer::new();
        assert_eq!(buffer.resolve(), GestureResolution::Incomplete);

        buffer.start(300.0);
        assert_eq!(buffer.resolve(), GestureResolution::Incomplete);

        buffer.update(10.0);
        assert_eq!(buffer.resolve(), GestureResolution::Incomplete);
    }

    #[test]
    fn test_resolve_clears_samples() {
        let mut buffer = GestureBuffer::new();
        buffer.start(200.0);
        buffer.update(100.0);
        buffer.resolve();
        assert!(buffer.is_empty());
        assert_eq!(buffer.resolve(), GestureResolution::Incomplete);
    }

    #[test]
    fn test_start_discards_in_flight_end() {
        let mut buffer = GestureBuffer::new();
        buffer.start(400.0);
        buffer.update(100.0);
        buffer.start(250.0);
        assert_eq!(buffer.start_sample(), Some(250.0));
        assert_eq!(buffer.end_sample(), None);
    }

    #[test]
    fn test_last_move_wins() {
        let mut buffer = GestureBuffer::new();
        buffer.start(200.0);
        buffer.update(10.0);
        buffer.update(180.0);
        assert_eq!(buffer.resolve(), GestureResolution::BelowThreshold);
    }
}
