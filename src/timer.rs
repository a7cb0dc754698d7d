use std::time::{Duration, Instant};

/// stopwatch that can be paused, used to cap the frame rate
#[derive(Clone, Debug, Default)]
pub struct FrameTimer {
    /// when the running stretch began
    started_at: Option<Instant>,
    /// time collected before the current pause
    paused_with: Option<Duration>,
}

impl FrameTimer {
    pub fn new() -> FrameTimer {
        FrameTimer::default()
    }

    pub fn start(&mut self) {
        self.started_at = Some(Instant::now());
        self.paused_with = None;
    }

    pub fn stop(&mut self) {
        self.started_at = None;
        self.paused_with = None;
    }

    pub fn pause(&mut self) {
        if let (Some(started_at), None) = (self.started_at, self.paused_with) {
            self.paused_with = Some(started_at.elapsed());
        }
    }

    pub fn unpause(&mut self) {
        if let (Some(_), Some(paused_with)) = (self.started_at, self.paused_with.take()) {
            self.started_at = Instant::now().checked_sub(paused_with);
        }
    }

    /// time on the clock. zero while stopped
    pub fn ticks(&self) -> Duration {
        match (self.started_at, self.paused_with) {
            (Some(_), Some(paused_with)) => paused_with,
            (Some(started_at), None) => started_at.elapsed(),
            (None, _) => Duration::from_secs(0),
        }
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn is_paused(&self) -> bool {
        self.is_started() && self.paused_with.is_some()
    }

    /// sleeps out whatever is left of `frame` since the last start
    pub fn wait_for_frame(&self, frame: Duration) {
        let elapsed = self.ticks();
        if elapsed < frame {
            std::thread::sleep(frame - elapsed);
        }
    }
}

/// length of one frame at `fps`. `None` leaves the loop uncapped
pub fn frame_length(fps: Option<u32>) -> Option<Duration> {
    match fps {
        Some(fps) if fps > 0 => Some(Duration::from_secs(1) / fps),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn stopped_timer_reads_zero() {
        let mut timer = FrameTimer::new();
        assert_eq!(timer.ticks(), Duration::from_secs(0));
        timer.start();
        sleep(Duration::from_millis(2));
        timer.stop();
        assert!(!timer.is_started());
        assert_eq!(timer.ticks(), Duration::from_secs(0));
    }

    #[test]
    fn paused_timer_holds_still() {
        let mut timer = FrameTimer::new();
        timer.pause();
        assert!(!timer.is_paused());
        timer.start();
        sleep(Duration::from_millis(5));
        timer.pause();
        assert!(timer.is_paused());
        let held = timer.ticks();
        sleep(Duration::from_millis(5));
        assert_eq!(timer.ticks(), held);
        timer.unpause();
        assert!(!timer.is_paused());
        assert!(timer.ticks() >= held);
    }

    #[test]
    fn frame_lengths() {
        assert_eq!(frame_length(None), None);
        assert_eq!(frame_length(Some(0)), None);
        assert_eq!(frame_length(Some(50)), Some(Duration::from_millis(20)));
    }
}
