//! Fixed-step frame clock.
//!
//! `draw_web()` fires roughly every animation frame with a variable gap.
//! [`FrameClock`] turns those timestamps into whole ticks so debounce
//! windows and simulated request delays can be counted in ticks and tested
//! without a browser.

/// Longest gap between two frames that is still credited in full. A tab
/// coming back from the background should not flush every timer at once.
const MAX_FRAME_GAP_MS: f64 = 500.0;

pub struct FrameClock {
    ms_per_tick: f64,
    /// Milliseconds seen but not yet converted to a tick.
    carry_ms: f64,
    pub elapsed_ticks: u64,
    last_frame_ms: Option<f64>,
}

impl FrameClock {
    pub fn new(ticks_per_sec: u32) -> Self {
        Self {
            ms_per_tick: 1000.0 / ticks_per_sec.max(1) as f64,
            carry_ms: 0.0,
            elapsed_ticks: 0,
            last_frame_ms: None,
        }
    }

    /// Record a frame timestamp and return how many ticks passed since the
    /// previous one. The first frame only establishes the baseline.
    pub fn update(&mut self, now_ms: f64) -> u32 {
        let gap = self
            .last_frame_ms
            .map(|prev| (now_ms - prev).clamp(0.0, MAX_FRAME_GAP_MS))
            .unwrap_or(0.0);
        self.last_frame_ms = Some(now_ms);

        self.carry_ms += gap;
        let ticks = (self.carry_ms / self.ms_per_tick) as u32;
        self.carry_ms -= ticks as f64 * self.ms_per_tick;
        self.elapsed_ticks += ticks as u64;
        ticks
    }
}

/// Current high-resolution timestamp in milliseconds.
///
/// Prefers `performance.now()`, falls back to `Date.now()` when the
/// Performance API is unavailable.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_is_baseline() {
        let mut clock = FrameClock::new(20);
        assert_eq!(clock.update(1234.0), 0);
        assert_eq!(clock.elapsed_ticks, 0);
    }

    #[test]
    fn one_tick_per_interval() {
        let mut clock = FrameClock::new(20); // 50ms per tick
        clock.update(0.0);
        assert_eq!(clock.update(50.0), 1);
        assert_eq!(clock.update(100.0), 1);
        assert_eq!(clock.elapsed_ticks, 2);
    }

    #[test]
    fn leftover_ms_is_carried() {
        let mut clock = FrameClock::new(20);
        clock.update(0.0);
        assert_eq!(clock.update(70.0), 1); // 20ms carried
        assert_eq!(clock.update(100.0), 1); // 20 + 30 = 50
        assert_eq!(clock.elapsed_ticks, 2);
    }

    #[test]
    fn background_gap_is_capped() {
        let mut clock = FrameClock::new(20);
        clock.update(0.0);
        // 60s in a background tab is credited as 500ms = 10 ticks
        assert_eq!(clock.update(60_000.0), 10);
    }

    #[test]
    fn clock_going_backwards_adds_nothing() {
        let mut clock = FrameClock::new(20);
        clock.update(1000.0);
        assert_eq!(clock.update(900.0), 0);
        assert_eq!(clock.update(950.0), 1);
    }

    #[test]
    fn sixty_fps_for_one_second() {
        let mut clock = FrameClock::new(20);
        clock.update(0.0);
        let total: u32 = (1..=60).map(|i| clock.update(i as f64 * 16.667)).sum();
        assert!((19..=21).contains(&total), "expected ~20 ticks, got {}", total);
    }

    #[test]
    fn debounce_window_in_frames() {
        // 300ms quiet period at 20 ticks/sec is 6 ticks, reached after
        // ~18 frames at 60fps.
        let mut clock = FrameClock::new(20);
        clock.update(0.0);
        let mut ticks = 0;
        let mut frames = 0;
        while ticks < 6 {
            frames += 1;
            ticks += clock.update(frames as f64 * 16.667);
        }
        assert!((18..=19).contains(&frames), "took {} frames", frames);
    }
}
