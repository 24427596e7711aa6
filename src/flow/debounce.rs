//! Tick-driven debounce: only the last value of a burst gets through.
//!
//! Every [`Debouncer::push`] replaces the pending value and restarts the
//! quiet window. [`Debouncer::tick`] releases the pending value once the
//! window has elapsed with no further pushes. Superseded values are dropped
//! and never released.
//!
//! Pushes arrive between frames, so the first tick after a push covers time
//! from before it. That tick only starts the window; the full quiet period
//! is counted from the ticks after it.

#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    quiet_ticks: u32,
    pending: Option<Pending<T>>,
}

#[derive(Clone, Debug)]
struct Pending<T> {
    value: T,
    remaining: u32,
    started: bool,
}

impl<T> Debouncer<T> {
    pub fn new(quiet_ticks: u32) -> Self {
        Self {
            quiet_ticks: quiet_ticks.max(1),
            pending: None,
        }
    }

    /// Schedule `value`, cancelling whatever was pending.
    pub fn push(&mut self, value: T) {
        self.pending = Some(Pending {
            value,
            remaining: self.quiet_ticks,
            started: false,
        });
    }

    /// Advance time. Returns the pending value once its window has elapsed.
    pub fn tick(&mut self, delta_ticks: u32) -> Option<T> {
        let pending = self.pending.as_mut()?;
        if !pending.started {
            pending.started = true;
            return None;
        }
        pending.remaining = pending.remaining.saturating_sub(delta_ticks);
        if pending.remaining == 0 {
            self.pending.take().map(|p| p.value)
        } else {
            None
        }
    }

    /// Drop the pending value without releasing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_pending_initially() {
        let mut d: Debouncer<String> = Debouncer::new(6);
        assert!(!d.is_pending());
        assert_eq!(d.tick(100), None);
    }

    #[test]
    fn releases_after_quiet_window() {
        let mut d = Debouncer::new(6);
        d.push("data");
        assert_eq!(d.tick(1), None);
        assert_eq!(d.tick(5), None);
        assert_eq!(d.tick(1), Some("data"));
        assert!(!d.is_pending());
        assert_eq!(d.tick(10), None);
    }

    #[test]
    fn push_mid_frame_waits_a_full_window() {
        // The push lands just before a frame that credits 3 ticks; none of
        // that time counts toward the window.
        let mut d = Debouncer::new(6);
        d.push(1);
        assert_eq!(d.tick(3), None);
        assert_eq!(d.tick(3), None);
        assert_eq!(d.tick(2), None);
        assert_eq!(d.tick(1), Some(1));
    }

    #[test]
    fn burst_releases_only_last_value() {
        let mut d = Debouncer::new(6);
        let mut released = Vec::new();
        d.push("d");
        released.extend(d.tick(1));
        released.extend(d.tick(2));
        d.push("da");
        released.extend(d.tick(1));
        released.extend(d.tick(2));
        d.push("dat");
        released.extend(d.tick(1));
        released.extend(d.tick(5));
        assert!(released.is_empty());
        released.extend(d.tick(1));
        assert_eq!(released, vec!["dat"]);
    }

    #[test]
    fn push_restarts_window() {
        let mut d = Debouncer::new(6);
        d.push(1);
        d.tick(1);
        assert_eq!(d.tick(5), None);
        d.push(2);
        d.tick(1);
        assert_eq!(d.tick(5), None);
        assert_eq!(d.tick(1), Some(2));
    }

    #[test]
    fn cancel_drops_pending() {
        let mut d = Debouncer::new(6);
        d.push(1);
        d.cancel();
        assert_eq!(d.tick(1), None);
        assert_eq!(d.tick(100), None);
    }

    #[test]
    fn large_delta_after_start_releases() {
        let mut d = Debouncer::new(6);
        d.push(1);
        assert_eq!(d.tick(50), None);
        assert_eq!(d.tick(50), Some(1));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Keystrokes separated by less than the quiet window never reach
        /// the consumer; only the final one does.
        #[test]
        fn prop_only_last_of_burst_released(
            window in 2u32..20,
            gaps in proptest::collection::vec(0u32..20, 1..15),
        ) {
            let mut d = Debouncer::new(window);
            let mut released = Vec::new();
            let count = gaps.len();
            for (i, gap) in gaps.into_iter().enumerate() {
                d.push(i);
                released.extend(d.tick(1));
                released.extend(d.tick(gap % window));
            }
            released.extend(d.tick(1));
            released.extend(d.tick(window));
            prop_assert_eq!(released, vec![count - 1]);
        }
    }
}
