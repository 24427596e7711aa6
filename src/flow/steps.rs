//! Bounded step index for multi-step flows.

/// What happened on an [`StepNavigator::advance`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Current step not answered (or flow already finished). Nothing changed.
    Blocked,
    /// Moved to the next step.
    Moved,
    /// The last step was passed. Fired at most once per navigator.
    Completed,
}

#[derive(Clone, Debug)]
pub struct StepNavigator {
    current: usize,
    total: usize,
    completed: bool,
}

impl StepNavigator {
    /// A flow with `total` steps. Zero is bumped to one so the index range
    /// is never empty.
    pub fn new(total: usize) -> Self {
        Self {
            current: 0,
            total: total.max(1),
            completed: false,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current == self.total - 1
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Move forward, or finish the flow on the last step.
    pub fn advance(&mut self, is_answered: bool) -> StepOutcome {
        if !is_answered || self.completed {
            return StepOutcome::Blocked;
        }
        if self.current < self.total - 1 {
            self.current += 1;
            StepOutcome::Moved
        } else {
            self.completed = true;
            StepOutcome::Completed
        }
    }

    /// Move back one step. Returns false on the first step.
    pub fn retreat(&mut self) -> bool {
        if self.current > 0 && !self.completed {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Percentage of steps reached, in (0, 100].
    pub fn progress_percent(&self) -> f64 {
        (self.current + 1) as f64 / self.total as f64 * 100.0
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_index_stays_in_bounds(
            total in 1usize..20,
            moves in proptest::collection::vec(any::<bool>(), 0..100),
        ) {
            let mut nav = StepNavigator::new(total);
            for forward in moves {
                if forward {
                    nav.advance(true);
                } else {
                    nav.retreat();
                }
                prop_assert!(nav.current() < total);
            }
        }

        #[test]
        fn prop_progress_non_decreasing_when_advancing(total in 1usize..20, steps in 0usize..40) {
            let mut nav = StepNavigator::new(total);
            let mut last = nav.progress_percent();
            for _ in 0..steps {
                nav.advance(true);
                let now = nav.progress_percent();
                prop_assert!(now >= last);
                prop_assert!(now > 0.0 && now <= 100.0);
                last = now;
            }
        }

        #[test]
        fn prop_completed_fires_at_most_once(total in 1usize..12, extra in 0usize..10) {
            let mut nav = StepNavigator::new(total);
            let completions = (0..total + extra)
                .filter(|_| nav.advance(true) == StepOutcome::Completed)
                .count();
            prop_assert_eq!(completions, 1);
        }
    }
}
