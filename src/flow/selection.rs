//! Ordered multi-select with a minimum-count gate.
//!
//! Used for the profile interests picker. Selection order is kept for the
//! "Selected interests" chips; membership is what matters for validation.

#[derive(Clone, Debug)]
pub struct Selection<T> {
    items: Vec<T>,
    min: usize,
}

impl<T: PartialEq> Selection<T> {
    pub fn new(min: usize) -> Self {
        Self {
            items: Vec::new(),
            min,
        }
    }

    /// Remove `item` if selected, otherwise append it. Returns true when the
    /// item is selected afterwards.
    pub fn toggle(&mut self, item: T) -> bool {
        match self.items.iter().position(|i| *i == item) {
            Some(pos) => {
                self.items.remove(pos);
                false
            }
            None => {
                self.items.push(item);
                true
            }
        }
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn min(&self) -> usize {
        self.min
    }

    /// How many more items are needed before submitting is allowed.
    pub fn missing(&self) -> usize {
        self.min.saturating_sub(self.items.len())
    }

    pub fn can_submit(&self) -> bool {
        self.items.len() >= self.min
    }

    /// Selected items in the order they were picked.
    pub fn items(&self) -> &[T] {
        &self.items
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_can_submit_iff_at_least_min(picks in proptest::collection::vec(0u8..17, 0..40)) {
            let mut sel = Selection::new(3);
            for p in picks {
                sel.toggle(p);
            }
            prop_assert_eq!(sel.can_submit(), sel.len() >= 3);
        }

        #[test]
        fn prop_double_toggle_restores_set(
            picks in proptest::collection::vec(0u8..17, 0..20),
            item in 0u8..17,
        ) {
            let mut sel = Selection::new(3);
            for p in picks {
                sel.toggle(p);
            }
            let mut before: Vec<u8> = sel.items().to_vec();
            sel.toggle(item);
            sel.toggle(item);
            let mut after: Vec<u8> = sel.items().to_vec();
            before.sort_unstable();
            after.sort_unstable();
            prop_assert_eq!(before, after);
        }

        #[test]
        fn prop_no_duplicates(picks in proptest::collection::vec(0u8..5, 0..50)) {
            let mut sel = Selection::new(3);
            for p in picks {
                sel.toggle(p);
            }
            let mut items = sel.items().to_vec();
            let len = items.len();
            items.sort_unstable();
            items.dedup();
            prop_assert_eq!(items.len(), len);
        }
    }
}
