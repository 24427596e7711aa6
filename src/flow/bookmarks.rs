//! Saved course ids for the learning hub.

use std::collections::BTreeSet;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bookmarks {
    ids: BTreeSet<u32>,
}

impl Bookmarks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`. Returns true if it is now bookmarked.
    pub fn toggle(&mut self, id: u32) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_toggle_is_empty() {
        let mut b = Bookmarks::new();
        assert!(b.toggle(5));
        assert!(!b.toggle(5));
        assert_eq!(b.len(), 0);
    }

    #[test]
    fn order_of_toggles_does_not_matter() {
        let mut a = Bookmarks::new();
        a.toggle(5);
        a.toggle(7);
        let mut b = Bookmarks::new();
        b.toggle(7);
        b.toggle(5);
        assert_eq!(a, b);
        assert!(a.contains(5) && a.contains(7));
        assert_eq!(a.len(), 2);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_membership_is_toggle_parity(ids in proptest::collection::vec(0u32..10, 0..60)) {
            let mut b = Bookmarks::new();
            for id in &ids {
                b.toggle(*id);
            }
            for id in 0u32..10 {
                let count = ids.iter().filter(|x| **x == id).count();
                prop_assert_eq!(b.contains(id), count % 2 == 1);
            }
        }
    }
}
