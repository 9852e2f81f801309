//! Expand/collapse selection over the service entries.

/// Which entry is active and which one, if any, is expanded.
///
/// `expanded` is a single optional index, so at most one card is open. When it
/// is set, `active` equals it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    active: usize,
    expanded: Option<usize>,
}

impl Selection {
    pub fn active(&self) -> usize {
        self.active
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// Click on entry `index`: collapses and resets to the first entry when it
    /// is already expanded, otherwise expands it and makes it active.
    pub fn click(&mut self, index: usize) {
        if self.expanded == Some(index) {
            self.expanded = None;
            self.active = 0;
        } else {
            self.expanded = Some(index);
            self.active = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holds_invariant(selection: &Selection) -> bool {
        selection
            .expanded()
            .is_none_or(|expanded| expanded == selection.active())
    }

    #[test]
    fn starts_collapsed_on_first_entry() {
        let selection = Selection::default();
        assert_eq!(selection.active(), 0);
        assert_eq!(selection.expanded(), None);
    }

    #[test]
    fn clicking_other_entry_expands_it() {
        let mut selection = Selection::default();
        selection.click(3);
        assert_eq!((selection.active(), selection.expanded()), (3, Some(3)));
        selection.click(5);
        assert_eq!((selection.active(), selection.expanded()), (5, Some(5)));
    }

    #[test]
    fn clicking_expanded_entry_collapses_and_resets() {
        let mut selection = Selection::default();
        selection.click(4);
        selection.click(4);
        assert_eq!((selection.active(), selection.expanded()), (0, None));
    }

    #[test]
    fn first_entry_toggles_too() {
        let mut selection = Selection::default();
        selection.click(0);
        assert_eq!(selection.expanded(), Some(0));
        selection.click(0);
        assert_eq!(selection.expanded(), None);
    }

    #[test]
    fn invariant_holds_over_click_sequences() {
        let entries = 6;
        let mut selection = Selection::default();
        // Deterministic walk over many click patterns.
        let mut seed: usize = 17;
        for _ in 0..500 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let index = (seed >> 8) % entries;
            let before = selection;
            selection.click(index);

            if before.expanded() == Some(index) {
                assert_eq!(selection, Selection::default());
            } else {
                assert_eq!((selection.active(), selection.expanded()), (index, Some(index)));
            }
            assert!(holds_invariant(&selection));
            let open = (0..entries).filter(|&i| selection.is_expanded(i)).count();
            assert!(open <= 1);
        }
    }
}
